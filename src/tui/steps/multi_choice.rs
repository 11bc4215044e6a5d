//! Multi-choice steps: content categories, brand categories, platforms
//!
//! Space toggles membership through the draft's bounded selections, so
//! the cardinality caps live in the model; a rejected toggle surfaces
//! as a toast and leaves the selection unchanged.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{Category, Platform, SignupDraft, Toggle};
use crate::tui::widgets::{
    choices::{cursor_down, cursor_up},
    ChoiceItem, ChoiceList, ChoiceMode, Notification, NotificationQueue,
};
use crate::wizard::{StepId, Wizard};

use super::StepAction;

/// Form state for a multi-choice step
#[derive(Debug, Clone)]
pub struct MultiChoiceForm {
    pub step: StepId,
    pub cursor: usize,
}

impl Default for MultiChoiceForm {
    fn default() -> Self {
        Self::new(StepId::ContentCategories)
    }
}

impl MultiChoiceForm {
    pub fn new(step: StepId) -> Self {
        Self { step, cursor: 0 }
    }
}

fn option_count(step: StepId) -> usize {
    match step {
        StepId::ContentCategories | StepId::BrandCategories => Category::ALL.len(),
        StepId::TargetPlatforms => Platform::ALL.len(),
        _ => unreachable!("not a multi-choice step: {:?}", step),
    }
}

fn label(step: StepId, index: usize) -> String {
    match step {
        StepId::ContentCategories | StepId::BrandCategories => Category::ALL[index].to_string(),
        StepId::TargetPlatforms => Platform::ALL[index].to_string(),
        _ => unreachable!(),
    }
}

fn is_selected(step: StepId, draft: &SignupDraft, index: usize) -> bool {
    match step {
        StepId::ContentCategories => draft.content_categories.contains(Category::ALL[index]),
        StepId::BrandCategories => draft.brand_categories.contains(Category::ALL[index]),
        StepId::TargetPlatforms => draft.platforms.contains(Platform::ALL[index]),
        _ => false,
    }
}

fn toggle(step: StepId, draft: &mut SignupDraft, index: usize) -> Toggle {
    match step {
        StepId::ContentCategories => draft.content_categories.toggle(Category::ALL[index]),
        StepId::BrandCategories => draft.brand_categories.toggle(Category::ALL[index]),
        StepId::TargetPlatforms => draft.platforms.toggle(Platform::ALL[index]),
        _ => unreachable!(),
    }
}

fn selection_len(step: StepId, draft: &SignupDraft) -> usize {
    match step {
        StepId::ContentCategories => draft.content_categories.len(),
        StepId::BrandCategories => draft.brand_categories.len(),
        StepId::TargetPlatforms => draft.platforms.len(),
        _ => 0,
    }
}

fn max_selections(step: StepId, draft: &SignupDraft) -> Option<usize> {
    match step {
        StepId::ContentCategories => draft.content_categories.max(),
        StepId::BrandCategories => draft.brand_categories.max(),
        StepId::TargetPlatforms => draft.platforms.max(),
        _ => None,
    }
}

fn required_message(step: StepId) -> &'static str {
    match step {
        StepId::TargetPlatforms => "Please select at least one platform",
        _ => "Please select at least one category",
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &MultiChoiceForm, draft: &SignupDraft) {
    let count_line = match max_selections(form.step, draft) {
        Some(max) => format!(
            "Selected {} of up to {}",
            selection_len(form.step, draft),
            max
        ),
        None => format!("Selected {}", selection_len(form.step, draft)),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            count_line,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect { height: 1, ..area },
    );

    if area.height < 3 {
        return;
    }

    let items: Vec<ChoiceItem> = (0..option_count(form.step))
        .map(|i| ChoiceItem {
            label: label(form.step, i),
            selected: is_selected(form.step, draft, i),
        })
        .collect();
    frame.render_widget(
        ChoiceList::new(items, form.cursor, ChoiceMode::Multi),
        Rect {
            y: area.y + 2,
            height: area.height - 2,
            ..area
        },
    );
}

/// Handle a key for a multi-choice step
pub fn handle_key(
    key: KeyEvent,
    form: &mut MultiChoiceForm,
    wizard: &mut Wizard,
    notifications: &mut NotificationQueue,
) -> StepAction {
    let len = option_count(form.step);
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            form.cursor = cursor_up(form.cursor, len);
            StepAction::Handled
        }
        KeyCode::Down | KeyCode::Char('j') => {
            form.cursor = cursor_down(form.cursor, len);
            StepAction::Handled
        }
        KeyCode::Char(' ') => {
            let (step, cursor) = (form.step, form.cursor);
            let mut outcome = Toggle::Added;
            wizard.update_draft(|d| outcome = toggle(step, d, cursor));

            if outcome == Toggle::Rejected {
                let max = max_selections(step, wizard.draft()).unwrap_or(0);
                notifications.push(
                    Notification::error(format!("You can select up to {} categories", max))
                        .with_description(
                            "Please deselect a category before selecting a new one",
                        ),
                );
            }
            StepAction::Handled
        }
        KeyCode::Enter => {
            if selection_len(form.step, wizard.draft()) == 0 {
                notifications.push(Notification::error(required_message(form.step)));
                return StepAction::Handled;
            }
            StepAction::Completed
        }
        _ => StepAction::Ignored,
    }
}
