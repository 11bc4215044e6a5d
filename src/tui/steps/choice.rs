//! Single-choice steps: gender, industry, content volume, budget
//!
//! One selection-card view drives all four; the step id decides which
//! option list is shown and which draft field the pick lands in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{layout::Rect, Frame};

use crate::models::{BudgetRange, ContentVolume, Gender, Industry, SignupDraft};
use crate::tui::widgets::{
    choices::{cursor_down, cursor_up},
    ChoiceItem, ChoiceList, ChoiceMode, Notification, NotificationQueue,
};
use crate::wizard::{StepId, Wizard};

use super::StepAction;

/// Form state for a single-choice step
#[derive(Debug, Clone)]
pub struct ChoiceForm {
    pub step: StepId,
    pub cursor: usize,
}

impl Default for ChoiceForm {
    fn default() -> Self {
        Self {
            step: StepId::Gender,
            cursor: 0,
        }
    }
}

impl ChoiceForm {
    /// Seed the form for `step`, placing the cursor on the current pick
    pub fn from_draft(step: StepId, draft: &SignupDraft) -> Self {
        Self {
            step,
            cursor: selected_index(step, draft).unwrap_or(0),
        }
    }
}

/// Option labels for `step`, in display order
pub fn labels(step: StepId) -> Vec<String> {
    match step {
        StepId::Gender => Gender::ALL.iter().map(|g| g.to_string()).collect(),
        StepId::Industry => Industry::ALL.iter().map(|i| i.to_string()).collect(),
        StepId::ContentVolume => ContentVolume::ALL.iter().map(|v| v.to_string()).collect(),
        StepId::CampaignBudget => BudgetRange::ALL.iter().map(|b| b.to_string()).collect(),
        _ => unreachable!("not a single-choice step: {:?}", step),
    }
}

/// Index of the draft's current pick for `step`
pub fn selected_index(step: StepId, draft: &SignupDraft) -> Option<usize> {
    match step {
        StepId::Gender => draft
            .gender
            .and_then(|g| Gender::ALL.iter().position(|o| *o == g)),
        StepId::Industry => draft
            .industry
            .and_then(|i| Industry::ALL.iter().position(|o| *o == i)),
        StepId::ContentVolume => draft
            .content_volume
            .and_then(|v| ContentVolume::ALL.iter().position(|o| *o == v)),
        StepId::CampaignBudget => draft
            .budget
            .and_then(|b| BudgetRange::ALL.iter().position(|o| *o == b)),
        _ => None,
    }
}

/// Write the pick at `index` into the draft field for `step`
fn select(step: StepId, draft: &mut SignupDraft, index: usize) {
    match step {
        StepId::Gender => draft.gender = Some(Gender::ALL[index]),
        StepId::Industry => draft.industry = Some(Industry::ALL[index]),
        StepId::ContentVolume => draft.content_volume = Some(ContentVolume::ALL[index]),
        StepId::CampaignBudget => draft.budget = Some(BudgetRange::ALL[index]),
        _ => unreachable!(),
    }
}

fn required_message(step: StepId) -> &'static str {
    match step {
        StepId::Gender => "Please select a gender",
        StepId::Industry => "Please select an industry",
        StepId::ContentVolume => "Please select a content volume",
        StepId::CampaignBudget => "Please select a budget range",
        _ => "Please make a selection",
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &ChoiceForm, draft: &SignupDraft) {
    let selected = selected_index(form.step, draft);
    let items: Vec<ChoiceItem> = labels(form.step)
        .into_iter()
        .enumerate()
        .map(|(i, label)| ChoiceItem {
            label,
            selected: selected == Some(i),
        })
        .collect();
    frame.render_widget(ChoiceList::new(items, form.cursor, ChoiceMode::Single), area);
}

/// Handle a key for a single-choice step
pub fn handle_key(
    key: KeyEvent,
    form: &mut ChoiceForm,
    wizard: &mut Wizard,
    notifications: &mut NotificationQueue,
) -> StepAction {
    let len = labels(form.step).len();
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
            wizard.update_draft(|d| select(step, d, cursor));
            StepAction::Handled
        }
        KeyCode::Enter => {
            if selected_index(form.step, wizard.draft()).is_none() {
                notifications.push(Notification::error(required_message(form.step)));
                return StepAction::Handled;
            }
            StepAction::Completed
        }
        _ => StepAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use crate::wizard::Audience;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_continue_without_selection_blocked() {
        let mut form = ChoiceForm::from_draft(StepId::Gender, &SignupDraft::new());
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Handled);
        assert_eq!(notifications.current().unwrap().title, "Please select a gender");
    }

    #[test]
    fn test_select_and_continue() {
        let mut form = ChoiceForm::from_draft(StepId::Gender, &SignupDraft::new());
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        handle_key(key(KeyCode::Down), &mut form, &mut wizard, &mut notifications);
        handle_key(key(KeyCode::Char(' ')), &mut form, &mut wizard, &mut notifications);
        assert_eq!(wizard.draft().gender, Some(Gender::Female));

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Completed);
    }

    #[test]
    fn test_reselect_overwrites() {
        let mut form = ChoiceForm::from_draft(StepId::Industry, &SignupDraft::new());
        let mut wizard = Wizard::new(Audience::Business);
        let mut notifications = NotificationQueue::new();

        handle_key(key(KeyCode::Char(' ')), &mut form, &mut wizard, &mut notifications);
        assert_eq!(wizard.draft().industry, Some(Industry::Agency));

        handle_key(key(KeyCode::Down), &mut form, &mut wizard, &mut notifications);
        handle_key(key(KeyCode::Char(' ')), &mut form, &mut wizard, &mut notifications);
        assert_eq!(wizard.draft().industry, Some(Industry::Ecommerce));
    }

    #[test]
    fn test_cursor_seeded_from_existing_pick() {
        let mut draft = SignupDraft::new();
        draft.budget = Some(BudgetRange::From50kTo100k);
        let form = ChoiceForm::from_draft(StepId::CampaignBudget, &draft);
        assert_eq!(form.cursor, 2);
    }
}
