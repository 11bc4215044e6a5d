//! Free-text steps: location, headline, bio
//!
//! One view drives all three. Location offers completion from a static
//! city list; headline and bio enforce their length caps at input time
//! and show a character counter.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::draft::{MAX_BIO_LEN, MAX_HEADLINE_LEN};
use crate::models::SignupDraft;
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::wizard::{StepId, Wizard};

use super::{edit_input, StepAction};

/// Cities offered for location completion
const SUGGESTED_LOCATIONS: &[&str] = &[
    "New York, United States",
    "Los Angeles, United States",
    "London, United Kingdom",
    "Paris, France",
    "Berlin, Germany",
    "Toronto, Canada",
    "Sydney, Australia",
    "Tokyo, Japan",
    "São Paulo, Brazil",
    "Mexico City, Mexico",
];

/// Form state for a free-text step
#[derive(Debug, Clone)]
pub struct FreeformForm {
    pub step: StepId,
    pub input: TextInput,
}

impl Default for FreeformForm {
    fn default() -> Self {
        Self {
            step: StepId::Location,
            input: TextInput::new(),
        }
    }
}

impl FreeformForm {
    /// Seed the form for `step` from the draft
    pub fn from_draft(step: StepId, draft: &SignupDraft) -> Self {
        let (input, value) = match step {
            StepId::Location => (
                TextInput::new()
                    .label("Location")
                    .placeholder("City, Country"),
                draft.location.as_str(),
            ),
            StepId::Headline => (
                TextInput::new()
                    .label("Title")
                    .placeholder("e.g. Travel & lifestyle creator")
                    .max_len(MAX_HEADLINE_LEN),
                draft.headline.as_str(),
            ),
            StepId::Bio => (
                TextInput::new()
                    .label("About you")
                    .placeholder("Tell brands about you and your content")
                    .max_len(MAX_BIO_LEN),
                draft.bio.as_str(),
            ),
            _ => unreachable!("not a free-text step: {:?}", step),
        };
        let mut form = Self { step, input };
        form.input.set_value(value);
        form
    }

    /// The first suggested location matching the current input
    pub fn suggestion(&self) -> Option<&'static str> {
        if self.step != StepId::Location {
            return None;
        }
        let needle = self.input.value().trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        SUGGESTED_LOCATIONS
            .iter()
            .find(|city| city.to_lowercase().starts_with(&needle))
            .copied()
    }

    fn required_message(&self) -> &'static str {
        match self.step {
            StepId::Location => "Please enter your location",
            StepId::Headline => "Please enter a title",
            _ => "Please enter a description",
        }
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &FreeformForm) {
    let mut input = form.input.clone();
    input.focused = true;
    frame.render_widget(&input, Rect { height: 1, ..area });

    if area.height < 3 {
        return;
    }

    let meta_line = match form.step {
        StepId::Location => match form.suggestion() {
            Some(city) => Line::from(vec![
                Span::styled("Suggestion: ", Style::default().fg(Color::DarkGray)),
                Span::styled(city, Style::default().fg(Color::Cyan)),
                Span::styled("  (Ctrl+N to accept)", Style::default().fg(Color::DarkGray)),
            ]),
            None => Line::default(),
        },
        _ => {
            let max = form.input.max_len.unwrap_or(0);
            let used = form.input.value().chars().count();
            let style = if used >= max {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Line::from(Span::styled(format!("{}/{}", used, max), style))
        }
    };
    frame.render_widget(
        Paragraph::new(meta_line),
        Rect {
            y: area.y + 2,
            height: 1,
            ..area
        },
    );
}

/// Handle a key for a free-text step
pub fn handle_key(
    key: KeyEvent,
    form: &mut FreeformForm,
    wizard: &mut Wizard,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(city) = form.suggestion() {
                form.input.set_value(city);
            }
            StepAction::Handled
        }

        KeyCode::Enter => {
            let value = form.input.value().trim().to_string();
            if value.is_empty() {
                notifications.push(Notification::error(form.required_message()));
                return StepAction::Handled;
            }
            let step = form.step;
            wizard.update_draft(|d| match step {
                StepId::Location => d.location = value,
                StepId::Headline => d.headline = value,
                StepId::Bio => d.bio = value,
                _ => unreachable!(),
            });
            StepAction::Completed
        }

        _ => {
            if edit_input(key, &mut form.input) {
                StepAction::Handled
            } else {
                StepAction::Ignored
            }
        }
    }
}
