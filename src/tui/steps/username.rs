//! Username step
//!
//! The user claims a handle. Availability must be confirmed through
//! the identity port before the step can complete; editing the input
//! clears any earlier verdict.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::SignupDraft;
use crate::services::{Availability, Services};
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::validation::validate_username;
use crate::wizard::Wizard;

use super::StepAction;

/// Form state for the username step
#[derive(Debug, Clone)]
pub struct UsernameForm {
    pub input: TextInput,
    /// Verdict of the last availability check, cleared on edit
    pub availability: Option<Availability>,
}

impl Default for UsernameForm {
    fn default() -> Self {
        Self {
            input: TextInput::new()
                .label("Username")
                .placeholder("yourname"),
            availability: None,
        }
    }
}

impl UsernameForm {
    /// Seed from the draft, e.g. when navigating back to this step
    pub fn from_draft(draft: &SignupDraft) -> Self {
        let mut form = Self::default();
        form.input.set_value(&draft.username);
        form
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &UsernameForm) {
    let mut input = form.input.clone();
    input.focused = true;
    frame.render_widget(&input, Rect { height: 1, ..area });

    if area.height < 3 {
        return;
    }

    let rule_line = Line::from(Span::styled(
        "Letters, numbers, and underscores only. Minimum 3 characters.",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(
        Paragraph::new(rule_line),
        Rect {
            y: area.y + 2,
            height: 1,
            ..area
        },
    );

    let verdict_line = match form.availability {
        Some(Availability::Available) => Line::from(Span::styled(
            "✓ Username is available",
            Style::default().fg(Color::Green),
        )),
        Some(Availability::Taken) => Line::from(Span::styled(
            "✗ Username is already taken",
            Style::default().fg(Color::Red),
        )),
        None => Line::from(Span::styled(
            "Press Ctrl+K to check availability",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(
        Paragraph::new(verdict_line),
        Rect {
            y: area.y + 3,
            height: 1,
            ..area
        },
    );
}

/// Handle a key for the username step
pub fn handle_key(
    key: KeyEvent,
    form: &mut UsernameForm,
    wizard: &mut Wizard,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Char('k') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            check_availability(form, services, notifications);
            StepAction::Handled
        }

        KeyCode::Enter => {
            if form.availability != Some(Availability::Available) {
                notifications.push(Notification::error("Please check username availability"));
                return StepAction::Handled;
            }
            let username = form.input.value().to_string();
            wizard.update_draft(|d| d.username = username);
            StepAction::Completed
        }

        KeyCode::Backspace => {
            form.input.backspace();
            form.availability = None;
            StepAction::Handled
        }
        KeyCode::Delete => {
            form.input.delete();
            form.availability = None;
            StepAction::Handled
        }
        KeyCode::Left => {
            form.input.move_left();
            StepAction::Handled
        }
        KeyCode::Right => {
            form.input.move_right();
            StepAction::Handled
        }
        KeyCode::Home => {
            form.input.move_start();
            StepAction::Handled
        }
        KeyCode::End => {
            form.input.move_end();
            StepAction::Handled
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.input.insert(c);
            form.availability = None;
            StepAction::Handled
        }

        _ => StepAction::Ignored,
    }
}

fn check_availability(
    form: &mut UsernameForm,
    services: &Services,
    notifications: &mut NotificationQueue,
) {
    let username = form.input.value().trim().to_string();
    if let Err(message) = validate_username(&username) {
        notifications.push(Notification::error("Invalid username").with_description(message));
        return;
    }

    match services.identity.check_username(&username) {
        Ok(verdict) => {
            form.availability = Some(verdict);
            match verdict {
                Availability::Available => notifications.push(
                    Notification::success("Username is available")
                        .with_description("You can use this username"),
                ),
                Availability::Taken => notifications.push(
                    Notification::error("Username is already taken")
                        .with_description("Please choose a different username"),
                ),
            }
        }
        Err(err) => {
            notifications
                .push(Notification::error("Could not check username").with_description(err.to_string()));
        }
    }
}
