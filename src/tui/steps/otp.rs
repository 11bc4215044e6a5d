//! Verification-code entry
//!
//! Six digit boxes with a resend cooldown. The email-verification step
//! lives here; the phone step and the forgot-password screen reuse the
//! same `OtpForm`.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::services::Services;
use crate::tui::widgets::{Notification, NotificationQueue};
use crate::validation::validate_code;
use crate::wizard::Wizard;

use super::StepAction;

/// How long the user must wait before requesting another code
pub const RESEND_COOLDOWN_SECS: u64 = 60;

/// Shared state for a 6-digit code entry
#[derive(Debug, Clone)]
pub struct OtpForm {
    digits: String,
    last_sent: Instant,
}

impl Default for OtpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl OtpForm {
    /// Create a fresh form; the cooldown starts now, since a code was
    /// just sent when this screen appears
    pub fn new() -> Self {
        Self {
            digits: String::new(),
            last_sent: Instant::now(),
        }
    }

    /// The code entered so far
    pub fn code(&self) -> &str {
        &self.digits
    }

    /// Whether all six digits are present
    pub fn is_full(&self) -> bool {
        self.digits.len() == 6
    }

    pub fn push_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.digits.len() < 6 {
            self.digits.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Whether the resend affordance is active again
    pub fn can_resend(&self) -> bool {
        self.last_sent.elapsed().as_secs() >= RESEND_COOLDOWN_SECS
    }

    /// Seconds until resend unlocks
    pub fn resend_wait(&self) -> u64 {
        RESEND_COOLDOWN_SECS.saturating_sub(self.last_sent.elapsed().as_secs())
    }

    /// Restart the cooldown after a code is sent
    pub fn mark_sent(&mut self) {
        self.last_sent = Instant::now();
    }
}

/// Route a digit/backspace key into the form. Returns whether the key
/// was consumed.
pub fn handle_edit_key(key: KeyEvent, form: &mut OtpForm) -> bool {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() && !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.push_digit(c);
            true
        }
        KeyCode::Backspace => {
            form.backspace();
            true
        }
        _ => false,
    }
}

/// Render the six code boxes plus the resend status line
pub fn render_code_entry(frame: &mut Frame, area: Rect, form: &OtpForm) {
    let mut spans = Vec::with_capacity(12);
    for i in 0..6 {
        let digit = form.digits.chars().nth(i);
        let (text, style) = match digit {
            Some(d) => (
                format!("[{}]", d),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            None if i == form.digits.len() => {
                ("[_]".to_string(), Style::default().fg(Color::Cyan))
            }
            None => ("[ ]".to_string(), Style::default().fg(Color::DarkGray)),
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)),
        Rect { height: 1, ..area },
    );

    if area.height < 2 {
        return;
    }
    let resend = if form.can_resend() {
        Span::styled(
            "Didn't receive the code? Press Ctrl+R to resend.",
            Style::default().fg(Color::Cyan),
        )
    } else {
        Span::styled(
            format!("Resend code in {}s", form.resend_wait()),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(
        Paragraph::new(Line::from(resend)),
        Rect {
            y: area.y + 2,
            height: 1,
            ..area
        },
    );
}

/// Render the email-verification step body
pub fn render(frame: &mut Frame, area: Rect, form: &OtpForm, email: &str) {
    let intro = Line::from(vec![
        Span::styled(
            "We've sent a verification code to ",
            Style::default().fg(Color::White),
        ),
        Span::styled(
            email.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(intro), Rect { height: 1, ..area });

    if area.height > 2 {
        render_code_entry(
            frame,
            Rect {
                y: area.y + 2,
                height: area.height.saturating_sub(2),
                ..area
            },
            form,
        );
    }
}

/// Handle a key for the email-verification step
pub fn handle_key(
    key: KeyEvent,
    form: &mut OtpForm,
    wizard: &mut Wizard,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !form.can_resend() {
                notifications.push(
                    Notification::info(format!("Resend available in {}s", form.resend_wait())),
                );
                return StepAction::Handled;
            }
            let email = wizard.draft().email.clone();
            match services.identity.send_email_code(&email) {
                Ok(()) => {
                    form.mark_sent();
                    form.clear();
                    notifications.push(
                        Notification::success("OTP sent")
                            .with_description("A new verification code has been sent to your email"),
                    );
                }
                Err(err) => notifications.push(
                    Notification::error("Could not resend code").with_description(err.to_string()),
                ),
            }
            StepAction::Handled
        }

        KeyCode::Enter => {
            if let Err(message) = validate_code(form.code()) {
                notifications.push(Notification::error(message));
                return StepAction::Handled;
            }

            let email = wizard.draft().email.clone();
            match services.identity.verify_email_code(&email, form.code()) {
                Ok(true) => {
                    wizard.update_draft(|d| d.email_verified = true);
                    notifications.push(Notification::success("Email verified successfully"));
                    StepAction::Completed
                }
                Ok(false) => {
                    notifications.push(
                        Notification::error("Invalid verification code")
                            .with_description("Please check and try again"),
                    );
                    StepAction::Handled
                }
                Err(err) => {
                    notifications.push(
                        Notification::error("Verification failed").with_description(err.to_string()),
                    );
                    StepAction::Handled
                }
            }
        }

        _ => {
            if handle_edit_key(key, form) {
                StepAction::Handled
            } else {
                StepAction::Ignored
            }
        }
    }
}
