//! Phone verification step
//!
//! Two stages on one screen: enter a number and request a code, then
//! type the 6-digit code. The committed number survives a wrong code so
//! the user can retry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Settings;
use crate::models::{PhoneNumber, SignupDraft};
use crate::services::Services;
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::validation::validate_phone;
use crate::wizard::Wizard;

use super::otp::{self, OtpForm};
use super::{edit_input, StepAction};

/// Country dial codes offered in the selector
pub const COUNTRY_CODES: &[(&str, &str)] = &[
    ("+1", "United States/Canada"),
    ("+44", "United Kingdom"),
    ("+61", "Australia"),
    ("+33", "France"),
    ("+49", "Germany"),
    ("+81", "Japan"),
    ("+86", "China"),
    ("+91", "India"),
    ("+55", "Brazil"),
    ("+52", "Mexico"),
    ("+39", "Italy"),
    ("+34", "Spain"),
];

/// Form state for the phone verification step
#[derive(Debug, Clone)]
pub struct PhoneForm {
    pub country_index: usize,
    pub number: TextInput,
    /// Present once a code has been sent
    pub otp: Option<OtpForm>,
}

impl Default for PhoneForm {
    fn default() -> Self {
        Self {
            country_index: 0,
            number: TextInput::new()
                .label("Phone number")
                .placeholder("123-456-7890"),
            otp: None,
        }
    }
}

impl PhoneForm {
    /// Seed from the draft; the settings' default dial code is used
    /// when the draft has none
    pub fn from_draft(draft: &SignupDraft, settings: &Settings) -> Self {
        let mut form = Self::default();
        let code = if draft.phone.country_code.is_empty() {
            settings.default_country_code.as_str()
        } else {
            draft.phone.country_code.as_str()
        };
        form.country_index = COUNTRY_CODES
            .iter()
            .position(|(c, _)| *c == code)
            .unwrap_or(0);
        form.number.set_value(&draft.phone.number);
        form
    }

    pub fn country_code(&self) -> &'static str {
        COUNTRY_CODES[self.country_index].0
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &PhoneForm) {
    let (code, country) = COUNTRY_CODES[form.country_index];
    let country_line = Line::from(vec![
        Span::styled(
            "Country: ",
            if form.otp.is_none() {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            },
        ),
        Span::styled(
            format!("◀ {} ({}) ▶", country, code),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(country_line), Rect { height: 1, ..area });

    let mut number = form.number.clone();
    number.focused = form.otp.is_none();
    frame.render_widget(
        &number,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );

    match &form.otp {
        None => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    "Press Enter to send a verification code",
                    Style::default().fg(Color::DarkGray),
                ))),
                Rect {
                    y: area.y + 3,
                    height: 1,
                    ..area
                },
            );
        }
        Some(otp_form) => {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(
                    format!(
                        "Enter the 6-digit code sent to {} {}",
                        form.country_code(),
                        form.number.value()
                    ),
                    Style::default().fg(Color::White),
                ))),
                Rect {
                    y: area.y + 3,
                    height: 1,
                    ..area
                },
            );
            if area.height > 5 {
                otp::render_code_entry(
                    frame,
                    Rect {
                        y: area.y + 5,
                        height: area.height - 5,
                        ..area
                    },
                    otp_form,
                );
            }
        }
    }
}

/// Handle a key for the phone verification step
pub fn handle_key(
    key: KeyEvent,
    form: &mut PhoneForm,
    wizard: &mut Wizard,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> StepAction {
    if form.otp.is_some() {
        return handle_code_key(key, form, wizard, services, notifications);
    }

    match key.code {
        KeyCode::Left => {
            form.country_index =
                (form.country_index + COUNTRY_CODES.len() - 1) % COUNTRY_CODES.len();
            StepAction::Handled
        }
        KeyCode::Right => {
            form.country_index = (form.country_index + 1) % COUNTRY_CODES.len();
            StepAction::Handled
        }

        KeyCode::Enter => {
            send_code(form, services, notifications);
            StepAction::Handled
        }

        _ => {
            if edit_input(key, &mut form.number) {
                StepAction::Handled
            } else {
                StepAction::Ignored
            }
        }
    }
}

// Key handling once a code has been sent. Each arm borrows the
// embedded OtpForm on its own so the send path can take `form` whole.
fn handle_code_key(
    key: KeyEvent,
    form: &mut PhoneForm,
    wizard: &mut Wizard,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let wait = form.otp.as_ref().map(|o| (o.can_resend(), o.resend_wait()));
            if let Some((false, secs)) = wait {
                notifications.push(Notification::info(format!(
                    "Resend available in {}s",
                    secs
                )));
                return StepAction::Handled;
            }
            send_code(form, services, notifications);
            StepAction::Handled
        }

        KeyCode::Enter => {
            let code = match form.otp.as_ref() {
                Some(otp_form) if otp_form.is_full() => otp_form.code().to_string(),
                _ => {
                    notifications.push(
                        Notification::error("Invalid code")
                            .with_description("Please enter the 6-digit code"),
                    );
                    return StepAction::Handled;
                }
            };
            match services.identity.verify_phone_code(&code) {
                Ok(true) => {
                    let phone = PhoneNumber {
                        country_code: form.country_code().to_string(),
                        number: form.number.value().trim().to_string(),
                    };
                    wizard.update_draft(|d| {
                        d.phone = phone;
                        d.phone_verified = true;
                    });
                    notifications.push(
                        Notification::success("Phone verified")
                            .with_description("Your phone number has been verified successfully"),
                    );
                    StepAction::Completed
                }
                Ok(false) => {
                    notifications.push(
                        Notification::error("Invalid code")
                            .with_description("Please check the code and try again"),
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
            if let Some(otp_form) = form.otp.as_mut() {
                if otp::handle_edit_key(key, otp_form) {
                    return StepAction::Handled;
                }
            }
            StepAction::Ignored
        }
    }
}

fn send_code(form: &mut PhoneForm, services: &Services, notifications: &mut NotificationQueue) {
    let number = form.number.value().trim().to_string();
    if let Err(message) = validate_phone(&number) {
        notifications.push(Notification::error("Phone number required").with_description(message));
        return;
    }

    match services.identity.send_phone_code(form.country_code(), &number) {
        Ok(()) => {
            form.otp = Some(OtpForm::new());
            notifications.push(Notification::success("Verification code sent").with_description(
                format!("We've sent a 6-digit code to {} {}", form.country_code(), number),
            ));
        }
        Err(err) => {
            notifications
                .push(Notification::error("Could not send code").with_description(err.to_string()));
        }
    }
}
