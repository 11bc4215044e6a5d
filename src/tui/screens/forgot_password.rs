//! Forgot-password flow
//!
//! Three linear phases on one screen: request a reset code, verify it,
//! set a new password. Success returns to the login screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::{card_area, FormLayout};
use crate::tui::steps::edit_input;
use crate::tui::steps::otp::{self, OtpForm};
use crate::tui::widgets::{Notification, TextInput};
use crate::validation::{validate_code, validate_email, validate_password};

/// Which phase of the flow is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetPhase {
    #[default]
    Request,
    Verify,
    Reset,
}

/// Which field is focused in the reset phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResetField {
    #[default]
    Password,
    Confirm,
}

/// State for the whole forgot-password flow
#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub phase: ResetPhase,
    pub email: TextInput,
    pub otp: OtpForm,
    pub password: TextInput,
    pub confirm: TextInput,
    pub focused: ResetField,
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self {
            phase: ResetPhase::Request,
            email: TextInput::new().label("Email").placeholder("you@example.com"),
            otp: OtpForm::new(),
            password: TextInput::new().label("New Password").masked(),
            confirm: TextInput::new().label("Confirm Password").masked(),
            focused: ResetField::Password,
        }
    }
}

/// Render the forgot-password screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let card = card_area(frame.area());
    let layout = FormLayout::new(card);

    let (title, subtitle) = match app.forgot.phase {
        ResetPhase::Request => (
            "Reset your password",
            "Enter your email and we'll send you a reset code".to_string(),
        ),
        ResetPhase::Verify => (
            "Check your email",
            format!("Enter the 6-digit code we sent to {}", app.forgot.email.value()),
        ),
        ResetPhase::Reset => (
            "Choose a new password",
            "Create a new password for your account".to_string(),
        ),
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                title,
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(subtitle, Style::default().fg(Color::White))),
        ]),
        layout.header,
    );

    match app.forgot.phase {
        ResetPhase::Request => {
            let mut email = app.forgot.email.clone();
            email.focused = true;
            frame.render_widget(&email, Rect { height: 1, ..layout.body });
        }
        ResetPhase::Verify => {
            otp::render_code_entry(frame, layout.body, &app.forgot.otp);
        }
        ResetPhase::Reset => {
            let mut password = app.forgot.password.clone();
            password.focused = app.forgot.focused == ResetField::Password;
            frame.render_widget(&password, Rect { height: 1, ..layout.body });

            let mut confirm = app.forgot.confirm.clone();
            confirm.focused = app.forgot.focused == ResetField::Confirm;
            frame.render_widget(
                &confirm,
                Rect {
                    y: layout.body.y + 2,
                    height: 1,
                    ..layout.body
                },
            );
        }
    }

    if app.settings.show_key_hints {
        let hints = match app.forgot.phase {
            ResetPhase::Request => "[Enter] Send code  [Esc] Back to login",
            ResetPhase::Verify => "[Enter] Verify  [Ctrl+R] Resend  [Esc] Back",
            ResetPhase::Reset => "[Tab] Switch field  [Enter] Reset password  [Esc] Back",
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                hints,
                Style::default().fg(Color::DarkGray),
            ))),
            layout.hints,
        );
    }
}

/// Handle a key on the forgot-password screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => match app.forgot.phase {
            ResetPhase::Request => app.go_to(Screen::Login),
            ResetPhase::Verify => app.forgot.phase = ResetPhase::Request,
            ResetPhase::Reset => app.forgot.phase = ResetPhase::Verify,
        },
        _ => match app.forgot.phase {
            ResetPhase::Request => handle_request_key(app, key),
            ResetPhase::Verify => handle_verify_key(app, key),
            ResetPhase::Reset => handle_reset_key(app, key),
        },
    }
}

fn handle_request_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => {
            let email = app.forgot.email.value().trim().to_string();
            if email.is_empty() {
                app.notify(Notification::error("Please enter your email"));
                return;
            }
            if let Err(message) = validate_email(&email) {
                app.notify(Notification::error(message));
                return;
            }
            match app.services.auth.request_password_reset(&email) {
                Ok(()) => {
                    app.forgot.otp = OtpForm::new();
                    app.forgot.phase = ResetPhase::Verify;
                    app.notify(
                        Notification::success("Reset code sent")
                            .with_description("Please check your email for the verification code"),
                    );
                }
                Err(err) => {
                    app.notify(
                        Notification::error("Could not send reset code")
                            .with_description(err.to_string()),
                    );
                }
            }
        }
        _ => {
            edit_input(key, &mut app.forgot.email);
        }
    }
}

fn handle_verify_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if !app.forgot.otp.can_resend() {
                app.notify(Notification::info(format!(
                    "Resend available in {}s",
                    app.forgot.otp.resend_wait()
                )));
                return;
            }
            let email = app.forgot.email.value().trim().to_string();
            match app.services.auth.request_password_reset(&email) {
                Ok(()) => {
                    app.forgot.otp = OtpForm::new();
                    app.notify(
                        Notification::success("Reset code sent")
                            .with_description("A new code has been sent to your email"),
                    );
                }
                Err(err) => {
                    app.notify(
                        Notification::error("Could not resend code")
                            .with_description(err.to_string()),
                    );
                }
            }
        }

        KeyCode::Enter => {
            if let Err(message) = validate_code(app.forgot.otp.code()) {
                app.notify(Notification::error(message));
                return;
            }
            let email = app.forgot.email.value().trim().to_string();
            match app.services.auth.verify_reset_code(&email, app.forgot.otp.code()) {
                Ok(true) => {
                    app.forgot.phase = ResetPhase::Reset;
                    app.notify(Notification::success("Code verified successfully"));
                }
                Ok(false) => {
                    app.notify(
                        Notification::error("Invalid verification code")
                            .with_description("Please check and try again"),
                    );
                }
                Err(err) => {
                    app.notify(
                        Notification::error("Verification failed").with_description(err.to_string()),
                    );
                }
            }
        }

        _ => {
            otp::handle_edit_key(key, &mut app.forgot.otp);
        }
    }
}

fn handle_reset_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.forgot.focused = match app.forgot.focused {
                ResetField::Password => ResetField::Confirm,
                ResetField::Confirm => ResetField::Password,
            };
        }

        KeyCode::Enter => {
            let password = app.forgot.password.value().to_string();
            let confirm = app.forgot.confirm.value().to_string();

            if password.is_empty() || confirm.is_empty() {
                app.notify(Notification::error("Please fill in all fields"));
                return;
            }
            if let Err(message) = validate_password(&password) {
                app.notify(Notification::error(message));
                return;
            }
            if password != confirm {
                app.notify(Notification::error("Passwords do not match"));
                return;
            }

            let email = app.forgot.email.value().trim().to_string();
            match app.services.auth.reset_password(&email, &password) {
                Ok(()) => {
                    app.forgot = ForgotPasswordForm::default();
                    app.notify(
                        Notification::success("Password reset successful")
                            .with_description("You can now login with your new password"),
                    );
                    app.go_to(Screen::Login);
                }
                Err(err) => {
                    app.notify(
                        Notification::error("Could not reset password")
                            .with_description(err.to_string()),
                    );
                }
            }
        }

        _ => {
            let input = match app.forgot.focused {
                ResetField::Password => &mut app.forgot.password,
                ResetField::Confirm => &mut app.forgot.confirm,
            };
            edit_input(key, input);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppPaths, Settings};
    use crate::services::{Services, DEMO_CODE};
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = App::new(Services::mock(), Settings::default(), paths);
        app.go_to(Screen::ForgotPassword);
        (temp_dir, app)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_request_requires_valid_email() {
        let (_tmp, mut app) = test_app();
        type_str(&mut app, "not-an-email");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.forgot.phase, ResetPhase::Request);
    }

    #[test]
    fn test_full_reset_flow() {
        let (_tmp, mut app) = test_app();

        type_str(&mut app, "casey@example.com");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.forgot.phase, ResetPhase::Verify);

        type_str(&mut app, DEMO_CODE);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.forgot.phase, ResetPhase::Reset);

        type_str(&mut app, "new-password-1");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "new-password-1");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.screen, Screen::Login);
        assert_eq!(app.forgot.phase, ResetPhase::Request);
    }

    #[test]
    fn test_wrong_code_stays_on_verify() {
        let (_tmp, mut app) = test_app();
        type_str(&mut app, "casey@example.com");
        handle_key(&mut app, key(KeyCode::Enter));

        type_str(&mut app, "000000");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.forgot.phase, ResetPhase::Verify);
    }

    #[test]
    fn test_password_mismatch_blocked() {
        let (_tmp, mut app) = test_app();
        type_str(&mut app, "casey@example.com");
        handle_key(&mut app, key(KeyCode::Enter));
        type_str(&mut app, DEMO_CODE);
        handle_key(&mut app, key(KeyCode::Enter));

        type_str(&mut app, "new-password-1");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "different-pass");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.forgot.phase, ResetPhase::Reset);
        assert_eq!(app.notifications.len(), 3); // sent, verified, mismatch
    }

    #[test]
    fn test_escape_walks_back_through_phases() {
        let (_tmp, mut app) = test_app();
        type_str(&mut app, "casey@example.com");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.forgot.phase, ResetPhase::Verify);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.forgot.phase, ResetPhase::Request);

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Login);
    }
}
