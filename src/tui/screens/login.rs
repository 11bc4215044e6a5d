//! Login screen
//!
//! Email + password. A successful login remembers the email in
//! settings and hands off to the dashboard.

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
use crate::tui::widgets::{Notification, TextInput};

use super::dashboard::DashboardState;
use super::forgot_password::ForgotPasswordForm;

/// Which field is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

/// Login form state
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub focused: LoginField,
    pub email: TextInput,
    pub password: TextInput,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            focused: LoginField::Email,
            email: TextInput::new().label("Email").placeholder("you@example.com"),
            password: TextInput::new().label("Password").placeholder("••••••••").masked(),
        }
    }
}

impl LoginForm {
    /// Pre-fill the email remembered from the last session
    pub fn with_remembered_email(email: &str) -> Self {
        let mut form = Self::default();
        form.email.set_value(email);
        form
    }
}

/// Render the login screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let card = card_area(frame.area());
    let layout = FormLayout::new(card);

    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                "Welcome back",
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Sign in to your account",
                Style::default().fg(Color::White),
            )),
        ]),
        layout.header,
    );

    let mut email = app.login.email.clone();
    email.focused = app.login.focused == LoginField::Email;
    frame.render_widget(&email, Rect { height: 1, ..layout.body });

    let mut password = app.login.password.clone();
    password.focused = app.login.focused == LoginField::Password;
    frame.render_widget(
        &password,
        Rect {
            y: layout.body.y + 2,
            height: 1,
            ..layout.body
        },
    );

    if app.settings.show_key_hints {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[Tab] Switch field  [Enter] Sign in  [Ctrl+R] Forgot password  [Esc] Back",
                Style::default().fg(Color::DarkGray),
            ))),
            layout.hints,
        );
    }
}

/// Handle a key on the login screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.go_to(Screen::Landing);
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.focused = match app.login.focused {
                LoginField::Email => LoginField::Password,
                LoginField::Password => LoginField::Email,
            };
        }

        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.forgot = ForgotPasswordForm::default();
            app.go_to(Screen::ForgotPassword);
        }

        KeyCode::Enter => submit(app),

        _ => {
            let input = match app.login.focused {
                LoginField::Email => &mut app.login.email,
                LoginField::Password => &mut app.login.password,
            };
            edit_input(key, input);
        }
    }
}

fn submit(app: &mut App) {
    let email = app.login.email.value().trim().to_string();
    let password = app.login.password.value().to_string();

    if email.is_empty() || password.is_empty() {
        app.notify(Notification::error("Please fill in all fields"));
        return;
    }

    match app.services.auth.login(&email, &password) {
        Ok(outcome) if outcome.is_success() => {
            app.settings.last_email = email.clone();
            app.save_settings();

            app.dashboard = DashboardState::for_login(&email);
            app.login.password.clear();
            app.notify(
                Notification::success("Login successful")
                    .with_description("Redirecting to your dashboard..."),
            );
            app.go_to(Screen::Dashboard);
        }
        Ok(_) => {
            app.notify(Notification::error("Invalid email or password"));
        }
        Err(err) => {
            app.notify(Notification::error("Login failed").with_description(err.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppPaths, Settings};
    use crate::services::Services;
    use tempfile::TempDir;

    fn test_app() -> (TempDir, App) {
        let temp_dir = TempDir::new().unwrap();
        let paths = AppPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut app = App::new(Services::mock(), Settings::default(), paths);
        app.go_to(Screen::Login);
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
    fn test_empty_fields_blocked() {
        let (_tmp, mut app) = test_app();
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Login);
        assert_eq!(
            app.notifications.current().unwrap().title,
            "Please fill in all fields"
        );
    }

    #[test]
    fn test_successful_login_remembers_email() {
        let (_tmp, mut app) = test_app();
        type_str(&mut app, "casey@example.com");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "password123");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.settings.last_email, "casey@example.com");
        assert_eq!(app.dashboard.greeting_name, "casey");
    }

    #[test]
    fn test_forgot_password_shortcut() {
        let (_tmp, mut app) = test_app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.screen, Screen::ForgotPassword);
    }

    #[test]
    fn test_escape_returns_to_landing() {
        let (_tmp, mut app) = test_app();
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Landing);
    }
}
