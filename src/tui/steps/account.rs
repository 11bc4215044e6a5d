//! Account details step
//!
//! Name, brand name, email, and password, with tab navigation between
//! fields. Continuing sends a verification code to the entered email.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{layout::Rect, Frame};

use crate::models::SignupDraft;
use crate::services::Services;
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::validation::{validate_email, validate_password};
use crate::wizard::Wizard;

use super::{edit_input, StepAction};

/// Which field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountField {
    #[default]
    FullName,
    BrandName,
    Email,
    Password,
}

impl AccountField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::FullName => Self::BrandName,
            Self::BrandName => Self::Email,
            Self::Email => Self::Password,
            Self::Password => Self::FullName,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::FullName => Self::Password,
            Self::BrandName => Self::FullName,
            Self::Email => Self::BrandName,
            Self::Password => Self::Email,
        }
    }
}

/// Form state for the account details step
#[derive(Debug, Clone)]
pub struct AccountForm {
    pub focused: AccountField,
    pub full_name: TextInput,
    pub brand_name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
}

impl Default for AccountForm {
    fn default() -> Self {
        Self {
            focused: AccountField::FullName,
            full_name: TextInput::new().label("Your Name").placeholder("John Doe"),
            brand_name: TextInput::new().label("Brand Name").placeholder("Your Brand"),
            email: TextInput::new().label("Email").placeholder("you@example.com"),
            password: TextInput::new()
                .label("Password")
                .placeholder("at least 8 characters")
                .masked(),
        }
    }
}

impl AccountForm {
    pub fn from_draft(draft: &SignupDraft) -> Self {
        let mut form = Self::default();
        form.full_name.set_value(&draft.full_name);
        form.brand_name.set_value(&draft.brand_name);
        form.email.set_value(&draft.email);
        form.password.set_value(&draft.password);
        form
    }

    fn focused_input(&mut self) -> &mut TextInput {
        match self.focused {
            AccountField::FullName => &mut self.full_name,
            AccountField::BrandName => &mut self.brand_name,
            AccountField::Email => &mut self.email,
            AccountField::Password => &mut self.password,
        }
    }

    /// Validate the form and return the first user-facing error
    pub fn validate(&self) -> Result<(), String> {
        if self.full_name.value().trim().is_empty()
            || self.brand_name.value().trim().is_empty()
            || self.email.value().trim().is_empty()
            || self.password.value().is_empty()
        {
            return Err("Please fill in all fields".to_string());
        }
        validate_password(self.password.value())?;
        validate_email(self.email.value().trim())?;
        Ok(())
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &AccountForm) {
    let fields = [
        (&form.full_name, AccountField::FullName),
        (&form.brand_name, AccountField::BrandName),
        (&form.email, AccountField::Email),
        (&form.password, AccountField::Password),
    ];

    for (i, (input, field)) in fields.iter().enumerate() {
        let y = area.y + (i as u16) * 2;
        if y >= area.y + area.height {
            break;
        }
        let mut widget = (*input).clone();
        widget.focused = form.focused == *field;
        frame.render_widget(
            &widget,
            Rect {
                y,
                height: 1,
                ..area
            },
        );
    }
}

/// Handle a key for the account details step
pub fn handle_key(
    key: KeyEvent,
    form: &mut AccountForm,
    wizard: &mut Wizard,
    services: &Services,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.focused = form.focused.prev();
            } else {
                form.focused = form.focused.next();
            }
            StepAction::Handled
        }
        KeyCode::BackTab => {
            form.focused = form.focused.prev();
            StepAction::Handled
        }
        KeyCode::Down => {
            form.focused = form.focused.next();
            StepAction::Handled
        }
        KeyCode::Up => {
            form.focused = form.focused.prev();
            StepAction::Handled
        }

        KeyCode::Enter => {
            if let Err(message) = form.validate() {
                notifications.push(Notification::error(message));
                return StepAction::Handled;
            }

            let full_name = form.full_name.value().trim().to_string();
            let brand_name = form.brand_name.value().trim().to_string();
            let email = form.email.value().trim().to_string();
            let password = form.password.value().to_string();

            if let Err(err) = services.identity.send_email_code(&email) {
                notifications.push(
                    Notification::error("Could not send verification code")
                        .with_description(err.to_string()),
                );
                return StepAction::Handled;
            }

            wizard.update_draft(|d| {
                d.full_name = full_name;
                d.brand_name = brand_name;
                d.email = email;
                d.password = password;
            });

            notifications.push(
                Notification::success("OTP sent to your email")
                    .with_description("Please check your inbox for the verification code"),
            );
            StepAction::Completed
        }

        _ => {
            if edit_input(key, form.focused_input()) {
                StepAction::Handled
            } else {
                StepAction::Ignored
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::Audience;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn filled_form() -> AccountForm {
        let mut form = AccountForm::default();
        form.full_name.set_value("Casey Rivera");
        form.brand_name.set_value("Casey Creates");
        form.email.set_value("casey@example.com");
        form.password.set_value("longenough1");
        form
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut form = AccountForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let services = Services::mock();
        let mut notifications = NotificationQueue::new();

        assert_eq!(form.focused, AccountField::FullName);
        handle_key(key(KeyCode::Tab), &mut form, &mut wizard, &services, &mut notifications);
        assert_eq!(form.focused, AccountField::BrandName);
        handle_key(key(KeyCode::BackTab), &mut form, &mut wizard, &services, &mut notifications);
        assert_eq!(form.focused, AccountField::FullName);
    }

    #[test]
    fn test_missing_fields_block() {
        let mut form = AccountForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let services = Services::mock();
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &services, &mut notifications);
        assert_eq!(action, StepAction::Handled);
        assert_eq!(notifications.current().unwrap().title, "Please fill in all fields");
        assert!(wizard.draft().email.is_empty());
    }

    #[test]
    fn test_short_password_blocks() {
        let mut form = filled_form();
        form.password.set_value("short");
        let mut wizard = Wizard::new(Audience::Creator);
        let services = Services::mock();
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &services, &mut notifications);
        assert_eq!(action, StepAction::Handled);
        assert!(notifications
            .current()
            .unwrap()
            .title
            .contains("at least 8 characters"));
    }

    #[test]
    fn test_bad_email_blocks() {
        let mut form = filled_form();
        form.email.set_value("not-an-email");
        let mut wizard = Wizard::new(Audience::Creator);
        let services = Services::mock();
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &services, &mut notifications);
        assert_eq!(action, StepAction::Handled);
    }

    #[test]
    fn test_valid_form_commits_and_sends_code() {
        let mut form = filled_form();
        let mut wizard = Wizard::new(Audience::Creator);
        let services = Services::mock();
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &services, &mut notifications);
        assert_eq!(action, StepAction::Completed);
        assert_eq!(wizard.draft().email, "casey@example.com");
        assert_eq!(wizard.draft().full_name, "Casey Rivera");
        assert_eq!(notifications.current().unwrap().title, "OTP sent to your email");
    }
}
