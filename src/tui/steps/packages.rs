//! Content packages step
//!
//! The creator lists the deliverables they sell. Edits happen on a
//! local working copy and are committed to the draft when the step
//! continues; every package needs a description and a positive rate.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{ContentPackage, PackageKind, Price, SignupDraft};
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::wizard::Wizard;

use super::{edit_input, StepAction};

/// Which field of the focused package is being edited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageField {
    #[default]
    Kind,
    Description,
    Price,
}

impl PackageField {
    pub fn next(self) -> Self {
        match self {
            Self::Kind => Self::Description,
            Self::Description => Self::Price,
            Self::Price => Self::Kind,
        }
    }
}

/// One package being edited
#[derive(Debug, Clone)]
pub struct PackageEditor {
    pub kind_index: usize,
    pub description: TextInput,
    pub price: TextInput,
}

impl PackageEditor {
    fn new() -> Self {
        Self {
            kind_index: 0,
            description: TextInput::new()
                .label("Description")
                .placeholder("Describe what's included in this package..."),
            price: TextInput::new().label("Price ($)").placeholder("0.00"),
        }
    }

    fn from_package(package: &ContentPackage) -> Self {
        let mut editor = Self::new();
        editor.kind_index = PackageKind::ALL
            .iter()
            .position(|k| *k == package.kind)
            .unwrap_or(0);
        editor.description.set_value(&package.description);
        if package.price.is_positive() {
            editor.price.set_value(format!(
                "{}.{:02}",
                package.price.dollars(),
                package.price.cents_part()
            ));
        }
        editor
    }

    pub fn kind(&self) -> PackageKind {
        PackageKind::ALL[self.kind_index]
    }

    /// Build the model package, or report the first problem
    fn build(&self) -> Result<ContentPackage, String> {
        let description = self.description.value().trim().to_string();
        if description.is_empty() {
            return Err("Please ensure all packages have descriptions".to_string());
        }
        let price = Price::parse(self.price.value())
            .map_err(|e| e.to_string())?;
        if !price.is_positive() {
            return Err("Please ensure all packages have valid prices".to_string());
        }
        Ok(ContentPackage {
            kind: self.kind(),
            description,
            price,
        })
    }
}

/// Form state for the packages step
#[derive(Debug, Clone)]
pub struct PackagesForm {
    pub editors: Vec<PackageEditor>,
    pub cursor: usize,
    pub focused: PackageField,
}

impl Default for PackagesForm {
    fn default() -> Self {
        Self {
            editors: vec![PackageEditor::new()],
            cursor: 0,
            focused: PackageField::Kind,
        }
    }
}

impl PackagesForm {
    /// Seed from the draft, falling back to one empty package
    pub fn from_draft(draft: &SignupDraft) -> Self {
        let editors = if draft.packages.is_empty() {
            vec![PackageEditor::new()]
        } else {
            draft.packages.iter().map(PackageEditor::from_package).collect()
        };
        Self {
            editors,
            cursor: 0,
            focused: PackageField::Kind,
        }
    }

    fn current(&mut self) -> &mut PackageEditor {
        let cursor = self.cursor;
        &mut self.editors[cursor]
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &PackagesForm) {
    let mut y = area.y;
    for (i, editor) in form.editors.iter().enumerate() {
        if y + 3 > area.y + area.height {
            break;
        }
        let active = i == form.cursor;
        let title_style = if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("Package {}", i + 1),
                title_style,
            ))),
            Rect { y, height: 1, ..area },
        );
        y += 1;

        let kind_style = if active && form.focused == PackageField::Kind {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("  Content Type: ", kind_style),
                Span::styled(format!("◀ {} ▶", editor.kind()), Style::default().fg(Color::White)),
            ])),
            Rect { y, height: 1, ..area },
        );
        y += 1;

        let mut description = editor.description.clone();
        description.focused = active && form.focused == PackageField::Description;
        frame.render_widget(&description, Rect { x: area.x + 2, y, height: 1, width: area.width.saturating_sub(2) });
        y += 1;

        let mut price = editor.price.clone();
        price.focused = active && form.focused == PackageField::Price;
        frame.render_widget(&price, Rect { x: area.x + 2, y, height: 1, width: area.width.saturating_sub(2) });
        y += 2;
    }
}

/// Handle a key for the packages step
pub fn handle_key(
    key: KeyEvent,
    form: &mut PackagesForm,
    wizard: &mut Wizard,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Tab => {
            form.focused = form.focused.next();
            StepAction::Handled
        }

        KeyCode::Up => {
            form.cursor = form.cursor.saturating_sub(1);
            StepAction::Handled
        }
        KeyCode::Down => {
            if form.cursor + 1 < form.editors.len() {
                form.cursor += 1;
            }
            StepAction::Handled
        }

        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.editors.push(PackageEditor::new());
            form.cursor = form.editors.len() - 1;
            form.focused = PackageField::Kind;
            StepAction::Handled
        }

        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if form.editors.len() == 1 {
                notifications.push(
                    Notification::error("You need at least one package")
                        .with_description("Please provide at least one content package offering"),
                );
                return StepAction::Handled;
            }
            let cursor = form.cursor;
            form.editors.remove(cursor);
            if form.cursor >= form.editors.len() {
                form.cursor = form.editors.len() - 1;
            }
            StepAction::Handled
        }

        KeyCode::Left if form.focused == PackageField::Kind => {
            let editor = form.current();
            let len = PackageKind::ALL.len();
            editor.kind_index = (editor.kind_index + len - 1) % len;
            StepAction::Handled
        }
        KeyCode::Right if form.focused == PackageField::Kind => {
            let editor = form.current();
            editor.kind_index = (editor.kind_index + 1) % PackageKind::ALL.len();
            StepAction::Handled
        }

        KeyCode::Enter => {
            let mut packages = Vec::with_capacity(form.editors.len());
            for editor in &form.editors {
                match editor.build() {
                    Ok(package) => packages.push(package),
                    Err(message) => {
                        notifications.push(
                            Notification::error("Invalid packages").with_description(message),
                        );
                        return StepAction::Handled;
                    }
                }
            }
            wizard.update_draft(|d| d.packages = packages);
            StepAction::Completed
        }

        _ => {
            let focused = form.focused;
            let editor = form.current();
            let input = match focused {
                PackageField::Description => &mut editor.description,
                PackageField::Price => &mut editor.price,
                PackageField::Kind => return StepAction::Ignored,
            };
            if edit_input(key, input) {
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

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_incomplete_package_blocks() {
        let mut form = PackagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Handled);
        assert!(wizard.draft().packages.is_empty());
    }

    #[test]
    fn test_zero_price_blocks() {
        let mut form = PackagesForm::default();
        form.editors[0].description.set_value("One post");
        form.editors[0].price.set_value("0");
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Handled);
    }

    #[test]
    fn test_commit_packages() {
        let mut form = PackagesForm::default();
        form.editors[0].description.set_value("One feed post, two stories");
        form.editors[0].price.set_value("149.99");
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Completed);
        assert_eq!(wizard.draft().packages.len(), 1);
        assert_eq!(wizard.draft().packages[0].price.cents(), 14999);
    }

    #[test]
    fn test_cannot_remove_last_package() {
        let mut form = PackagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        handle_key(ctrl('d'), &mut form, &mut wizard, &mut notifications);
        assert_eq!(form.editors.len(), 1);
        assert_eq!(notifications.current().unwrap().title, "You need at least one package");
    }

    #[test]
    fn test_add_and_remove_packages() {
        let mut form = PackagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        handle_key(ctrl('n'), &mut form, &mut wizard, &mut notifications);
        assert_eq!(form.editors.len(), 2);
        assert_eq!(form.cursor, 1);

        handle_key(ctrl('d'), &mut form, &mut wizard, &mut notifications);
        assert_eq!(form.editors.len(), 1);
        assert_eq!(form.cursor, 0);
    }

    #[test]
    fn test_seeded_from_draft() {
        let mut draft = SignupDraft::new();
        draft.packages.push(ContentPackage {
            kind: PackageKind::Youtube,
            description: "One dedicated video".into(),
            price: Price::from_cents(50000),
        });
        let form = PackagesForm::from_draft(&draft);
        assert_eq!(form.editors.len(), 1);
        assert_eq!(form.editors[0].kind(), PackageKind::Youtube);
        assert_eq!(form.editors[0].price.value(), "500.00");
    }
}
