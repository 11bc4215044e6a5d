//! Content images step
//!
//! The gallery needs at least three images and exactly one designated
//! profile picture before it can be submitted. Uploads are stubbed: the
//! mock backend hands back placeholder URLs.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{ImageGallery, SignupDraft};
use crate::tui::widgets::{Notification, NotificationQueue};
use crate::wizard::Wizard;

use super::StepAction;

/// Form state for the images step
#[derive(Debug, Clone, Default)]
pub struct ImagesForm {
    pub cursor: usize,
    /// Counter feeding the stubbed upload URLs
    pub upload_counter: usize,
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &ImagesForm, draft: &SignupDraft) {
    let gallery = &draft.images;

    let status = format!(
        "{} of {} images (minimum {}), profile picture {}",
        gallery.len(),
        ImageGallery::MAX_IMAGES,
        ImageGallery::MIN_IMAGES,
        match gallery.profile_picture() {
            Some(i) => format!("#{}", i + 1),
            None => "not chosen".to_string(),
        }
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect { height: 1, ..area },
    );

    let mut y = area.y + 2;
    for (i, image) in gallery.iter().enumerate() {
        if y >= area.y + area.height {
            break;
        }
        let marker = if i == form.cursor { "▶ " } else { "  " };
        let badge = if image.is_profile_picture {
            Span::styled(" [profile]", Style::default().fg(Color::Green))
        } else {
            Span::raw("")
        };
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(format!("{}. {}", i + 1, image.url), Style::default().fg(Color::White)),
            badge,
        ]);
        frame.render_widget(Paragraph::new(line), Rect { y, height: 1, ..area });
        y += 1;
    }

    if gallery.len() < ImageGallery::MAX_IMAGES && y < area.y + area.height {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "  [u] upload another image",
                Style::default().fg(Color::DarkGray),
            ))),
            Rect { y, height: 1, ..area },
        );
    }
}

/// Handle a key for the images step
pub fn handle_key(
    key: KeyEvent,
    form: &mut ImagesForm,
    wizard: &mut Wizard,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Up => {
            form.cursor = form.cursor.saturating_sub(1);
            StepAction::Handled
        }
        KeyCode::Down => {
            let len = wizard.draft().images.len();
            if len > 0 && form.cursor + 1 < len {
                form.cursor += 1;
            }
            StepAction::Handled
        }

        KeyCode::Char('u') => {
            form.upload_counter += 1;
            let url = format!("upload://content-{:02}.jpg", form.upload_counter);
            let mut result = Ok(());
            wizard.update_draft(|d| result = d.images.add(url));
            if let Err(err) = result {
                notifications.push(Notification::error(err.to_string()));
            }
            StepAction::Handled
        }

        KeyCode::Char('p') => {
            let cursor = form.cursor;
            if wizard.draft().images.is_empty() {
                notifications.push(Notification::error("Upload an image first"));
                return StepAction::Handled;
            }
            let mut result = Ok(());
            wizard.update_draft(|d| result = d.images.set_profile_picture(cursor));
            if let Err(err) = result {
                notifications.push(Notification::error(err.to_string()));
            }
            StepAction::Handled
        }

        KeyCode::Char('d') | KeyCode::Delete => {
            let cursor = form.cursor;
            wizard.update_draft(|d| d.images.remove(cursor));
            let len = wizard.draft().images.len();
            if form.cursor >= len && len > 0 {
                form.cursor = len - 1;
            }
            StepAction::Handled
        }

        KeyCode::Enter => {
            let gallery = &wizard.draft().images;
            if gallery.len() < ImageGallery::MIN_IMAGES {
                notifications.push(Notification::error(format!(
                    "Please add at least {} images",
                    ImageGallery::MIN_IMAGES
                )));
                return StepAction::Handled;
            }
            if gallery.profile_picture().is_none() {
                notifications.push(Notification::error("Please select a profile picture"));
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
    fn test_upload_until_full() {
        let mut form = ImagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        for _ in 0..ImageGallery::MAX_IMAGES + 2 {
            handle_key(key(KeyCode::Char('u')), &mut form, &mut wizard, &mut notifications);
        }
        assert_eq!(wizard.draft().images.len(), ImageGallery::MAX_IMAGES);
        assert!(!notifications.is_empty());
    }

    #[test]
    fn test_submit_requires_minimum_and_profile_picture() {
        let mut form = ImagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        for _ in 0..2 {
            handle_key(key(KeyCode::Char('u')), &mut form, &mut wizard, &mut notifications);
        }
        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Handled); // below minimum

        handle_key(key(KeyCode::Char('u')), &mut form, &mut wizard, &mut notifications);
        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Handled); // no profile picture

        handle_key(key(KeyCode::Char('p')), &mut form, &mut wizard, &mut notifications);
        let action = handle_key(key(KeyCode::Enter), &mut form, &mut wizard, &mut notifications);
        assert_eq!(action, StepAction::Completed);
    }

    #[test]
    fn test_profile_picture_moves_with_cursor() {
        let mut form = ImagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        for _ in 0..3 {
            handle_key(key(KeyCode::Char('u')), &mut form, &mut wizard, &mut notifications);
        }
        form.cursor = 0;
        handle_key(key(KeyCode::Char('p')), &mut form, &mut wizard, &mut notifications);
        assert_eq!(wizard.draft().images.profile_picture(), Some(0));

        form.cursor = 2;
        handle_key(key(KeyCode::Char('p')), &mut form, &mut wizard, &mut notifications);
        // Exactly one image keeps the flag
        assert_eq!(wizard.draft().images.profile_picture(), Some(2));
        let flagged = wizard
            .draft()
            .images
            .iter()
            .filter(|img| img.is_profile_picture)
            .count();
        assert_eq!(flagged, 1);
    }

    #[test]
    fn test_delete_adjusts_cursor() {
        let mut form = ImagesForm::default();
        let mut wizard = Wizard::new(Audience::Creator);
        let mut notifications = NotificationQueue::new();

        for _ in 0..2 {
            handle_key(key(KeyCode::Char('u')), &mut form, &mut wizard, &mut notifications);
        }
        form.cursor = 1;
        handle_key(key(KeyCode::Char('d')), &mut form, &mut wizard, &mut notifications);
        assert_eq!(wizard.draft().images.len(), 1);
        assert_eq!(form.cursor, 0);
    }
}
