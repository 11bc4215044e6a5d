//! Social channels step
//!
//! The user links profiles one platform at a time: pick a platform and
//! follower bracket, enter the URL, add it to the list. The draft's
//! profile list rejects duplicate platforms. Continuing is allowed with
//! an empty list.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{FollowerRange, Platform, SignupDraft, SocialProfile};
use crate::tui::widgets::{Notification, NotificationQueue, TextInput};
use crate::validation::validate_url;
use crate::wizard::Wizard;

use super::{edit_input, StepAction};

/// Which part of the editor is focused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SocialsField {
    #[default]
    Platform,
    Followers,
    Url,
    List,
}

impl SocialsField {
    pub fn next(self) -> Self {
        match self {
            Self::Platform => Self::Followers,
            Self::Followers => Self::Url,
            Self::Url => Self::List,
            Self::List => Self::Platform,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Platform => Self::List,
            Self::Followers => Self::Platform,
            Self::Url => Self::Followers,
            Self::List => Self::Url,
        }
    }
}

/// Form state for the social channels step
#[derive(Debug, Clone)]
pub struct SocialsForm {
    pub focused: SocialsField,
    pub platform_index: usize,
    pub followers_index: usize,
    pub url: TextInput,
    pub list_cursor: usize,
}

impl Default for SocialsForm {
    fn default() -> Self {
        Self {
            focused: SocialsField::Platform,
            platform_index: 0,
            followers_index: 0,
            url: TextInput::new().label("Profile URL").placeholder("https://..."),
            list_cursor: 0,
        }
    }
}

impl SocialsForm {
    pub fn platform(&self) -> Platform {
        Platform::SOCIAL[self.platform_index]
    }

    pub fn followers(&self) -> FollowerRange {
        FollowerRange::ALL[self.followers_index]
    }

    fn cycle_platform(&mut self, forward: bool) {
        let len = Platform::SOCIAL.len();
        self.platform_index = if forward {
            (self.platform_index + 1) % len
        } else {
            (self.platform_index + len - 1) % len
        };
    }

    fn cycle_followers(&mut self, forward: bool) {
        let len = FollowerRange::ALL.len();
        self.followers_index = if forward {
            (self.followers_index + 1) % len
        } else {
            (self.followers_index + len - 1) % len
        };
    }
}

/// Render the step body
pub fn render(frame: &mut Frame, area: Rect, form: &SocialsForm, draft: &SignupDraft) {
    let field_style = |field: SocialsField| {
        if form.focused == field {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Yellow)
        }
    };

    let platform_line = Line::from(vec![
        Span::styled("Platform: ", field_style(SocialsField::Platform)),
        Span::styled(
            format!("◀ {} ▶", form.platform()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(Paragraph::new(platform_line), Rect { height: 1, ..area });

    let followers_line = Line::from(vec![
        Span::styled("Followers: ", field_style(SocialsField::Followers)),
        Span::styled(
            format!("◀ {} ▶", form.followers()),
            Style::default().fg(Color::White),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(followers_line),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );

    let mut url = form.url.clone();
    url.focused = form.focused == SocialsField::Url;
    frame.render_widget(
        &url,
        Rect {
            y: area.y + 2,
            height: 1,
            ..area
        },
    );

    // Linked profiles
    let mut y = area.y + 4;
    let header = if draft.social_profiles.is_empty() {
        "No channels linked yet (Ctrl+A to add one)".to_string()
    } else {
        "Your social profiles:".to_string()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            header,
            Style::default().fg(Color::DarkGray),
        ))),
        Rect { y, height: 1, ..area },
    );
    y += 1;

    for (i, profile) in draft.social_profiles.iter().enumerate() {
        if y >= area.y + area.height {
            break;
        }
        let marker = if form.focused == SocialsField::List && i == form.list_cursor {
            "▶ "
        } else {
            "  "
        };
        let followers = profile
            .followers
            .map(|f| format!(" ({})", f))
            .unwrap_or_default();
        let line = Line::from(vec![
            Span::styled(marker, Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{}{}", profile.platform, followers),
                Style::default().fg(Color::White),
            ),
            Span::styled(
                format!("  {}", profile.url),
                Style::default().fg(Color::Blue),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), Rect { y, height: 1, ..area });
        y += 1;
    }
}

/// Handle a key for the social channels step
pub fn handle_key(
    key: KeyEvent,
    form: &mut SocialsForm,
    wizard: &mut Wizard,
    notifications: &mut NotificationQueue,
) -> StepAction {
    match key.code {
        KeyCode::Tab => {
            form.focused = form.focused.next();
            StepAction::Handled
        }
        KeyCode::BackTab => {
            form.focused = form.focused.prev();
            StepAction::Handled
        }

        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            add_profile(form, wizard, notifications);
            StepAction::Handled
        }

        KeyCode::Enter => StepAction::Completed,

        KeyCode::Left => match form.focused {
            SocialsField::Platform => {
                form.cycle_platform(false);
                StepAction::Handled
            }
            SocialsField::Followers => {
                form.cycle_followers(false);
                StepAction::Handled
            }
            SocialsField::Url => {
                form.url.move_left();
                StepAction::Handled
            }
            SocialsField::List => StepAction::Handled,
        },
        KeyCode::Right => match form.focused {
            SocialsField::Platform => {
                form.cycle_platform(true);
                StepAction::Handled
            }
            SocialsField::Followers => {
                form.cycle_followers(true);
                StepAction::Handled
            }
            SocialsField::Url => {
                form.url.move_right();
                StepAction::Handled
            }
            SocialsField::List => StepAction::Handled,
        },

        KeyCode::Up if form.focused == SocialsField::List => {
            form.list_cursor = form.list_cursor.saturating_sub(1);
            StepAction::Handled
        }
        KeyCode::Down if form.focused == SocialsField::List => {
            let len = wizard.draft().social_profiles.len();
            if len > 0 && form.list_cursor + 1 < len {
                form.list_cursor += 1;
            }
            StepAction::Handled
        }
        KeyCode::Char('d') | KeyCode::Delete if form.focused == SocialsField::List => {
            let cursor = form.list_cursor;
            wizard.update_draft(|d| d.social_profiles.remove(cursor));
            let len = wizard.draft().social_profiles.len();
            if form.list_cursor >= len && len > 0 {
                form.list_cursor = len - 1;
            }
            StepAction::Handled
        }

        _ if form.focused == SocialsField::Url => {
            if edit_input(key, &mut form.url) {
                StepAction::Handled
            } else {
                StepAction::Ignored
            }
        }
        _ => StepAction::Ignored,
    }
}

fn add_profile(form: &mut SocialsForm, wizard: &mut Wizard, notifications: &mut NotificationQueue) {
    let url = form.url.value().trim().to_string();
    if url.is_empty() {
        notifications.push(Notification::error("Please enter a URL"));
        return;
    }
    if let Err(message) = validate_url(&url) {
        notifications.push(Notification::error("Please enter a valid URL").with_description(message));
        return;
    }

    let profile = SocialProfile {
        platform: form.platform(),
        url,
        followers: Some(form.followers()),
    };

    let mut result = Ok(());
    wizard.update_draft(|d| result = d.social_profiles.add(profile));

    match result {
        Ok(()) => {
            form.url.clear();
            form.platform_index = 0;
            form.followers_index = 0;
        }
        Err(err) => {
            notifications
                .push(Notification::error("Platform already added").with_description(err.to_string()));
        }
    }
}
