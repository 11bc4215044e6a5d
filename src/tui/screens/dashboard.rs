//! Dashboard screen
//!
//! The terminal hand-off target. After a finished signup it shows a
//! summary of the submitted profile; after a login it just greets the
//! account.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::SignupDraft;
use crate::tui::app::{App, Screen};
use crate::tui::layout::{card_area, FormLayout};
use crate::wizard::Audience;

/// Dashboard state
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    pub greeting_name: String,
    pub audience: Option<Audience>,
    pub summary: Vec<String>,
}

impl DashboardState {
    /// Build the post-signup summary from the submitted draft
    pub fn from_draft(audience: Audience, draft: &SignupDraft) -> Self {
        let greeting_name = [
            draft.brand_name.as_str(),
            draft.full_name.as_str(),
            draft.username.as_str(),
        ]
        .iter()
        .find(|s| !s.is_empty())
        .unwrap_or(&"there")
        .to_string();

        let mut summary = Vec::new();
        if !draft.username.is_empty() {
            summary.push(format!("Username: @{}", draft.username));
        }
        if !draft.email.is_empty() {
            let verified = if draft.email_verified { " (verified)" } else { "" };
            summary.push(format!("Email: {}{}", draft.email, verified));
        }
        match audience {
            Audience::Creator => {
                if !draft.location.is_empty() {
                    summary.push(format!("Location: {}", draft.location));
                }
                if !draft.content_categories.is_empty() {
                    summary.push(format!(
                        "Categories: {}",
                        draft
                            .content_categories
                            .items()
                            .iter()
                            .map(|c| c.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ));
                }
                if !draft.social_profiles.is_empty() {
                    summary.push(format!("Linked channels: {}", draft.social_profiles.len()));
                }
                if !draft.packages.is_empty() {
                    summary.push(format!("Content packages: {}", draft.packages.len()));
                }
                if let Some(card) = &draft.payment {
                    summary.push(format!("Payment method: {}", card.masked()));
                }
            }
            Audience::Business => {
                if let Some(industry) = draft.industry {
                    summary.push(format!("Industry: {}", industry));
                }
                if !draft.platforms.is_empty() {
                    summary.push(format!(
                        "Target platforms: {}",
                        draft
                            .platforms
                            .items()
                            .iter()
                            .map(|p| p.to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    ));
                }
                if let Some(budget) = draft.budget {
                    summary.push(format!("Monthly budget: {}", budget));
                }
            }
        }

        Self {
            greeting_name,
            audience: Some(audience),
            summary,
        }
    }

    /// Minimal state after a plain login
    pub fn for_login(email: &str) -> Self {
        let greeting_name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            greeting_name,
            audience: None,
            summary: Vec::new(),
        }
    }
}

/// Render the dashboard screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let card = card_area(frame.area());
    let layout = FormLayout::new(card);

    let role = match app.dashboard.audience {
        Some(Audience::Creator) => " (creator)",
        Some(Audience::Business) => " (business)",
        None => "",
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(
                format!("Welcome, {}!{}", app.dashboard.greeting_name, role),
                Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Your dashboard is ready.",
                Style::default().fg(Color::White),
            )),
        ]),
        layout.header,
    );

    let mut lines = Vec::new();
    if app.dashboard.summary.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing here yet. Brands and creators you match with will show up here.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Your profile:",
            Style::default().fg(Color::Yellow),
        )));
        for item in &app.dashboard.summary {
            lines.push(Line::from(Span::styled(
                format!("  {}", item),
                Style::default().fg(Color::White),
            )));
        }
    }
    frame.render_widget(Paragraph::new(lines), layout.body);

    if app.settings.show_key_hints {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[l] Log out  [q] Quit",
                Style::default().fg(Color::DarkGray),
            ))),
            layout.hints,
        );
    }
}

/// Handle a key on the dashboard screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('l') | KeyCode::Esc => {
            app.dashboard = DashboardState::default();
            app.go_to(Screen::Landing);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, PaymentCard};

    #[test]
    fn test_greeting_prefers_brand_name() {
        let mut draft = SignupDraft::new();
        draft.username = "acme".into();
        draft.brand_name = "Acme Co".into();
        let state = DashboardState::from_draft(Audience::Business, &draft);
        assert_eq!(state.greeting_name, "Acme Co");
    }

    #[test]
    fn test_creator_summary_lines() {
        let mut draft = SignupDraft::new();
        draft.username = "casey_creates".into();
        draft.email = "casey@example.com".into();
        draft.email_verified = true;
        draft.content_categories.toggle(Category::Travel);
        draft.payment = Some(PaymentCard {
            card_number: "4242 4242 4242 4242".into(),
            expiry: "12/27".into(),
            cvv: "123".into(),
            name_on_card: "Casey".into(),
        });

        let state = DashboardState::from_draft(Audience::Creator, &draft);
        assert!(state.summary.iter().any(|l| l == "Username: @casey_creates"));
        assert!(state.summary.iter().any(|l| l.contains("(verified)")));
        assert!(state.summary.iter().any(|l| l.contains("•••• 4242")));
    }

    #[test]
    fn test_login_greeting_uses_local_part() {
        let state = DashboardState::for_login("casey@example.com");
        assert_eq!(state.greeting_name, "casey");
        assert!(state.summary.is_empty());
    }
}
