//! Landing screen
//!
//! The product pitch plus the three entry points: creator signup,
//! business signup, and sign-in.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::{card_area, FormLayout};
use crate::tui::widgets::{
    choices::{cursor_down, cursor_up},
    ChoiceItem, ChoiceList, ChoiceMode,
};
use crate::wizard::Audience;

const MENU: &[&str] = &[
    "Join as a creator",
    "Join as a business",
    "Sign in",
    "Quit",
];

/// Landing screen state
#[derive(Debug, Clone, Copy, Default)]
pub struct LandingState {
    pub cursor: usize,
}

/// Render the landing screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let card = card_area(frame.area());
    let layout = FormLayout::new(card);

    let title = Line::from(Span::styled(
        "creatorlink",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    ));
    let tagline = Line::from(Span::styled(
        "Where creators and brands find each other.",
        Style::default().fg(Color::White),
    ));
    frame.render_widget(Paragraph::new(vec![title, tagline]), layout.header);

    let items: Vec<ChoiceItem> = MENU
        .iter()
        .map(|label| ChoiceItem {
            label: label.to_string(),
            selected: false,
        })
        .collect();
    frame.render_widget(
        ChoiceList::new(items, app.landing.cursor, ChoiceMode::Single),
        Rect {
            y: layout.body.y + 1,
            height: layout.body.height.saturating_sub(1),
            ..layout.body
        },
    );

    if app.settings.show_key_hints {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "[↑/↓] Move  [Enter] Select  [q] Quit",
                Style::default().fg(Color::DarkGray),
            ))),
            layout.hints,
        );
    }
}

/// Handle a key on the landing screen
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.landing.cursor = cursor_up(app.landing.cursor, MENU.len());
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.landing.cursor = cursor_down(app.landing.cursor, MENU.len());
        }
        KeyCode::Enter => match app.landing.cursor {
            0 => app.start_signup(Audience::Creator),
            1 => app.start_signup(Audience::Business),
            2 => app.go_to(Screen::Login),
            _ => app.quit(),
        },
        KeyCode::Char('q') => app.quit(),
        _ => {}
    }
}
