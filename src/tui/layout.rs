//! Layout definitions for the TUI
//!
//! The whole client renders inside one centered card, the way the web
//! reference centers its auth forms; these helpers carve that card up.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for a wizard step screen
pub struct WizardLayout {
    /// Step title + description
    pub header: Rect,
    /// Progress caption + segments
    pub progress: Rect,
    /// The step's form body
    pub body: Rect,
    /// Key hints at the bottom
    pub hints: Rect,
}

impl WizardLayout {
    /// Calculate layout from the card area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Progress
                Constraint::Min(5),    // Body
                Constraint::Length(1), // Hints
            ])
            .split(area);

        Self {
            header: chunks[0],
            progress: chunks[1],
            body: chunks[2],
            hints: chunks[3],
        }
    }
}

/// Layout for the simple auth screens (login, forgot password)
pub struct FormLayout {
    /// Screen title
    pub header: Rect,
    /// Form fields
    pub body: Rect,
    /// Key hints
    pub hints: Rect,
}

impl FormLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            header: chunks[0],
            body: chunks[1],
            hints: chunks[2],
        }
    }
}

/// Create a centered rect taking the given percentages of the frame
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// The main card every screen draws inside
pub fn card_area(frame_area: Rect) -> Rect {
    centered_rect(70, 80, frame_area)
}

/// Where toasts pop up: the top-right corner of the frame
pub fn toast_area(frame_area: Rect) -> Rect {
    let width = 44.min(frame_area.width);
    let height = 4.min(frame_area.height);
    Rect::new(
        frame_area.x + frame_area.width.saturating_sub(width + 1),
        frame_area.y + 1,
        width,
        height,
    )
}
