//! Selection-card list widget
//!
//! Renders a vertical list of options the way the single- and
//! multi-choice steps present them: a cursor marker, and either a
//! radio dot or a checkbox depending on the mode.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// How an option's selected state is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceMode {
    /// One selection: (•) / ( )
    Single,
    /// Many selections: [x] / [ ]
    Multi,
}

/// One row in the list
#[derive(Debug, Clone)]
pub struct ChoiceItem {
    pub label: String,
    pub selected: bool,
}

/// The selection-card list
pub struct ChoiceList {
    items: Vec<ChoiceItem>,
    cursor: usize,
    mode: ChoiceMode,
}

impl ChoiceList {
    pub fn new(items: Vec<ChoiceItem>, cursor: usize, mode: ChoiceMode) -> Self {
        Self {
            items,
            cursor,
            mode,
        }
    }
}

impl Widget for ChoiceList {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, item) in self.items.iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let y = area.y + i as u16;

            let marker = if i == self.cursor { "▶ " } else { "  " };
            let state = match (self.mode, item.selected) {
                (ChoiceMode::Single, true) => "(•) ",
                (ChoiceMode::Single, false) => "( ) ",
                (ChoiceMode::Multi, true) => "[x] ",
                (ChoiceMode::Multi, false) => "[ ] ",
            };

            let mut style = Style::default().fg(Color::White);
            if item.selected {
                style = style.fg(Color::Green);
            }
            if i == self.cursor {
                style = style.add_modifier(Modifier::BOLD);
            }

            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::styled(state, style),
                Span::styled(item.label.clone(), style),
            ]);
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}

/// Move a cursor up within `len` items, wrapping
pub fn cursor_up(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    if cursor == 0 {
        len - 1
    } else {
        cursor - 1
    }
}

/// Move a cursor down within `len` items, wrapping
pub fn cursor_down(cursor: usize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    (cursor + 1) % len
}
