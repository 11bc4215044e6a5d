//! Text input widget
//!
//! A single-line text field with cursor support, optional masking for
//! passwords, and an optional length cap.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// A simple text input widget
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Current text content
    value: String,
    /// Cursor position in chars
    cursor: usize,
    /// Whether the input is focused
    pub focused: bool,
    /// Placeholder text
    pub placeholder: String,
    /// Label
    pub label: String,
    /// Render bullets instead of the value (passwords)
    pub masked: bool,
    /// Maximum number of chars accepted
    pub max_len: Option<usize>,
}

impl TextInput {
    /// Create a new text input
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set the placeholder
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Mask the rendered value
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    /// Cap the accepted length
    pub fn max_len(mut self, max: usize) -> Self {
        self.max_len = Some(max);
        self
    }

    /// Set content, placing the cursor at the end
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.value = content.into();
        self.cursor = self.value.chars().count();
        self
    }

    /// Byte offset of the cursor's char position
    fn byte_cursor(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Insert a character at the cursor
    pub fn insert(&mut self, c: char) {
        if let Some(max) = self.max_len {
            if self.value.chars().count() >= max {
                return;
            }
        }
        let at = self.byte_cursor();
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Delete the character at the cursor
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_cursor();
            self.value.remove(at);
        }
    }

    /// Move cursor left
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor right
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Move cursor to start
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Move cursor to end
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Replace the content, keeping the cursor at the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Get the current content
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cursor position in chars
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// What should actually be drawn: the value, bullets, or placeholder
    fn display_value(&self) -> String {
        if self.value.is_empty() && !self.focused {
            return self.placeholder.clone();
        }
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Render a labeled text field with an inline cursor
pub fn render_text_field(area: Rect, buf: &mut Buffer, input: &TextInput) {
    let label_style = if input.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = Vec::new();
    if !input.label.is_empty() {
        spans.push(Span::styled(format!("{}: ", input.label), label_style));
    }

    let display = input.display_value();
    let value_style = if input.value.is_empty() && !input.focused {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(Color::White)
    };

    if input.focused {
        let chars: Vec<char> = display.chars().collect();
        let cursor = input.cursor.min(chars.len());

        let before: String = chars[..cursor].iter().collect();
        let cursor_char = chars.get(cursor).copied().unwrap_or(' ');
        let after: String = chars.get(cursor + 1..).map(|s| s.iter().collect()).unwrap_or_default();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(display, value_style));
    }

    Line::from(spans).render(area, buf);
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_text_field(area, buf, self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_value() {
        let mut input = TextInput::new();
        for c in "casey".chars() {
            input.insert(c);
        }
        assert_eq!(input.value(), "casey");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::new().content("abc");
        input.backspace();
        assert_eq!(input.value(), "ab");

        input.move_start();
        input.delete();
        assert_eq!(input.value(), "b");
    }

    #[test]
    fn test_insert_mid_string() {
        let mut input = TextInput::new().content("ac");
        input.move_left();
        input.insert('b');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_max_len_caps_input() {
        let mut input = TextInput::new().max_len(3).content("abc");
        input.insert('d');
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new().content("héllo");
        input.move_start();
        input.move_right();
        input.delete(); // removes 'é'
        assert_eq!(input.value(), "hllo");
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::new().masked();
        input.focused = true;
        input.insert('a');
        input.insert('b');
        assert_eq!(input.display_value(), "••");
    }
}
