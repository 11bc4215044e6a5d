//! Wizard progress bar
//!
//! One segment per step: completed steps are filled, the current step
//! is highlighted, everything else is dim. A "Step N of M" caption sits
//! above the bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::wizard::Progress;

/// Renders wizard progress from the engine's read-only snapshot
pub struct ProgressBar {
    progress: Progress,
    /// Which step indices are complete (for per-segment fill)
    completed: Vec<bool>,
}

impl ProgressBar {
    pub fn new(progress: Progress, completed: Vec<bool>) -> Self {
        Self {
            progress,
            completed,
        }
    }
}

impl Widget for ProgressBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let caption = format!(
            "Step {} of {}",
            self.progress.current + 1,
            self.progress.total
        );
        let caption_line = Line::from(Span::styled(
            caption,
            Style::default().fg(Color::DarkGray),
        ));
        buf.set_line(area.x, area.y, &caption_line, area.width);

        if area.height < 2 {
            return;
        }

        let mut spans = Vec::with_capacity(self.progress.total * 2);
        for i in 0..self.progress.total {
            let done = self.completed.get(i).copied().unwrap_or(false);
            let style = if i == self.progress.current {
                Style::default().fg(Color::Cyan)
            } else if done {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            let glyph = if i == self.progress.current {
                "▶"
            } else if done {
                "■"
            } else {
                "□"
            };
            spans.push(Span::styled(glyph, style));
            if i + 1 < self.progress.total {
                spans.push(Span::raw(" "));
            }
        }
        buf.set_line(area.x, area.y + 1, &Line::from(spans), area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{Audience, Wizard};

    #[test]
    fn test_bar_reflects_engine_state() {
        let mut wizard = Wizard::new(Audience::Business);
        wizard.mark_step_complete(0);
        wizard.advance();

        let completed: Vec<bool> = (0..wizard.total_steps())
            .map(|i| wizard.is_step_complete(i))
            .collect();
        let bar = ProgressBar::new(wizard.progress(), completed.clone());

        assert_eq!(bar.progress.current, 1);
        assert!(completed[0]);
        assert!(!completed[1]);
    }
}
