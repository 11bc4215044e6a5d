//! Toast notification widget
//!
//! Every validation failure and success confirmation surfaces here as a
//! transient message with a title, an optional description, and a
//! severity.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl Severity {
    /// Get the color for this severity
    pub fn color(&self) -> Color {
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }

    /// Get the icon/prefix for this severity
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "i",
            Self::Success => "+",
            Self::Warning => "!",
            Self::Error => "x",
        }
    }
}

/// A toast notification
#[derive(Debug, Clone)]
pub struct Notification {
    /// Short headline
    pub title: String,
    /// Optional longer explanation
    pub description: Option<String>,
    /// Severity
    pub severity: Severity,
    /// Time when the notification was created (for auto-dismiss)
    pub created_at: std::time::Instant,
    /// Duration to display (in seconds)
    pub duration_secs: u64,
}

impl Notification {
    /// Create a new notification
    pub fn new(title: impl Into<String>, severity: Severity) -> Self {
        Self {
            title: title.into(),
            description: None,
            severity,
            created_at: std::time::Instant::now(),
            duration_secs: 3,
        }
    }

    /// Create an info notification
    pub fn info(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Info)
    }

    /// Create a success notification
    pub fn success(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Success)
    }

    /// Create a warning notification
    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Warning)
    }

    /// Create an error notification
    pub fn error(title: impl Into<String>) -> Self {
        Self::new(title, Severity::Error)
    }

    /// Attach a description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the display duration
    pub fn with_duration(mut self, seconds: u64) -> Self {
        self.duration_secs = seconds;
        self
    }

    /// Check if the notification has expired
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.duration_secs
    }
}

/// Widget for rendering a notification
pub struct NotificationWidget<'a> {
    notification: &'a Notification,
}

impl<'a> NotificationWidget<'a> {
    /// Create a new notification widget
    pub fn new(notification: &'a Notification) -> Self {
        Self { notification }
    }
}

impl<'a> Widget for NotificationWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = self.notification.severity.color();
        let icon = self.notification.severity.icon();

        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(format!(" {} {} ", icon, self.notification.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD));

        let body = match &self.notification.description {
            Some(description) => Line::from(Span::styled(
                description.clone(),
                Style::default().fg(Color::White),
            )),
            None => Line::default(),
        };

        Paragraph::new(body)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}

/// A queue of notifications to display
#[derive(Debug, Default)]
pub struct NotificationQueue {
    notifications: Vec<Notification>,
}

impl NotificationQueue {
    /// Create a new notification queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a notification to the queue
    pub fn push(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Remove expired notifications
    pub fn remove_expired(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Get the current notification to display (if any)
    pub fn current(&self) -> Option<&Notification> {
        self.notifications.first()
    }

    /// Check if there are any notifications
    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }

    /// Get the number of notifications
    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    /// Clear all notifications
    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_creation() {
        let n = Notification::error("Username is too short")
            .with_description("Username must be at least 3 characters");
        assert_eq!(n.title, "Username is too short");
        assert_eq!(n.severity, Severity::Error);
        assert!(n.description.is_some());
    }

    #[test]
    fn test_severity_colors() {
        assert_eq!(Severity::Info.color(), Color::Blue);
        assert_eq!(Severity::Success.color(), Color::Green);
        assert_eq!(Severity::Warning.color(), Color::Yellow);
        assert_eq!(Severity::Error.color(), Color::Red);
    }

    #[test]
    fn test_queue_order() {
        let mut queue = NotificationQueue::new();
        assert!(queue.is_empty());

        queue.push(Notification::info("First"));
        queue.push(Notification::success("Second"));

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().unwrap().title, "First");
    }

    #[test]
    fn test_expiry() {
        let n = Notification::info("gone").with_duration(0);
        assert!(n.is_expired());

        let mut queue = NotificationQueue::new();
        queue.push(n);
        queue.push(Notification::info("stays"));
        queue.remove_expired();
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.current().unwrap().title, "stays");
    }
}
