//! Top-level screens
//!
//! One module per screen; `render` dispatches on the active screen and
//! draws the toast overlay last so it sits on top.

pub mod dashboard;
pub mod forgot_password;
pub mod landing;
pub mod login;
pub mod signup;

use ratatui::Frame;

use super::app::{App, Screen};
use super::layout::toast_area;
use super::widgets::NotificationWidget;

/// Render the active screen plus the notification overlay
pub fn render(frame: &mut Frame, app: &mut App) {
    match app.screen {
        Screen::Landing => landing::render(frame, app),
        Screen::Login => login::render(frame, app),
        Screen::ForgotPassword => forgot_password::render(frame, app),
        Screen::Signup => signup::render(frame, app),
        Screen::Dashboard => dashboard::render(frame, app),
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(
            NotificationWidget::new(notification),
            toast_area(frame.area()),
        );
    }
}
