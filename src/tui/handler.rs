//! Event handler for the TUI
//!
//! Routes keyboard events to the active screen and drains expired
//! toasts on tick.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, Screen};
use super::event::Event;
use super::screens;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => {
            handle_key_event(app, key);
            Ok(())
        }
        Event::Tick => {
            app.notifications.remove_expired();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Crossterm reports press and release on some platforms
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+Q quits from anywhere; the text-entry screens own every
    // other key
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }

    match app.screen {
        Screen::Landing => screens::landing::handle_key(app, key),
        Screen::Login => screens::login::handle_key(app, key),
        Screen::ForgotPassword => screens::forgot_password::handle_key(app, key),
        Screen::Signup => screens::signup::handle_key(app, key),
        Screen::Dashboard => screens::dashboard::handle_key(app, key),
    }
}
