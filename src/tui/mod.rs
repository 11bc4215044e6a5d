//! Terminal User Interface module
//!
//! The full client UI: landing, auth screens, the two signup wizards,
//! and the dashboard hand-off, rendered with ratatui.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Screens
pub mod screens;

// Wizard step views
pub mod steps;

// Widgets
pub mod widgets;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
