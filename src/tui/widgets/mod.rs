//! Reusable TUI widgets

pub mod choices;
pub mod input;
pub mod notification;
pub mod progress;

pub use choices::{ChoiceItem, ChoiceList, ChoiceMode};
pub use input::TextInput;
pub use notification::{Notification, NotificationQueue, NotificationWidget, Severity};
pub use progress::ProgressBar;
