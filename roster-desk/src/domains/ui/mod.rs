//! UI domain: the notification surface, theme, and views.

pub mod feedback_ui;
pub mod messages;
pub mod theme;
pub mod update;
pub mod views;

pub use feedback_ui::{Notification, Severity};
pub use messages::Message as UiMessage;
pub use update::update_ui;
