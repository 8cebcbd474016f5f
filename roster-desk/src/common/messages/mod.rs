// Message types are defined in their respective domains
use crate::domains::{ui, users};

/// The main domain message router
#[derive(Clone)]
pub enum DomainMessage {
    /// Users list, form, and delete confirmation
    Users(users::messages::Message),

    /// Notification surface
    Ui(ui::messages::Message),
}

// Automatic routing from domain messages
impl From<users::messages::Message> for DomainMessage {
    fn from(msg: users::messages::Message) -> Self {
        DomainMessage::Users(msg)
    }
}

impl From<ui::messages::Message> for DomainMessage {
    fn from(msg: ui::messages::Message) -> Self {
        DomainMessage::Ui(msg)
    }
}

impl DomainMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Users(msg) => msg.name(),
            Self::Ui(msg) => msg.name(),
        }
    }
}

impl std::fmt::Debug for DomainMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Users(msg) => write!(f, "DomainMessage::Users({:?})", msg),
            Self::Ui(msg) => write!(f, "DomainMessage::Ui({:?})", msg),
        }
    }
}
