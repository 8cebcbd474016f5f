//! Notification surface state.
//!
//! A single snackbar-style notification. A new one overwrites whatever is
//! showing; there is no queue.

pub mod update;

use crate::domains::ui::messages::Message as UiMessage;

pub use update::{notify, update_feedback_ui};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Success => "success",
            Self::Error => "error",
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    visible: bool,
    message: String,
    severity: Severity,
    /// Bumped on every `notify`; auto-hide timers carry the value they
    /// were scheduled for.
    generation: u64,
}

impl Notification {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show `message`, replacing the current one. Returns the generation to
    /// hand to the auto-hide timer.
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.visible = true;
        self.message = message.into();
        self.severity = severity;
        self.generation
    }

    /// Hide immediately.
    pub fn dismiss(&mut self) {
        self.visible = false;
    }

    /// Hide if `generation` is still the one on screen.
    pub fn expire(&mut self, generation: u64) -> bool {
        if self.visible && self.generation == generation {
            self.visible = false;
            true
        } else {
            false
        }
    }
}

#[derive(Clone)]
pub enum FeedbackMessage {
    DismissNotification,
    NotificationExpired(u64),
}

impl From<FeedbackMessage> for UiMessage {
    fn from(msg: FeedbackMessage) -> Self {
        UiMessage::Feedback(msg)
    }
}

impl From<FeedbackMessage> for crate::common::messages::DomainMessage {
    fn from(msg: FeedbackMessage) -> Self {
        UiMessage::Feedback(msg).into()
    }
}

impl FeedbackMessage {
    pub fn name(&self) -> &'static str {
        match self {
            Self::DismissNotification => "UI::DismissNotification",
            Self::NotificationExpired(_) => "UI::NotificationExpired",
        }
    }
}

impl std::fmt::Debug for FeedbackMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DismissNotification => write!(f, "UI::DismissNotification"),
            Self::NotificationExpired(generation) => {
                write!(f, "UI::NotificationExpired({generation})")
            }
        }
    }
}
