use iced::Task;
use log::debug;

use crate::{
    common::messages::DomainMessage,
    domains::ui::feedback_ui::{FeedbackMessage, Severity},
    infra::constants::notification::AUTO_HIDE,
    state::State,
};

/// Show a notification and schedule it to hide itself.
pub fn notify(
    state: &mut State,
    message: impl Into<String>,
    severity: Severity,
) -> Task<DomainMessage> {
    let generation = state.notification.notify(message, severity);
    Task::perform(
        async move { tokio::time::sleep(AUTO_HIDE).await },
        move |()| FeedbackMessage::NotificationExpired(generation).into(),
    )
}

pub fn update_feedback_ui(
    state: &mut State,
    message: FeedbackMessage,
) -> Task<DomainMessage> {
    match message {
        FeedbackMessage::DismissNotification => {
            state.notification.dismiss();
            Task::none()
        }
        FeedbackMessage::NotificationExpired(generation) => {
            if !state.notification.expire(generation) {
                debug!(
                    "Ignoring stale auto-hide for notification {} (current {})",
                    generation,
                    state.notification.generation()
                );
            }
            Task::none()
        }
    }
}
