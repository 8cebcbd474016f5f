use iced::Task;

use crate::{
    common::messages::DomainMessage,
    domains::ui::{feedback_ui::update_feedback_ui, messages::Message},
    state::State,
};

pub fn update_ui(state: &mut State, message: Message) -> Task<DomainMessage> {
    match message {
        Message::Feedback(msg) => update_feedback_ui(state, msg),
    }
}
