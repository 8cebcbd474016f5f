//! Root update: routes each message to its domain.

use iced::Task;

use crate::common::messages::DomainMessage;
use crate::domains::{ui, users};
use crate::state::State;

pub fn update(state: &mut State, message: DomainMessage) -> Task<DomainMessage> {
    log::trace!("update: {:?}", message);

    match message {
        DomainMessage::Users(msg) => users::update_users(state, msg),
        DomainMessage::Ui(msg) => ui::update_ui(state, msg),
    }
}
