//! Root view: form above table, with the notification and the delete
//! confirmation layered on top.

use iced::widget::{column, container, stack, text};
use iced::{Alignment, Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::RosterTheme;
use crate::domains::ui::views::{
    view_confirm_dialog, view_toast_overlay, view_user_form, view_user_table,
};
use crate::state::State;

pub fn view(state: &State) -> Element<'_, DomainMessage> {
    let page = column![
        text("CRUD with API").size(32).color(RosterTheme::TEXT_PRIMARY),
        view_user_form(&state.store),
        view_user_table(&state.store),
    ]
    .spacing(30)
    .align_x(Alignment::Center);

    let base = container(page)
        .padding(20)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = stack![base];
    if let Some(toast) = view_toast_overlay(&state.notification) {
        layers = layers.push(toast);
    }
    if let Some(dialog) = view_confirm_dialog(state.store.delete_prompt()) {
        layers = layers.push(dialog);
    }
    layers.into()
}
