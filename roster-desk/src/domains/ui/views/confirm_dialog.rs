//! Modal confirmation shown before a delete request is sent.

use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, text,
};
use iced::{Element, Length};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::RosterTheme;
use crate::domains::users::{DeletePrompt, UsersMessage};

/// Overlay for the delete prompt, or `None` while it is closed.
///
/// Both buttons go inert once the delete is in flight; clicking the
/// backdrop counts as cancel.
pub fn view_confirm_dialog(
    prompt: &DeletePrompt,
) -> Option<Element<'_, DomainMessage>> {
    prompt.target()?;
    let in_flight = matches!(prompt, DeletePrompt::Deleting(_));

    let cancel = DomainMessage::Users(UsersMessage::CancelDelete);
    let confirm = DomainMessage::Users(UsersMessage::ConfirmDelete);

    let buttons = row![
        button(text("Cancel"))
            .style(button::secondary)
            .padding([8, 14])
            .on_press_maybe((!in_flight).then(|| cancel.clone())),
        button(text(if in_flight { "Deleting..." } else { "Delete" }))
            .style(button::danger)
            .padding([8, 14])
            .on_press_maybe((!in_flight).then_some(confirm)),
    ]
    .spacing(8);

    let dialog = container(
        column![
            text("Delete this user?")
                .size(20)
                .color(RosterTheme::TEXT_PRIMARY),
            text("This removes the user from the list once the server confirms.")
                .size(14)
                .color(RosterTheme::TEXT_SECONDARY),
            container(buttons).align_right(Length::Fill),
        ]
        .spacing(16),
    )
    .style(RosterTheme::paper)
    .padding(24)
    .max_width(420);

    Some(opaque(
        mouse_area(center(opaque(dialog)).style(RosterTheme::scrim))
            .on_press(cancel),
    ))
}
