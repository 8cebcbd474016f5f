//! Create/edit form bound to whichever draft is active.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};
use roster_model::{DraftField, FormMode};

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::RosterTheme;
use crate::domains::users::{UserStore, UsersMessage};

/// Heading and submit label for the current mode.
pub fn form_labels(mode: &FormMode) -> (&'static str, &'static str) {
    if mode.is_editing() {
        ("Update User", "Update User")
    } else {
        ("Add New User", "Add User")
    }
}

pub fn view_user_form(store: &UserStore) -> Element<'_, DomainMessage> {
    let mode = store.form();
    let draft = mode.active_draft();
    let (heading, submit_label) = form_labels(mode);

    let mut fields = column![
        text(heading).size(20).color(RosterTheme::TEXT_PRIMARY)
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    for field in DraftField::ALL {
        fields = fields.push(labeled_input(field, draft.get(field)));
    }

    let submit =
        button(container(text(submit_label)).center_x(Length::Fill))
            .style(button::primary)
            .padding([10, 16])
            .width(Length::Fill)
            .on_press(DomainMessage::Users(UsersMessage::SubmitForm));

    let actions = if mode.is_editing() {
        row![
            submit,
            button(text("Cancel"))
                .style(button::secondary)
                .padding([10, 16])
                .on_press(DomainMessage::Users(UsersMessage::CancelEdit)),
        ]
        .spacing(8)
    } else {
        row![submit]
    };

    container(fields.push(actions))
        .style(RosterTheme::paper)
        .padding(20)
        .max_width(420)
        .into()
}

fn labeled_input(field: DraftField, value: &str) -> Element<'_, DomainMessage> {
    column![
        text(field.label())
            .size(12)
            .color(RosterTheme::TEXT_SECONDARY),
        text_input(field.label(), value)
            .on_input(move |value| {
                DomainMessage::Users(UsersMessage::FieldChanged(field, value))
            })
            .on_submit(DomainMessage::Users(UsersMessage::SubmitForm))
            .padding(10)
            .width(Length::Fill),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}
