use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Element, Length};
use roster_model::User;

use crate::common::messages::DomainMessage;
use crate::domains::ui::theme::RosterTheme;
use crate::domains::users::{UserStore, UsersMessage};

const COLUMNS: [&str; 4] = ["First Name", "Last Name", "Email", "Actions"];

/// Width share of each column, in `COLUMNS` order.
const PORTIONS: [u16; 4] = [2, 2, 3, 2];

pub fn view_user_table(store: &UserStore) -> Element<'_, DomainMessage> {
    let header = COLUMNS.iter().zip(PORTIONS).fold(
        row![].spacing(10),
        |header, (title, portion)| {
            header.push(
                text(*title)
                    .size(14)
                    .color(RosterTheme::TEXT_PRIMARY)
                    .font(iced::Font {
                        weight: iced::font::Weight::Bold,
                        ..iced::Font::DEFAULT
                    })
                    .width(Length::FillPortion(portion)),
            )
        },
    );

    let mut rows = column![
        container(header)
            .style(RosterTheme::table_header)
            .padding([12, 16])
            .width(Length::Fill)
    ];
    for user in store.users() {
        rows = rows.push(user_row(user));
    }

    container(scrollable(rows).height(Length::Fill))
        .style(RosterTheme::paper)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn user_row(user: &User) -> Element<'_, DomainMessage> {
    let actions = row![
        button(text("Edit"))
            .style(button::text)
            .padding([6, 10])
            .on_press(DomainMessage::Users(UsersMessage::BeginEdit(
                user.clone()
            ))),
        button(text("Delete"))
            .style(button::danger)
            .padding([6, 10])
            .on_press(DomainMessage::Users(UsersMessage::RequestDelete(
                user.id.clone()
            ))),
    ]
    .spacing(10)
    .align_y(Alignment::Center);

    container(
        row![
            cell(&user.first_name, PORTIONS[0]),
            cell(&user.last_name, PORTIONS[1]),
            cell(&user.email, PORTIONS[2]),
            container(actions).width(Length::FillPortion(PORTIONS[3])),
        ]
        .align_y(Alignment::Center)
        .spacing(10),
    )
    .padding([8, 16])
    .width(Length::Fill)
    .into()
}

fn cell(value: &str, portion: u16) -> Element<'_, DomainMessage> {
    text(value)
        .size(14)
        .color(RosterTheme::TEXT_PRIMARY)
        .width(Length::FillPortion(portion))
        .into()
}
