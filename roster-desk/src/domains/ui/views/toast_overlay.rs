//! Snackbar overlay view
//!
//! Renders the current notification in the bottom-left corner.

use iced::widget::{button, container, row, text};
use iced::{Alignment, Element, Length, Padding};

use crate::common::messages::DomainMessage;
use crate::domains::ui::feedback_ui::{
    FeedbackMessage, Notification, Severity,
};
use crate::domains::ui::theme::RosterTheme;

/// Foreground and background colors for a severity.
pub fn severity_colors(severity: Severity) -> (iced::Color, iced::Color) {
    match severity {
        Severity::Success => (RosterTheme::SUCCESS, RosterTheme::SUCCESS_BG),
        Severity::Error => (RosterTheme::ERROR, RosterTheme::ERROR_BG),
    }
}

/// The notification layer, or `None` while nothing is showing.
pub fn view_toast_overlay(
    notification: &Notification,
) -> Option<Element<'_, DomainMessage>> {
    if !notification.is_visible() {
        return None;
    }

    let (accent, background) = severity_colors(notification.severity());

    let dismiss_btn = button(text("\u{2715}").size(14))
        .padding(4)
        .style(move |_theme, _status| button::Style {
            background: None,
            text_color: accent,
            ..Default::default()
        })
        .on_press(DomainMessage::from(FeedbackMessage::DismissNotification));

    let content = row![
        text(notification.message()).size(14).color(accent),
        dismiss_btn,
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let toast = container(content)
        .padding(Padding::new(8.0).left(16.0).right(8.0))
        .style(move |_| container::Style {
            background: Some(iced::Background::Color(background)),
            border: iced::Border {
                color: accent,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: iced::Shadow {
                color: iced::Color::from_rgba(0.0, 0.0, 0.0, 0.2),
                offset: iced::Vector::new(0.0, 3.0),
                blur_radius: 6.0,
            },
            ..Default::default()
        });

    Some(
        container(toast)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(24)
            .align_x(Alignment::Start)
            .align_y(Alignment::End)
            .into(),
    )
}
