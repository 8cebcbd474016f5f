use std::sync::Arc;

use iced::{Application, Program as IcedProgram, Size, Theme};

use crate::common::messages::DomainMessage;
use crate::infra::services::UserDirectoryService;
use crate::state::State;
use crate::{update, view};

pub mod bootstrap;

pub use bootstrap::AppConfig;

/// Build the Roster application using the provided configuration and
/// users service.
pub fn application(
    config: AppConfig,
    directory: Arc<dyn UserDirectoryService>,
) -> Application<
    impl IcedProgram<State = State, Message = DomainMessage, Theme = Theme>,
> {
    iced::application(
        move || bootstrap::runtime_boot(&config, Arc::clone(&directory)),
        update::update,
        view::view,
    )
    .title("Roster")
    .theme(app_theme)
    .window(iced::window::Settings {
        size: Size::new(960.0, 760.0),
        resizable: true,
        decorations: true,
        ..Default::default()
    })
}

fn app_theme(_: &State) -> Theme {
    crate::domains::ui::theme::RosterTheme::theme()
}
