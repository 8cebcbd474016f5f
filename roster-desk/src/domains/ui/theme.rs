use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::container,
};

/// Light theme with a blue primary, close to a stock material look
#[derive(Debug, Clone, Copy)]
pub struct RosterTheme;

impl RosterTheme {
    // Core colors
    pub const BACKGROUND: Color = Color::from_rgb(0.98, 0.98, 0.98); // #FAFAFA
    pub const SURFACE: Color = Color::WHITE;
    pub const PRIMARY: Color = Color::from_rgb(0.098, 0.463, 0.824); // #1976D2
    pub const BORDER_COLOR: Color = Color::from_rgb(0.88, 0.88, 0.88); // #E0E0E0
    pub const HEADER_BG: Color = Color::from_rgb(0.96, 0.96, 0.96); // #F5F5F5

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.13, 0.13, 0.13); // #212121
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.46, 0.46, 0.46); // #757575

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.18, 0.49, 0.196); // #2E7D32
    pub const SUCCESS_BG: Color = Color::from_rgb(0.929, 0.969, 0.929); // #EDF7ED
    pub const ERROR: Color = Color::from_rgb(0.827, 0.184, 0.184); // #D32F2F
    pub const ERROR_BG: Color = Color::from_rgb(0.992, 0.929, 0.929); // #FDEDED

    pub const SCRIM: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.5);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::PRIMARY;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Roster Light".to_string(), palette)
    }

    /// Raised white surface used for the form, table and dialog.
    pub fn paper(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Self::SURFACE)),
            border: Border {
                color: Self::BORDER_COLOR,
                width: 1.0,
                radius: 4.0.into(),
            },
            shadow: Shadow {
                color: Color::from_rgba(0.0, 0.0, 0.0, 0.12),
                offset: Vector::new(0.0, 1.0),
                blur_radius: 3.0,
            },
            ..Default::default()
        }
    }

    pub fn table_header(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Self::HEADER_BG)),
            ..Default::default()
        }
    }

    /// Dimmed backdrop behind a modal.
    pub fn scrim(_theme: &Theme) -> container::Style {
        container::Style {
            background: Some(Background::Color(Self::SCRIM)),
            ..Default::default()
        }
    }
}
