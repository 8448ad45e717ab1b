use crate::theme::ThemeMode;
use ratatui::style::Color;

/// Colour palette used by every widget.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,
}

/// RGB colour.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Return the palette for a display mode.
    ///
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    /// Rose Pine Dawn.
    ///
    pub fn light() -> Self {
        Theme {
            name: "light".to_string(),
            primary: ColorSpec::new(144, 122, 169),   // Iris
            secondary: ColorSpec::new(40, 105, 131),  // Pine
            accent: ColorSpec::new(215, 130, 126),    // Rose
            banner: ColorSpec::new(180, 99, 122),     // Love
            text: ColorSpec::new(87, 82, 121),        // Text
            text_secondary: ColorSpec::new(121, 117, 147), // Subtle
            text_muted: ColorSpec::new(152, 147, 165),     // Muted
            background: ColorSpec::new(250, 244, 237), // Base
            surface: ColorSpec::new(255, 250, 243),    // Surface
            success: ColorSpec::new(40, 105, 131),     // Pine
            warning: ColorSpec::new(234, 157, 52),     // Gold
            error: ColorSpec::new(180, 99, 122),       // Love
            info: ColorSpec::new(86, 148, 159),        // Foam
            border_active: ColorSpec::new(144, 122, 169),
            border_normal: ColorSpec::new(152, 147, 165),
            highlight_bg: ColorSpec::new(223, 218, 217), // Highlight Med
            highlight_fg: ColorSpec::new(87, 82, 121),
        }
    }

    /// Tokyo Night.
    ///
    pub fn dark() -> Self {
        Theme {
            name: "dark".to_string(),
            primary: ColorSpec::new(125, 207, 255),   // Blue
            secondary: ColorSpec::new(158, 206, 106), // Green
            accent: ColorSpec::new(255, 159, 196),    // Magenta
            banner: ColorSpec::new(255, 159, 196),
            text: ColorSpec::new(169, 177, 214),            // Foreground
            text_secondary: ColorSpec::new(192, 202, 245),
            text_muted: ColorSpec::new(117, 121, 148),      // Comment
            background: ColorSpec::new(26, 27, 38),
            surface: ColorSpec::new(36, 40, 59),            // Selection
            success: ColorSpec::new(158, 206, 106),
            warning: ColorSpec::new(255, 202, 40),
            error: ColorSpec::new(247, 118, 142),
            info: ColorSpec::new(125, 207, 255),
            border_active: ColorSpec::new(125, 207, 255),
            border_normal: ColorSpec::new(117, 121, 148),
            highlight_bg: ColorSpec::new(125, 207, 255),
            highlight_fg: ColorSpec::new(26, 27, 38),
        }
    }
}
