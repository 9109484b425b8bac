//! Theme support with auto-detection for dark/light terminals.

use ratatui::style::Color;

/// Application theme (dark or light).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Detect the terminal theme based on background luminance.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                tracing::debug!("Could not detect terminal theme: {}, defaulting to dark", e);
                Theme::Dark
            }
        }
    }

    /// Get the color palette for this theme.
    pub fn palette(&self) -> Palette {
        match self {
            Theme::Dark => Palette::dark(),
            Theme::Light => Palette::light(),
        }
    }
}

/// Color palette for the application.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub fg: Color,
    pub fg_dim: Color,
    pub border: Color,
    pub primary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub muted: Color,
    pub highlight: Color,
}

impl Palette {
    /// Dark theme palette (for dark terminal backgrounds).
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            fg_dim: Color::Gray,
            border: Color::DarkGray,
            primary: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
        }
    }

    /// Light theme palette (for light terminal backgrounds).
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            fg_dim: Color::DarkGray,
            border: Color::Gray,
            primary: Color::Rgb(0, 128, 128),
            success: Color::Rgb(0, 128, 0),
            warning: Color::Rgb(184, 134, 11),
            error: Color::Rgb(178, 34, 34),
            muted: Color::Gray,
            highlight: Color::Rgb(184, 134, 11),
        }
    }
}
