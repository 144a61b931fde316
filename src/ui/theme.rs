//! Theme and styling configuration.
//!
//! Widgets take a [`Theme`] prop and resolve it to a [`Palette`] at render
//! time. The palette maps the light and dark looks onto terminal colors.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The visual theme of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background, dark text.
    #[default]
    Light,
    /// Dark background, light text.
    Dark,
}

impl Theme {
    /// Resolve the theme to its color palette.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => Palette::light(),
            Theme::Dark => Palette::dark(),
        }
    }

    /// Check if this is the dark theme.
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Resolved colors for a theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Label text above inputs.
    pub label: Color,
    /// Placeholder and secondary text.
    pub muted: Color,
    /// Helper text below inputs.
    pub helper: Color,
    /// Error text and invalid borders.
    pub error: Color,
    /// Resting border color.
    pub border: Color,
    /// Border color of the focused element.
    pub focus: Color,
    /// Background of filled inputs.
    pub fill: Color,
    /// Background of disabled inputs.
    pub disabled: Color,
    /// Background of odd table rows.
    pub stripe: Color,
    /// Background of selected table rows.
    pub selected: Color,
    /// Accent for spinners and active sort arrows.
    pub accent: Color,
}

impl Palette {
    /// The light palette.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            label: Color::DarkGray,
            muted: Color::Gray,
            helper: Color::DarkGray,
            error: Color::Red,
            border: Color::Gray,
            focus: Color::Blue,
            fill: Color::Rgb(243, 244, 246),
            disabled: Color::Rgb(229, 231, 235),
            stripe: Color::Rgb(249, 250, 251),
            selected: Color::Rgb(219, 234, 254),
            accent: Color::Blue,
        }
    }

    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Rgb(31, 41, 55),
            label: Color::Rgb(229, 231, 235),
            muted: Color::Gray,
            helper: Color::Rgb(209, 213, 219),
            error: Color::LightRed,
            border: Color::DarkGray,
            focus: Color::LightBlue,
            fill: Color::Rgb(55, 65, 81),
            disabled: Color::Rgb(75, 85, 99),
            stripe: Color::Rgb(38, 48, 63),
            selected: Color::Rgb(30, 58, 138),
            accent: Color::LightBlue,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Theme::default().palette()
    }
}
