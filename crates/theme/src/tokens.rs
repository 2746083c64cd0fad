//! The top-level theme structure that holds all styling tokens.

use crate::error::ThemeError;
use decksmith_types::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A full set of visual style tokens, applied uniformly across a render.
///
/// Every field carries a default so a partial theme file only overrides
/// what it names. `Theme::default()` is the built-in palette used when no
/// theme file is supplied.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Theme {
    #[serde(default)]
    pub modes: Modes,
    #[serde(default)]
    pub elements: Elements,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<Footer>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Modes {
    #[serde(default = "ModeColors::light_default")]
    pub light: ModeColors,
    #[serde(default = "ModeColors::dark_default")]
    pub dark: ModeColors,
}

impl Default for Modes {
    fn default() -> Self {
        Self {
            light: ModeColors::light_default(),
            dark: ModeColors::dark_default(),
        }
    }
}

/// Colors for one background mode.
///
/// `surface` fills raised elements (cards, bars, checkboxes, logo wells) so
/// they stay visible against the slide background.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ModeColors {
    pub background: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    #[serde(default = "ModeColors::default_surface")]
    pub surface: Color,
}

impl ModeColors {
    fn default_surface() -> Color {
        Color::new(0xFF, 0xFF, 0xFF)
    }

    fn light_default() -> Self {
        Self {
            background: Color::new(0xF5, 0xF3, 0xF0),
            text_primary: Color::new(0x1B, 0x31, 0x39),
            text_secondary: Color::new(0x6B, 0x72, 0x80),
            accent: Color::new(0xFF, 0x36, 0x21),
            surface: Self::default_surface(),
        }
    }

    fn dark_default() -> Self {
        Self {
            background: Color::new(0x1B, 0x31, 0x39),
            text_primary: Color::new(0xFF, 0xFF, 0xFF),
            text_secondary: Color::new(0xFF, 0xFF, 0xFF),
            accent: Color::new(0xFF, 0x36, 0x21),
            surface: Self::default_surface(),
        }
    }
}

/// Fixed element colors that do not vary with background mode.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Elements {
    #[serde(default = "Elements::default_pros")]
    pub pros_header_color: Color,
    #[serde(default = "Elements::default_cons")]
    pub cons_header_color: Color,
    #[serde(default = "Elements::default_divider")]
    pub stat_row_divider: Color,
}

impl Elements {
    fn default_pros() -> Color {
        Color::new(0x10, 0xB9, 0x81)
    }

    fn default_cons() -> Color {
        Color::new(0xEF, 0x44, 0x44)
    }

    fn default_divider() -> Color {
        Color::new(0xE5, 0xE7, 0xEB)
    }
}

impl Default for Elements {
    fn default() -> Self {
        Self {
            pros_header_color: Self::default_pros(),
            cons_header_color: Self::default_cons(),
            stat_row_divider: Self::default_divider(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Typography {
    #[serde(default = "Typography::default_family")]
    pub font_family: String,
}

impl Typography {
    fn default_family() -> String {
        "DM Sans".to_string()
    }
}

impl Default for Typography {
    fn default() -> Self {
        Self { font_family: Self::default_family() }
    }
}

/// Footer configuration; absent means no footer is rendered.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Footer {
    #[serde(default)]
    pub text: String,
}

impl Theme {
    /// Parse a theme from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a theme from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        log::debug!("Loading theme from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// The color set for one background mode.
    pub fn mode(&self, dark: bool) -> &ModeColors {
        if dark { &self.modes.dark } else { &self.modes.light }
    }
}
