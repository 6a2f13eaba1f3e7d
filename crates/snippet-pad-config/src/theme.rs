/// Theme definitions: playground colors and built-in presets.
use serde::{Deserialize, Serialize};

use crate::color::HexColor;

/// Colors for the playground surface (editor area, preview pane, chrome).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundColors {
    pub bg_color: HexColor,
    pub text_color: HexColor,
    pub editor_bg: HexColor,
    pub editor_text: HexColor,
    pub preview_bg: HexColor,
    pub preview_text: HexColor,
    pub accent_color: HexColor,
    pub button_bg: HexColor,
    pub button_text: HexColor,
    pub border_color: HexColor,
}

impl Default for PlaygroundColors {
    fn default() -> Self {
        Self {
            bg_color: HexColor::rgb(30, 30, 30),
            text_color: HexColor::rgb(212, 212, 212),
            editor_bg: HexColor::rgb(37, 37, 37),
            editor_text: HexColor::rgb(220, 220, 220),
            preview_bg: HexColor::rgb(25, 25, 25),
            preview_text: HexColor::rgb(180, 180, 180),
            accent_color: HexColor::rgb(80, 180, 200),
            button_bg: HexColor::rgb(50, 50, 50),
            button_text: HexColor::rgb(230, 230, 230),
            border_color: HexColor::rgb(60, 60, 60),
        }
    }
}

/// A complete theme definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDefinition {
    pub name: String,
    pub dark_mode: bool,
    #[serde(default)]
    pub colors: PlaygroundColors,
}

/// Built-in dark theme.
pub fn builtin_dark() -> ThemeDefinition {
    ThemeDefinition {
        name: "Dark".to_string(),
        dark_mode: true,
        colors: PlaygroundColors::default(),
    }
}

/// Built-in light theme.
pub fn builtin_light() -> ThemeDefinition {
    ThemeDefinition {
        name: "Light".to_string(),
        dark_mode: false,
        colors: PlaygroundColors {
            bg_color: HexColor::rgb(250, 250, 250),
            text_color: HexColor::rgb(30, 30, 30),
            editor_bg: HexColor::rgb(255, 255, 255),
            editor_text: HexColor::rgb(20, 20, 20),
            preview_bg: HexColor::rgb(245, 245, 245),
            preview_text: HexColor::rgb(50, 50, 50),
            accent_color: HexColor::rgb(50, 120, 200),
            button_bg: HexColor::rgb(230, 230, 230),
            button_text: HexColor::rgb(30, 30, 30),
            border_color: HexColor::rgb(200, 200, 200),
        },
    }
}

/// Built-in solarized theme.
pub fn builtin_solarized() -> ThemeDefinition {
    ThemeDefinition {
        name: "Solarized".to_string(),
        dark_mode: true,
        colors: PlaygroundColors {
            bg_color: HexColor::rgb(0, 43, 54),
            text_color: HexColor::rgb(131, 148, 150),
            editor_bg: HexColor::rgb(7, 54, 66),
            editor_text: HexColor::rgb(147, 161, 161),
            preview_bg: HexColor::rgb(0, 33, 43),
            preview_text: HexColor::rgb(131, 148, 150),
            accent_color: HexColor::rgb(42, 161, 152),
            button_bg: HexColor::rgb(7, 54, 66),
            button_text: HexColor::rgb(238, 232, 213),
            border_color: HexColor::rgb(88, 110, 117),
        },
    }
}
