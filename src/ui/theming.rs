// SPDX-License-Identifier: MPL-2.0
//! Light/dark color schemes for the previewed form.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::Deserialize;

/// Color roles of the sign-in card that depend on the light/dark flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    // Card surface
    pub card_background: Color,
    pub card_text: Color,

    // Fields
    pub label_text: Color,
    pub input_background: Color,
    pub input_border: Color,

    // Secondary content
    pub divider_text: Color,
    pub secondary_border: Color,
    pub secondary_text: Color,
    pub footer_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            card_background: palette::WHITE,
            card_text: palette::GRAY_900,

            label_text: palette::GRAY_600,
            input_background: palette::WHITE,
            input_border: palette::GRAY_300,

            divider_text: palette::GRAY_500,
            secondary_border: palette::GRAY_300,
            secondary_text: palette::GRAY_900,
            footer_text: palette::GRAY_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            card_background: palette::GRAY_800,
            card_text: palette::WHITE,

            label_text: palette::GRAY_300,
            input_background: palette::GRAY_700,
            input_border: palette::GRAY_600,

            divider_text: palette::GRAY_400,
            secondary_border: palette::GRAY_600,
            secondary_text: palette::GRAY_300,
            footer_text: palette::GRAY_400,
        }
    }

    #[must_use]
    pub fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Initial mode requested by the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => {
                // Detect system theme; default to dark on detection error
                !matches!(dark_light::detect(), Ok(dark_light::Mode::Light))
            }
        }
    }
}

/// Iced theme of the window chrome around the form.
#[must_use]
pub fn window_theme(dark: bool) -> Theme {
    if dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}
