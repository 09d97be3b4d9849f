// SPDX-License-Identifier: MPL-2.0
//! In-memory theme selection owned by the preview window.

use crate::ui::catalog::{Accent, FontKey, RadiusKey};

/// Current font, accent, radius and mode choices.
///
/// Lives for as long as the window does and is never written to disk.
/// Every setter touches exactly one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeSelection {
    font: FontKey,
    accent: Accent,
    radius: RadiusKey,
    dark: bool,
}

impl Default for ThemeSelection {
    fn default() -> Self {
        Self {
            font: FontKey::Default,
            accent: Accent::ALL[0],
            radius: RadiusKey::None,
            dark: true,
        }
    }
}

impl ThemeSelection {
    #[must_use]
    pub fn new(font: FontKey, accent: Accent, radius: RadiusKey, dark: bool) -> Self {
        Self {
            font,
            accent,
            radius,
            dark,
        }
    }

    #[must_use]
    pub fn font(&self) -> FontKey {
        self.font
    }

    #[must_use]
    pub fn accent(&self) -> Accent {
        self.accent
    }

    #[must_use]
    pub fn radius(&self) -> RadiusKey {
        self.radius
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn set_font(&mut self, font: FontKey) {
        self.font = font;
    }

    pub fn set_accent(&mut self, accent: Accent) {
        self.accent = accent;
    }

    pub fn set_radius(&mut self, radius: RadiusKey) {
        self.radius = radius;
    }

    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    pub fn toggle_dark(&mut self) {
        self.dark = !self.dark;
    }
}
