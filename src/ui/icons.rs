// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. The sources are single-color glyphs; callers tint
//! them with [`tinted`] so the same asset works on light and dark surfaces.
//!
//! # Naming Convention
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context (e.g., `sun` not `switch_to_light`).

use iced::widget::svg::{self, Handle, Svg};
use iced::{Color, Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
/// The handle is created once on first access and reused thereafter.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(sun, "sun.svg", "Sun icon: circle with rays.");
define_icon!(moon, "moon.svg", "Moon icon: crescent.");
define_icon!(google, "google.svg", "Google \"G\" mark.");

/// Sizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paints every shape of the icon with `color`.
pub fn tinted(icon: Svg<'_>, color: Color) -> Svg<'_> {
    icon.style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icons_are_embedded() {
        let _ = sized(sun(), 16.0);
        let _ = tinted(moon(), Color::WHITE);
        let _ = google();
    }
}
