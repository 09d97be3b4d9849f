// SPDX-License-Identifier: MPL-2.0
//! Option catalogs offered by the theme selector.
//!
//! Each dimension is a closed enum: the selector iterates `ALL` to build its
//! buttons, so a value outside the catalog can never reach the selection.
//! Text (config file, command line) enters through [`FromStr`].

use crate::error::Error;
use crate::ui::design_tokens::{palette, radius};
use iced::font::Family;
use iced::{Color, Font};
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Fonts
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontKey {
    Overpass,
    Inter,
    Playfair,
    #[default]
    Default,
}

impl FontKey {
    pub const ALL: [FontKey; 4] = [
        FontKey::Overpass,
        FontKey::Inter,
        FontKey::Playfair,
        FontKey::Default,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FontKey::Overpass => "overpass",
            FontKey::Inter => "inter",
            FontKey::Playfair => "playfair",
            FontKey::Default => "default",
        }
    }

    /// Font applied to every text widget of the form.
    #[must_use]
    pub fn font(self) -> Font {
        match self {
            FontKey::Overpass => Font {
                family: Family::SansSerif,
                ..Font::DEFAULT
            },
            FontKey::Inter => Font::MONOSPACE,
            FontKey::Playfair => Font {
                family: Family::Serif,
                ..Font::DEFAULT
            },
            FontKey::Default => Font::DEFAULT,
        }
    }
}

// =============================================================================
// Accent colors
// =============================================================================

/// Resting and hover shade of an accent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccentPair {
    pub base: Color,
    pub hover: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Blue,
    Purple,
    Orange,
    Green,
    Yellow,
}

impl Accent {
    /// Catalog order. The first entry is the boot default.
    pub const ALL: [Accent; 5] = [
        Accent::Blue,
        Accent::Purple,
        Accent::Orange,
        Accent::Green,
        Accent::Yellow,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Accent::Blue => "blue",
            Accent::Purple => "purple",
            Accent::Orange => "orange",
            Accent::Green => "green",
            Accent::Yellow => "yellow",
        }
    }

    #[must_use]
    pub fn pair(self) -> AccentPair {
        let (base, hover) = match self {
            Accent::Blue => (palette::BLUE_500, palette::BLUE_600),
            Accent::Purple => (palette::PURPLE_500, palette::PURPLE_600),
            Accent::Orange => (palette::ORANGE_500, palette::ORANGE_600),
            Accent::Green => (palette::GREEN_500, palette::GREEN_600),
            Accent::Yellow => (palette::YELLOW_500, palette::YELLOW_600),
        };
        AccentPair { base, hover }
    }
}

// =============================================================================
// Corner radius
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadiusKey {
    #[default]
    None,
    Small,
    Medium,
    Large,
    Full,
}

impl RadiusKey {
    pub const ALL: [RadiusKey; 5] = [
        RadiusKey::None,
        RadiusKey::Small,
        RadiusKey::Medium,
        RadiusKey::Large,
        RadiusKey::Full,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RadiusKey::None => "none",
            RadiusKey::Small => "small",
            RadiusKey::Medium => "medium",
            RadiusKey::Large => "large",
            RadiusKey::Full => "full",
        }
    }

    #[must_use]
    pub fn pixels(self) -> f32 {
        match self {
            RadiusKey::None => radius::NONE,
            RadiusKey::Small => radius::SM,
            RadiusKey::Medium => radius::MD,
            RadiusKey::Large => radius::LG,
            RadiusKey::Full => radius::FULL,
        }
    }
}

// =============================================================================
// Text boundary
// =============================================================================

macro_rules! impl_catalog_text {
    ($ty:ty, $catalog:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                <$ty>::ALL
                    .into_iter()
                    .find(|key| key.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| Error::unknown_option($catalog, s))
            }
        }
    };
}

impl_catalog_text!(FontKey, "font");
impl_catalog_text!(Accent, "accent");
impl_catalog_text!(RadiusKey, "radius");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_parses_back_from_its_name() {
        for key in FontKey::ALL {
            assert_eq!(key.as_str().parse::<FontKey>(), Ok(key));
        }
        for key in Accent::ALL {
            assert_eq!(key.as_str().parse::<Accent>(), Ok(key));
        }
        for key in RadiusKey::ALL {
            assert_eq!(key.as_str().parse::<RadiusKey>(), Ok(key));
        }
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(" Playfair ".parse::<FontKey>(), Ok(FontKey::Playfair));
        assert_eq!("GREEN".parse::<Accent>(), Ok(Accent::Green));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "xl".parse::<RadiusKey>().unwrap_err();
        assert_eq!(
            err,
            Error::UnknownOption {
                catalog: "radius",
                value: "xl".to_string()
            }
        );
    }

    #[test]
    fn first_accent_is_the_default() {
        assert_eq!(Accent::ALL[0], Accent::default());
        assert_eq!(Accent::Blue.pair().base, palette::BLUE_500);
        assert_eq!(Accent::Blue.pair().hover, palette::BLUE_600);
    }

    #[test]
    fn font_catalog_maps_to_generic_families() {
        assert_eq!(FontKey::Inter.font(), Font::MONOSPACE);
        assert_eq!(FontKey::Playfair.font().family, Family::Serif);
        assert_eq!(FontKey::Overpass.font().family, Family::SansSerif);
        assert_eq!(FontKey::Default.font(), Font::DEFAULT);
    }

    #[test]
    fn radius_catalog_grows_monotonically() {
        let pixels: Vec<f32> = RadiusKey::ALL.iter().map(|key| key.pixels()).collect();
        assert!(pixels.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn accents_are_distinct() {
        for (i, a) in Accent::ALL.iter().enumerate() {
            for b in &Accent::ALL[i + 1..] {
                assert_ne!(a.pair(), b.pair());
            }
        }
    }

    #[test]
    fn keys_round_trip_through_toml_names() {
        #[derive(Deserialize)]
        struct Probe {
            font: FontKey,
            radius: RadiusKey,
        }
        let probe: Probe = toml::from_str("font = \"inter\"\nradius = \"full\"").unwrap();
        assert_eq!(probe.font, FontKey::Inter);
        assert_eq!(probe.radius, RadiusKey::Full);
    }
}
