// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step, size and radius used by the preview window.

## Organization

- **Palette**: Base colors (gray scale and the accent hues offered by the selector)
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_login::ui::design_tokens::{palette, spacing};

let surface = palette::GRAY_800;
let padding = spacing::XL; // 32px
assert!(padding > spacing::MD);
assert!(surface.r < 0.5);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Gray scale
    pub const GRAY_100: Color = Color::from_rgb(0.953, 0.957, 0.965); // #f3f4f6
    pub const GRAY_300: Color = Color::from_rgb(0.820, 0.835, 0.859); // #d1d5db
    pub const GRAY_400: Color = Color::from_rgb(0.612, 0.639, 0.686); // #9ca3af
    pub const GRAY_500: Color = Color::from_rgb(0.420, 0.447, 0.502); // #6b7280
    pub const GRAY_600: Color = Color::from_rgb(0.294, 0.333, 0.388); // #4b5563
    pub const GRAY_700: Color = Color::from_rgb(0.216, 0.255, 0.318); // #374151
    pub const GRAY_800: Color = Color::from_rgb(0.122, 0.161, 0.216); // #1f2937
    pub const GRAY_900: Color = Color::from_rgb(0.067, 0.094, 0.153); // #111827

    // Accent hues (500 = resting, 600 = hover)
    pub const BLUE_500: Color = Color::from_rgb(0.231, 0.510, 0.965); // #3b82f6
    pub const BLUE_600: Color = Color::from_rgb(0.145, 0.388, 0.922); // #2563eb
    pub const PURPLE_500: Color = Color::from_rgb(0.659, 0.333, 0.969); // #a855f7
    pub const PURPLE_600: Color = Color::from_rgb(0.576, 0.200, 0.918); // #9333ea
    pub const ORANGE_500: Color = Color::from_rgb(0.976, 0.451, 0.086); // #f97316
    pub const ORANGE_600: Color = Color::from_rgb(0.918, 0.345, 0.047); // #ea580c
    pub const GREEN_500: Color = Color::from_rgb(0.133, 0.773, 0.369); // #22c55e
    pub const GREEN_600: Color = Color::from_rgb(0.086, 0.639, 0.290); // #16a34a
    pub const YELLOW_500: Color = Color::from_rgb(0.918, 0.702, 0.031); // #eab308
    pub const YELLOW_600: Color = Color::from_rgb(0.792, 0.541, 0.016); // #ca8a04

    /// Brand color of the selector chrome, independent of the previewed accent.
    pub const PRIMARY_500: Color = BLUE_500;
    pub const PRIMARY_600: Color = BLUE_600;
    pub const PRIMARY_400: Color = Color::from_rgb(0.376, 0.647, 0.980); // #60a5fa
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Surface background - Semi-transparent panels and containers
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 20.0;

    /// Side of the accent block in the form header.
    pub const BRAND_SWATCH: f32 = 32.0;

    /// Side of an accent swatch in the selector panel.
    pub const SELECTOR_SWATCH: f32 = 24.0;

    pub const FORM_WIDTH: f32 = 400.0;
    pub const SELECTOR_WIDTH: f32 = 300.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Form heading ("Sign in to ...").
    pub const TITLE_LG: f32 = 24.0;

    /// App name next to the brand swatch.
    pub const TITLE_MD: f32 = 20.0;

    /// Selector section headers.
    pub const TITLE_SM: f32 = 16.0;

    /// Inputs and buttons.
    pub const BODY: f32 = 16.0;

    /// Labels, divider and footer.
    pub const BODY_SM: f32 = 14.0;

    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 6.0;
    pub const LG: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.25,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(radius::SM > radius::NONE);
    assert!(radius::MD > radius::SM);
    assert!(radius::LG > radius::MD);
    assert!(radius::FULL > radius::LG);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(sizing::BRAND_SWATCH > sizing::SELECTOR_SWATCH);
    assert!(border::WIDTH_MD > border::WIDTH_SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::XL, spacing::MD * 2.0);
    }

    #[test]
    fn hover_shades_are_darker_than_resting_shades() {
        let pairs = [
            (palette::BLUE_500, palette::BLUE_600),
            (palette::PURPLE_500, palette::PURPLE_600),
            (palette::ORANGE_500, palette::ORANGE_600),
            (palette::GREEN_500, palette::GREEN_600),
            (palette::YELLOW_500, palette::YELLOW_600),
        ];
        for (resting, hover) in pairs {
            assert!(resting.r + resting.g + resting.b > hover.r + hover.g + hover.b);
        }
    }
}
