// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.
//!
//! `selected` / `unselected` drive the selector toggle groups. The remaining
//! builders style the previewed form and take their colors from the derived
//! form style rather than from the iced `Theme`.

use crate::ui::catalog::AccentPair;
use crate::ui::design_tokens::{
    border,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for selected/active button state.
/// Uses app's brand colors for consistent appearance across light/dark themes.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for unselected button state.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    match status {
        button::Status::Hovered => {
            let hover_bg = if is_light {
                palette::GRAY_300
            } else {
                palette::GRAY_600
            };
            button::Style {
                background: Some(Background::Color(hover_bg)),
                text_color,
                border: Border {
                    color: palette::PRIMARY_500,
                    width: border::WIDTH_SM,
                    radius: radius::SM.into(),
                },
                shadow: shadow::SM,
                snap: true,
            }
        }
        _ => button::Style {
            background: Some(Background::Color(bg_color)),
            text_color,
            border: Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Accent swatch in the selector. The active swatch gets a thick ring.
pub fn swatch(color: Color, is_selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ring = if matches!(theme, Theme::Light) {
            palette::GRAY_900
        } else {
            WHITE
        };
        let border = match (is_selected, status) {
            (true, _) => Border {
                color: ring,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            (false, button::Status::Hovered) => Border {
                color: palette::GRAY_400,
                width: border::WIDTH_SM,
                radius: radius::FULL.into(),
            },
            (false, _) => Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
        };

        button::Style {
            background: Some(Background::Color(color)),
            text_color: WHITE,
            border,
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Primary submit action of the form, painted with the selected accent.
///
/// The form never attaches a press handler, so iced reports the button as
/// disabled; it is drawn with the resting shade in that case.
pub fn accent(pair: AccentPair, corner: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => pair.hover,
            button::Status::Active | button::Status::Disabled => pair.base,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: corner.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Bordered "continue with provider" action.
pub fn outlined(
    border_color: Color,
    text_color: Color,
    corner: f32,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Text-only link ("Sign up").
pub fn link(color: Color) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: None,
        text_color: color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::Accent;

    #[test]
    fn selected_button_uses_brand_colors() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn unselected_differs_between_themes() {
        let light = unselected(&Theme::Light, button::Status::Active);
        let dark = unselected(&Theme::Dark, button::Status::Active);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn accent_button_switches_to_hover_shade() {
        let pair = Accent::Purple.pair();
        let style_fn = accent(pair, radius::MD);

        let resting = style_fn(&Theme::Dark, button::Status::Active);
        let hovered = style_fn(&Theme::Dark, button::Status::Hovered);
        let inert = style_fn(&Theme::Dark, button::Status::Disabled);

        assert_eq!(resting.background, Some(Background::Color(pair.base)));
        assert_eq!(hovered.background, Some(Background::Color(pair.hover)));
        assert_eq!(inert.background, resting.background);
        assert_eq!(resting.text_color, WHITE);
    }

    #[test]
    fn swatch_marks_selection_with_ring() {
        let color = Accent::Green.pair().base;
        let active = swatch(color, true)(&Theme::Dark, button::Status::Active);
        let idle = swatch(color, false)(&Theme::Dark, button::Status::Active);
        assert_eq!(active.border.width, border::WIDTH_MD);
        assert_eq!(idle.border.width, 0.0);
    }
}
