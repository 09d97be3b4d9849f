// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

use iced::border::Radius;
use iced::widget::{button, text_input};
use iced::{Background, Theme};
use iced_login::ui::catalog::{Accent, RadiusKey};
use iced_login::ui::design_tokens::{palette, sizing, spacing};
use iced_login::ui::login_form::FormStyle;
use iced_login::ui::selection::ThemeSelection;
use iced_login::ui::styles;

const STATUSES: [button::Status; 4] = [
    button::Status::Active,
    button::Status::Hovered,
    button::Status::Pressed,
    button::Status::Disabled,
];

#[test]
fn selector_styles_are_callable_in_both_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        for status in STATUSES {
            let _ = styles::button::selected(&theme, status);
            let _ = styles::button::unselected(&theme, status);
        }
        let _ = styles::container::panel(&theme);
    }
}

#[test]
fn accent_button_keeps_selected_radius_in_every_status() {
    for key in RadiusKey::ALL {
        let style = styles::button::accent(Accent::Blue.pair(), key.pixels());
        for status in STATUSES {
            assert_eq!(
                style(&Theme::Dark, status).border.radius,
                Radius::from(key.pixels())
            );
        }
    }
}

#[test]
fn inert_accent_button_shows_base_color() {
    for accent in Accent::ALL {
        let pair = accent.pair();
        let style = styles::button::accent(pair, 0.0);
        assert_eq!(
            style(&Theme::Dark, button::Status::Disabled).background,
            Some(Background::Color(pair.base))
        );
        assert_eq!(
            style(&Theme::Dark, button::Status::Hovered).background,
            Some(Background::Color(pair.hover))
        );
    }
}

#[test]
fn inert_fields_look_like_active_ones() {
    let form = FormStyle::derive(&ThemeSelection::default());
    let style = styles::input::field(
        form.input_background,
        form.input_border,
        form.card_text,
        form.radius,
    );
    let active = style(&Theme::Dark, text_input::Status::Active);
    let disabled = style(&Theme::Dark, text_input::Status::Disabled);
    assert_eq!(active.background, disabled.background);
    assert_eq!(active.border.color, disabled.border.color);
    assert_eq!(active.value, disabled.value);
}

#[test]
fn design_tokens_are_coherent() {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::LG < spacing::XL);
    assert!(sizing::SELECTOR_SWATCH < sizing::BRAND_SWATCH);
    assert!(sizing::SELECTOR_WIDTH < sizing::FORM_WIDTH);
    assert_eq!(palette::PRIMARY_500, Accent::ALL[0].pair().base);
}
