// SPDX-License-Identifier: MPL-2.0
//! Sign-in form renderer.
//!
//! The form is a pure function of a [`FormStyle`], itself derived from the
//! current [`ThemeSelection`]. Nothing in the form is wired: inputs have no
//! input handler and buttons have no press handler, which is why [`view`]
//! is generic over a message type it never produces.

use crate::ui::catalog::AccentPair;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::selection::ThemeSelection;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::{Horizontal, Vertical};
use iced::font::{self, Font};
use iced::widget::{button, container, text, text_input, Column, Row};
use iced::{Color, Element, Length};

/// Default brand shown in the header and heading.
pub const DEFAULT_APP_NAME: &str = "SuperApp";

/// Default external identity provider on the secondary action.
pub const DEFAULT_PROVIDER_NAME: &str = "Google";

/// Every visual value the form reads, resolved from a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormStyle {
    pub font: Font,
    /// Corner radius of the inputs, both buttons and the header swatch.
    pub radius: f32,
    /// Submit button, header swatch and sign-up link.
    pub accent: AccentPair,
    pub card_background: Color,
    pub card_text: Color,
    pub label_text: Color,
    pub input_background: Color,
    pub input_border: Color,
    pub divider_text: Color,
    pub secondary_border: Color,
    pub secondary_text: Color,
    pub footer_text: Color,
}

impl FormStyle {
    #[must_use]
    pub fn derive(selection: &ThemeSelection) -> Self {
        let scheme = ColorScheme::for_mode(selection.is_dark());

        Self {
            font: selection.font().font(),
            radius: selection.radius().pixels(),
            accent: selection.accent().pair(),
            card_background: scheme.card_background,
            card_text: scheme.card_text,
            label_text: scheme.label_text,
            input_background: scheme.input_background,
            input_border: scheme.input_border,
            divider_text: scheme.divider_text,
            secondary_border: scheme.secondary_border,
            secondary_text: scheme.secondary_text,
            footer_text: scheme.footer_text,
        }
    }

    fn weighted(&self, weight: font::Weight) -> Font {
        Font {
            weight,
            ..self.font
        }
    }
}

impl From<&ThemeSelection> for FormStyle {
    fn from(selection: &ThemeSelection) -> Self {
        Self::derive(selection)
    }
}

/// Static strings of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormCopy {
    pub app_name: String,
    pub provider_name: String,
}

impl Default for FormCopy {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            provider_name: DEFAULT_PROVIDER_NAME.to_string(),
        }
    }
}

/// Render the sign-in card.
pub fn view<'a, M: Clone + 'a>(style: &FormStyle, copy: &'a FormCopy) -> Element<'a, M> {
    let style = *style;

    let content = Column::new()
        .width(Length::Fill)
        .push(header(&style, copy))
        .push(spacer(spacing::LG))
        .push(
            text(format!("Sign in to {}", copy.app_name))
                .font(style.weighted(font::Weight::Bold))
                .size(typography::TITLE_LG)
                .color(style.card_text),
        )
        .push(spacer(spacing::LG))
        .push(field(&style, "Email", "Your email address", false))
        .push(spacer(spacing::MD))
        .push(field(&style, "Password", "Enter your password", true))
        .push(spacer(spacing::LG))
        .push(submit_button(&style))
        .push(spacer(spacing::MD))
        .push(
            text("OR")
                .font(style.font)
                .size(typography::BODY_SM)
                .color(style.divider_text)
                .width(Length::Fill)
                .center(),
        )
        .push(spacer(spacing::MD))
        .push(provider_button(&style, copy))
        .push(spacer(spacing::LG))
        .push(footer(&style));

    container(content)
        .padding(spacing::XL)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .style(styles::container::card(style.card_background, style.card_text))
        .into()
}

/// Brand swatch followed by the app name.
fn header<'a, M: Clone + 'a>(style: &FormStyle, copy: &'a FormCopy) -> Element<'a, M> {
    let swatch = container(Column::new())
        .width(Length::Fixed(sizing::BRAND_SWATCH))
        .height(Length::Fixed(sizing::BRAND_SWATCH))
        .style(styles::container::swatch(style.accent.base, style.radius));

    Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(swatch)
        .push(
            text(copy.app_name.as_str())
                .font(style.weighted(font::Weight::Bold))
                .size(typography::TITLE_MD)
                .color(style.card_text),
        )
        .into()
}

/// Label above an inert text field.
fn field<'a, M: Clone + 'a>(
    style: &FormStyle,
    label: &'a str,
    placeholder: &'a str,
    secure: bool,
) -> Element<'a, M> {
    let input = text_input(placeholder, "")
        .secure(secure)
        .font(style.font)
        .size(typography::BODY)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(styles::input::field(
            style.input_background,
            style.input_border,
            style.card_text,
            style.radius,
        ));

    Column::new()
        .spacing(spacing::XS)
        .push(
            text(label)
                .font(style.weighted(font::Weight::Medium))
                .size(typography::BODY_SM)
                .color(style.label_text),
        )
        .push(input)
        .into()
}

fn submit_button<'a, M: Clone + 'a>(style: &FormStyle) -> Element<'a, M> {
    button(
        text("Continue")
            .font(style.font)
            .size(typography::BODY)
            .width(Length::Fill)
            .center(),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::accent(style.accent, style.radius))
    .into()
}

fn provider_button<'a, M: Clone + 'a>(style: &FormStyle, copy: &'a FormCopy) -> Element<'a, M> {
    let icon = icons::tinted(
        icons::sized(icons::google(), sizing::ICON_SM),
        style.secondary_text,
    );

    let label = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(icon)
        .push(
            text(format!("Continue with {}", copy.provider_name))
                .font(style.font)
                .size(typography::BODY),
        );

    button(
        container(label)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .padding([spacing::XS, spacing::MD])
    .style(styles::button::outlined(
        style.secondary_border,
        style.secondary_text,
        style.radius,
    ))
    .into()
}

/// Sign-up prompt. The link has no target.
fn footer<'a, M: Clone + 'a>(style: &FormStyle) -> Element<'a, M> {
    let link = button(
        text("Sign up")
            .font(style.font)
            .size(typography::BODY_SM),
    )
    .padding(0.0)
    .style(styles::button::link(style.accent.base));

    let row = Row::new()
        .spacing(spacing::XXS)
        .align_y(Vertical::Center)
        .push(
            text("Don't have an account?")
                .font(style.font)
                .size(typography::BODY_SM)
                .color(style.footer_text),
        )
        .push(link);

    container(row)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn spacer<'a, M: 'a>(height: f32) -> Element<'a, M> {
    Column::new().height(Length::Fixed(height)).into()
}
