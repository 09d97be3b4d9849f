// SPDX-License-Identifier: MPL-2.0
//! Theme selector panel.
//!
//! One toggle group per theme dimension. Buttons are generated from the
//! option catalogs, so a selection outside a catalog cannot be produced here.

use crate::ui::catalog::{Accent, FontKey, RadiusKey};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::selection::ThemeSelection;
use crate::ui::styles;
use crate::ui::styles::button as button_styles;
use iced::alignment::Vertical;
use iced::font::{self, Font};
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

/// Contextual data needed to render the selector.
pub struct ViewContext<'a> {
    pub selection: &'a ThemeSelection,
}

/// Messages emitted by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    FontSelected(FontKey),
    AccentSelected(Accent),
    RadiusSelected(RadiusKey),
    ToggleDarkMode,
}

/// Glyph shown on the mode toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeIcon {
    Sun,
    Moon,
}

/// Label and icon of the mode toggle: it names the mode a press switches to.
#[must_use]
pub fn mode_toggle(dark: bool) -> (&'static str, ModeIcon) {
    if dark {
        ("Light", ModeIcon::Sun)
    } else {
        ("Dark", ModeIcon::Moon)
    }
}

/// Apply a selector message. Exactly one dimension changes.
pub fn update(selection: &mut ThemeSelection, message: Message) {
    match message {
        Message::FontSelected(font) => {
            tracing::debug!(font = %font, "font selected");
            selection.set_font(font);
        }
        Message::AccentSelected(accent) => {
            tracing::debug!(accent = %accent, "accent selected");
            selection.set_accent(accent);
        }
        Message::RadiusSelected(radius) => {
            tracing::debug!(radius = %radius, "radius selected");
            selection.set_radius(radius);
        }
        Message::ToggleDarkMode => {
            selection.toggle_dark();
            tracing::debug!(dark = selection.is_dark(), "mode toggled");
        }
    }
}

/// Render the selector panel.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let selection = ctx.selection;

    let fonts = FontKey::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, key| {
            row.push(option_button(
                key.as_str(),
                key == selection.font(),
                Message::FontSelected(key),
            ))
        });

    let accents = Accent::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |row, accent| {
            row.push(swatch_button(accent, accent == selection.accent()))
        });

    let radii = RadiusKey::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XXS), |row, key| {
            row.push(option_button(
                key.as_str(),
                key == selection.radius(),
                Message::RadiusSelected(key),
            ))
        });

    let content = Column::new()
        .spacing(spacing::MD)
        .width(Length::Fill)
        .push(
            text("Customize")
                .size(typography::TITLE_MD)
                .font(Font {
                    weight: font::Weight::Bold,
                    ..Font::DEFAULT
                }),
        )
        .push(section("Font", fonts))
        .push(section("Accent", accents))
        .push(section("Corners", radii))
        .push(section("Mode", mode_button(selection.is_dark())));

    container(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::SELECTOR_WIDTH))
        .style(styles::container::panel)
        .into()
}

fn section<'a>(title: &'a str, control: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(title).size(typography::TITLE_SM))
        .push(control)
        .into()
}

fn option_button(label: &'static str, is_selected: bool, message: Message) -> Element<'static, Message> {
    button(text(label).size(typography::CAPTION))
        .on_press(message)
        .padding([spacing::XXS, spacing::XS])
        .style(if is_selected {
            button_styles::selected
        } else {
            button_styles::unselected
        })
        .into()
}

fn swatch_button(accent: Accent, is_selected: bool) -> Element<'static, Message> {
    button(text(""))
        .on_press(Message::AccentSelected(accent))
        .width(Length::Fixed(sizing::SELECTOR_SWATCH))
        .height(Length::Fixed(sizing::SELECTOR_SWATCH))
        .style(button_styles::swatch(accent.pair().base, is_selected))
        .into()
}

fn mode_button(dark: bool) -> Element<'static, Message> {
    let (label, icon) = mode_toggle(dark);
    let glyph = match icon {
        ModeIcon::Sun => icons::sun(),
        ModeIcon::Moon => icons::moon(),
    };
    // The window theme follows the same flag, so match the button text color.
    let tint = if dark { palette::WHITE } else { palette::GRAY_900 };
    let glyph = icons::tinted(icons::sized(glyph, sizing::ICON_SM), tint);

    let row = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(glyph)
        .push(text(label).size(typography::BODY_SM));

    button(row)
        .on_press(Message::ToggleDarkMode)
        .padding([spacing::XXS, spacing::SM])
        .style(button_styles::unselected)
        .into()
}
