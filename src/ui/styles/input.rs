// SPDX-License-Identifier: MPL-2.0
//! Text input styles for the previewed form fields.

use crate::ui::design_tokens::{border, palette};
use iced::widget::text_input;
use iced::{Background, Border, Color, Theme};

/// Bordered form field.
///
/// Fields in the preview never receive input, so iced reports them as
/// disabled; every status is drawn identically to look like a live field.
pub fn field(
    background: Color,
    border_color: Color,
    text: Color,
    corner: f32,
) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
    move |_theme: &Theme, _status: text_input::Status| text_input::Style {
        background: Background::Color(background),
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: corner.into(),
        },
        icon: palette::GRAY_400,
        placeholder: palette::GRAY_400,
        value: text,
        selection: palette::PRIMARY_400,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::design_tokens::radius;

    #[test]
    fn field_ignores_status() {
        let style_fn = field(palette::GRAY_700, palette::GRAY_600, palette::WHITE, radius::MD);
        let active = style_fn(&Theme::Dark, text_input::Status::Active);
        let disabled = style_fn(&Theme::Dark, text_input::Status::Disabled);
        assert_eq!(active.background, disabled.background);
        assert_eq!(active.border.color, disabled.border.color);
        assert_eq!(active.border.color, palette::GRAY_600);
    }
}
