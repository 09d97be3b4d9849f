// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is split into the theme selector on the left and the previewed
//! sign-in card centered in the remaining space.

use super::Message;
use crate::ui::design_tokens::spacing;
use crate::ui::login_form::{self, FormCopy, FormStyle};
use crate::ui::selection::ThemeSelection;
use crate::ui::theme_selector;
use iced::widget::{Container, Row};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub selection: &'a ThemeSelection,
    pub copy: &'a FormCopy,
}

/// Renders the selector next to the form preview.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let selector = theme_selector::view(theme_selector::ViewContext {
        selection: ctx.selection,
    })
    .map(Message::Selector);

    let style = FormStyle::derive(ctx.selection);
    let preview = Container::new(login_form::view(&style, ctx.copy))
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let row = Row::new()
        .spacing(spacing::LG)
        .push(selector)
        .push(preview);

    Container::new(row)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
