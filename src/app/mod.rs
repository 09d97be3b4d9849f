// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the selector and the form.
//!
//! The `App` struct owns the single [`ThemeSelection`] of the window. The
//! selector is the only writer; the form preview is re-derived from the
//! selection on every view pass.

mod message;
pub mod paths;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::config::{WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH};
use crate::ui::login_form::{FormCopy, FormStyle};
use crate::ui::selection::ThemeSelection;
use crate::ui::theme_selector;
use crate::ui::theming;
use iced::{window, Element, Task, Theme};
use std::path::PathBuf;

/// Root Iced application state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct App {
    selection: ThemeSelection,
    copy: FormCopy,
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads the config file and applies the command-line overrides on top.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.as_ref().map(PathBuf::from);
        if let Some(path) = config::config_path(config_dir.clone()) {
            tracing::info!(path = %path.display(), "loading configuration");
        }

        let (config, config_warning) = config::load(config_dir);
        if let Some(err) = config_warning {
            tracing::warn!(error = %err, "configuration ignored, using defaults");
        }

        let app = Self::with_config(&config, &flags);
        tracing::info!(
            font = %app.selection.font(),
            accent = %app.selection.accent(),
            radius = %app.selection.radius(),
            dark = app.selection.is_dark(),
            "initial selection"
        );

        (app, Task::none())
    }

    /// Builds the state from an already loaded config. Flags win over the file.
    #[must_use]
    pub fn with_config(config: &Config, flags: &Flags) -> Self {
        let base = config.initial_selection();
        let selection = ThemeSelection::new(
            flags.font.unwrap_or(base.font()),
            flags.accent.unwrap_or(base.accent()),
            flags.radius.unwrap_or(base.radius()),
            flags.dark.unwrap_or(base.is_dark()),
        );

        Self {
            selection,
            copy: config.form_copy(),
        }
    }

    #[must_use]
    pub fn selection(&self) -> &ThemeSelection {
        &self.selection
    }

    #[must_use]
    pub fn copy(&self) -> &FormCopy {
        &self.copy
    }

    /// Style the form is currently rendered with.
    #[must_use]
    pub fn form_style(&self) -> FormStyle {
        FormStyle::derive(&self.selection)
    }

    pub fn title(&self) -> String {
        format!("{} Sign-in Preview", self.copy.app_name)
    }

    pub fn theme(&self) -> Theme {
        theming::window_theme(self.selection.is_dark())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Selector(message) => theme_selector::update(&mut self.selection, message),
        }
        Task::none()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            selection: &self.selection,
            copy: &self.copy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::catalog::{Accent, FontKey, RadiusKey};

    #[test]
    fn default_app_boots_with_default_selection() {
        let app = App::default();
        assert_eq!(*app.selection(), ThemeSelection::default());
        assert_eq!(app.title(), "SuperApp Sign-in Preview");
        assert!(matches!(app.theme(), Theme::Dark));
    }

    #[test]
    fn flags_override_config_values() {
        let mut config = Config::default();
        config.preview.accent = Accent::Green;
        config.preview.radius = RadiusKey::Small;

        let flags = Flags {
            accent: Some(Accent::Orange),
            dark: Some(false),
            ..Flags::default()
        };
        let app = App::with_config(&config, &flags);

        assert_eq!(app.selection().accent(), Accent::Orange);
        assert_eq!(app.selection().radius(), RadiusKey::Small);
        assert_eq!(app.selection().font(), FontKey::Default);
        assert!(!app.selection().is_dark());
    }

    #[test]
    fn update_routes_selector_messages() {
        let mut app = App::default();
        let _ = app.update(Message::Selector(theme_selector::Message::RadiusSelected(
            RadiusKey::Full,
        )));
        assert_eq!(app.selection().radius(), RadiusKey::Full);
        assert_eq!(app.form_style().radius, RadiusKey::Full.pixels());
    }

    #[test]
    fn window_theme_tracks_mode_toggle() {
        let mut app = App::default();
        let _ = app.update(theme_selector::Message::ToggleDarkMode.into());
        assert!(matches!(app.theme(), Theme::Light));
    }

    #[test]
    fn title_uses_configured_app_name() {
        let mut config = Config::default();
        config.preview.app_name = Some("Acme".to_string());
        let app = App::with_config(&config, &Flags::default());
        assert_eq!(app.title(), "Acme Sign-in Preview");
    }

    #[test]
    fn window_settings_respect_minimum_size() {
        let settings = window_settings();
        let min = settings.min_size.expect("min size set");
        assert!(settings.size.width >= min.width);
        assert!(settings.size.height >= min.height);
    }
}
