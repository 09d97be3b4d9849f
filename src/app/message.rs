// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::catalog::{Accent, FontKey, RadiusKey};
use crate::ui::theme_selector;
use std::str::FromStr;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Selector(theme_selector::Message),
}

impl From<theme_selector::Message> for Message {
    fn from(message: theme_selector::Message) -> Self {
        Message::Selector(message)
    }
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
///
/// Selection flags take precedence over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LOGIN_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub font: Option<FontKey>,
    pub accent: Option<Accent>,
    pub radius: Option<RadiusKey>,
    /// `Some(true)` for `--dark`, `Some(false)` for `--light`.
    pub dark: Option<bool>,
}

impl Flags {
    /// Reads flags from parsed arguments.
    ///
    /// Malformed values do not abort startup: they are returned alongside the
    /// flags so the caller can report them, and the matching flag stays unset.
    pub fn from_args(mut args: pico_args::Arguments) -> (Self, Vec<Error>) {
        let mut rejected = Vec::new();

        let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            rejected.push(Error::Config(err.to_string()));
            None
        });
        let font = catalog_flag(&mut args, "--font", &mut rejected);
        let accent = catalog_flag(&mut args, "--accent", &mut rejected);
        let radius = catalog_flag(&mut args, "--radius", &mut rejected);

        let light = args.contains("--light");
        let dark = args.contains("--dark");
        let dark = match (light, dark) {
            (true, false) => Some(false),
            (false, true) => Some(true),
            (true, true) => {
                rejected.push(Error::Config(
                    "--light and --dark are mutually exclusive".to_string(),
                ));
                None
            }
            (false, false) => None,
        };

        for extra in args.finish() {
            rejected.push(Error::Config(format!(
                "unexpected argument: {}",
                extra.to_string_lossy()
            )));
        }

        (
            Self {
                config_dir,
                font,
                accent,
                radius,
                dark,
            },
            rejected,
        )
    }
}

fn catalog_flag<T>(
    args: &mut pico_args::Arguments,
    key: &'static str,
    rejected: &mut Vec<Error>,
) -> Option<T>
where
    T: FromStr<Err = Error>,
{
    let raw: Option<String> = match args.opt_value_from_str(key) {
        Ok(raw) => raw,
        Err(err) => {
            rejected.push(Error::Config(err.to_string()));
            return None;
        }
    };

    match raw?.parse() {
        Ok(value) => Some(value),
        Err(err) => {
            rejected.push(err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> (Flags, Vec<Error>) {
        let args = args.iter().map(OsString::from).collect();
        Flags::from_args(pico_args::Arguments::from_vec(args))
    }

    #[test]
    fn no_arguments_gives_empty_flags() {
        let (flags, rejected) = parse(&[]);
        assert_eq!(flags, Flags::default());
        assert!(rejected.is_empty());
    }

    #[test]
    fn selection_flags_are_parsed() {
        let (flags, rejected) = parse(&[
            "--font",
            "inter",
            "--accent",
            "purple",
            "--radius",
            "large",
            "--light",
            "--config-dir",
            "/tmp/login",
        ]);
        assert!(rejected.is_empty());
        assert_eq!(flags.font, Some(FontKey::Inter));
        assert_eq!(flags.accent, Some(Accent::Purple));
        assert_eq!(flags.radius, Some(RadiusKey::Large));
        assert_eq!(flags.dark, Some(false));
        assert_eq!(flags.config_dir.as_deref(), Some("/tmp/login"));
    }

    #[test]
    fn unknown_key_is_rejected_and_ignored() {
        let (flags, rejected) = parse(&["--accent", "magenta", "--dark"]);
        assert_eq!(flags.accent, None);
        assert_eq!(flags.dark, Some(true));
        assert_eq!(
            rejected,
            vec![Error::UnknownOption {
                catalog: "accent",
                value: "magenta".to_string()
            }]
        );
    }

    #[test]
    fn conflicting_mode_flags_are_rejected() {
        let (flags, rejected) = parse(&["--light", "--dark"]);
        assert_eq!(flags.dark, None);
        assert_eq!(rejected.len(), 1);
    }

    #[test]
    fn stray_arguments_are_reported() {
        let (_, rejected) = parse(&["login.toml"]);
        assert!(matches!(&rejected[..], [Error::Config(msg)] if msg.contains("login.toml")));
    }
}
