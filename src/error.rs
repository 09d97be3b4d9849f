// SPDX-License-Identifier: MPL-2.0
//! Error type shared by configuration loading and option parsing.
//!
//! Rendering and selection changes are infallible; only the text boundary
//! (config file, command line) can fail.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A textual key that is not a member of the named option catalog.
    #[error("Unknown {catalog} option: {value:?}")]
    UnknownOption {
        catalog: &'static str,
        value: String,
    },
}

impl Error {
    pub(crate) fn unknown_option(catalog: &'static str, value: &str) -> Self {
        Error::UnknownOption {
            catalog,
            value: value.to_string(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn unknown_option_names_catalog_and_value() {
        let err = Error::unknown_option("font", "comic-sans");
        assert_eq!(format!("{}", err), "Unknown font option: \"comic-sans\"");
    }

    #[test]
    fn toml_error_maps_to_config_variant() {
        let parse: std::result::Result<toml::Value, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
    }
}
