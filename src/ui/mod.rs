// SPDX-License-Identifier: MPL-2.0
//! User interface components following the Elm-style "state down, messages up"
//! pattern.
//!
//! # Components
//!
//! - [`theme_selector`] - Panel that edits the [`selection::ThemeSelection`]
//! - [`login_form`] - Stateless sign-in card rendered from a style record
//!
//! # Shared Infrastructure
//!
//! - [`catalog`] - Font, accent and radius option catalogs
//! - [`styles`] - Centralized styling (buttons, containers, inputs)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/dark color schemes
//! - [`icons`] - SVG icon loading and rendering

pub mod catalog;
pub mod design_tokens;
pub mod icons;
pub mod login_form;
pub mod selection;
pub mod styles;
pub mod theme_selector;
pub mod theming;
