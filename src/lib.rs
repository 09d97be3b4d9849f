// SPDX-License-Identifier: MPL-2.0
//! `iced_login` previews a sign-in form whose typography, accent color, corner
//! radius and light/dark mode are picked live from a side panel.
//!
//! The form itself is a pure function of the current selection: it holds no
//! state and emits no messages.

pub mod app;
pub mod config;
pub mod error;
pub mod icon;
pub mod ui;
