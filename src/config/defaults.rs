// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and window constants.

use crate::ui::catalog::{Accent, FontKey, RadiusKey};

// ==========================================================================
// Preview Defaults
// ==========================================================================

/// Font key selected at boot.
pub const DEFAULT_FONT: FontKey = FontKey::Default;

/// Accent selected at boot: the first entry of the catalog.
pub const DEFAULT_ACCENT: Accent = Accent::ALL[0];

/// Radius key selected at boot.
pub const DEFAULT_RADIUS: RadiusKey = RadiusKey::None;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_WINDOW_WIDTH > 0);
    assert!(MIN_WINDOW_HEIGHT > 0);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
