// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the selector chrome and the previewed form.

pub mod button;
pub mod container;
pub mod input;
