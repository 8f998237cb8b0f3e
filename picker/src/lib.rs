// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # picker
//!
//! The selection logic behind a project picker dropdown, w/out the dropdown.
//!
//! 1. [`SelectionController`] orders the member and non member projects (selected
//!    first, then bookmarked, then by slug), and computes the next selection for single
//!    and multi select toggles. It never holds on to the selection, the caller owns it
//!    and passes it back in on every update.
//! 2. [`ProjectSelector`] wires the controller to the caller's `on_select` and
//!    `on_multi_select` callbacks, and derives a render ready [`SelectorMenu`].
//! 3. The `pick` binary reads a JSON [`SelectorInput`] document, replays `--toggle`
//!    operations against it, and prints the resulting menu.
//!
//! Misconfigurations (a multi select toggle on a single select picker, or a missing
//! `on_multi_select` callback) are reported as one `tracing` warning each, and change
//! nothing. Malformed data fails fast w/ a [`SelectionError`].

// Enforce strict error handling in production library code only.
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach sources.
pub mod core;
pub mod entity;
pub mod pick;
pub mod selection;
pub mod selector;
pub mod test_fixtures;

// Re-export.
pub use core::*;
pub use entity::*;
pub use pick::*;
pub use selection::*;
pub use selector::*;
