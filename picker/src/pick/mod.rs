// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The `pick` command: load a [`SelectorInput`] document, replay toggles against it,
//! and print the resulting menu.

// Attach sources.
pub mod cli_arg;
pub mod pick_error;
pub mod run_pick;
pub mod selector_input;
pub mod ui_templates;

// Re-export.
pub use cli_arg::*;
pub use pick_error::*;
pub use run_pick::*;
pub use selector_input::*;
