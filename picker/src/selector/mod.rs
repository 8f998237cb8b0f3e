// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod interaction_event;
pub mod menu_filter;
pub mod menu_footer;
pub mod menu_model;
pub mod project_selector;
pub mod ui_str;

// Re-export.
pub use interaction_event::*;
pub use menu_filter::*;
pub use menu_footer::*;
pub use menu_model::*;
pub use project_selector::*;
