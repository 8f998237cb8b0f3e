// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod ordering;
pub mod selection_controller;
pub mod selection_error;
pub mod selection_mode;
pub mod selection_set;
pub mod toggle;

// Re-export.
pub use ordering::*;
pub use selection_controller::*;
pub use selection_error::*;
pub use selection_mode::*;
pub use selection_set::*;
pub use toggle::*;
