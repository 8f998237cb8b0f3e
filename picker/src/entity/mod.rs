// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod organization;
pub mod project;
pub mod selectable_entity;

// Re-export.
pub use organization::*;
pub use project::*;
pub use selectable_entity::*;
