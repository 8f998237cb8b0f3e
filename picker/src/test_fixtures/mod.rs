// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Fixtures shared by unit tests and the integration tests in `tests/`.

// Attach sources.
pub mod diagnostic_capture;
pub mod sample_projects;
pub mod temp_dir;

// Re-export.
pub use diagnostic_capture::*;
pub use sample_projects::*;
pub use temp_dir::*;
