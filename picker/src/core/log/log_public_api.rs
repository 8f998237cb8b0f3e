// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

use super::TracingConfig;

/// Log to [`crate::DEFAULT_LOG_FILE_NAME`] in the current folder, for the whole
/// process. The terminal is left alone since it is used to display the menu.
///
/// # Errors
///
/// Returns an error if the log file can't be created, or logging has already been
/// initialized.
pub fn try_initialize_logging_global(level_filter: LevelFilter) -> miette::Result<()> {
    TracingConfig::new_file(None)
        .with_level_filter(level_filter)
        .install_global()
}
