// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module is standalone, you can use it any project that uses
//! [miette](https://docs.rs/miette/latest/miette/index.html) for error handling.
//!
//! The hook is only activated at the time that the error is displayed to terminal
//! output, not when it is registered, it is lazy. So the terminal width is detected just
//! before the report is written to stderr.

use miette::MietteHandlerOpts;
use tracing::debug;

pub const DEFAULT_REPORT_WIDTH: usize = 80;

/// The [`miette::ErrorHook`] is lazily evaluated.
///
/// The terminal width will be calculated just at the time of the global error handler
/// being used. So if an error never occurs, then the terminal width will never be
/// calculated.
pub fn setup_default_miette_global_report_handler(footer: &'static str) {
    miette::set_hook(Box::new(move |_report| {
        let terminal_width = {
            let it = crossterm::terminal::size()
                .map_or(DEFAULT_REPORT_WIDTH, |(columns, _rows)| usize::from(columns));
            debug!("miette::set_hook -> terminal_width: {}", it);
            it
        };
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .break_words(true)
                .with_cause_chain()
                .footer(footer.to_string())
                .build(),
        )
    }))
    .ok();
}
