// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use picker::{CLIArg, CommonResult, handle_pick_command, ok,
             setup_default_miette_global_report_handler, try_initialize_logging_global};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const REPORT_FOOTER: &str = "💡 Run w/ `--enable-logging` and check `log.txt` for details";

fn main() -> CommonResult<()> {
    setup_default_miette_global_report_handler(REPORT_FOOTER);

    let cli_arg = CLIArg::parse();

    let should_log = cli_arg.global_options.enable_logging;

    should_log.then(|| {
        try_initialize_logging_global(tracing_core::LevelFilter::DEBUG).ok();
        // % is Display, ? is Debug.
        tracing::debug!(message = "Start logging...", cli_arg = ?cli_arg);
    });

    let pick_result = handle_pick_command(&cli_arg)?;
    println!("{pick_result}");

    should_log.then(|| {
        tracing::debug!(message = "Stop logging...");
    });

    ok!()
}
