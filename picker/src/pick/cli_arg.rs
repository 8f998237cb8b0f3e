// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::SelectionMode;

#[derive(Debug, Parser)]
#[command(bin_name = "pick")]
#[command(about = "🗂️ Order a project picker menu and replay selection toggles against it")]
#[command(version)]
#[command(next_line_help = true)]
/// More info:
/// - <https://docs.rs/clap/latest/clap/_derive/#overview>
/// - <https://developerlife.com/2023/09/17/tuify-clap/>
pub struct CLIArg {
    #[arg(
        long,
        short = 'i',
        value_name = "FILE",
        help = "JSON document w/ the organization, projects, and selected identifiers. Read from stdin when omitted"
    )]
    pub input: Option<PathBuf>,

    #[arg(
        long,
        short = 's',
        value_enum,
        default_value_t = SelectionMode::Multi,
        help = "Pick one project, or toggle any number of them"
    )]
    pub selection_mode: SelectionMode,

    #[arg(
        long,
        short = 't',
        value_name = "IDENTIFIER",
        help = "Toggle the project w/ this identifier. Repeat to toggle several, they are applied in order"
    )]
    pub toggle: Vec<String>,

    #[arg(
        long,
        short = 'f',
        value_name = "QUERY",
        help = "Only show projects whose slug contains this text"
    )]
    pub filter: Option<String>,

    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log app output to a file named `log.txt` for debugging"
    )]
    pub enable_logging: bool,
}
