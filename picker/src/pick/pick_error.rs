// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum PickError {
    #[error("📑 Could not read input from {source_name}")]
    #[diagnostic(code(picker::pick::read_input))]
    ReadInput { source_name: String },

    #[error("🔍 Could not parse the input document")]
    #[diagnostic(
        code(picker::pick::parse_input),
        help("Expected an object w/ `organization`, `projects`, and `selected` fields")
    )]
    ParseInput,

    #[error("❓ No project w/ identifier '{identifier}'")]
    #[diagnostic(code(picker::pick::unknown_entity))]
    UnknownEntity { identifier: String },
}
