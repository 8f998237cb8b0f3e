// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Caller contract violations. These fail fast, since proceeding would corrupt the
/// uniqueness invariant of a [`crate::SelectionSet`] or the ordering of the groups.
///
/// A misconfigured multi-select is *not* one of these, see
/// [`crate::Misconfiguration`].
#[derive(thiserror::Error, Debug, miette::Diagnostic, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("🏷️ Entity with sort key '{sort_key}' is missing a unique identifier")]
    #[diagnostic(
        code(picker::selection::missing_identifier),
        help("Every selectable entity needs a non blank identifier")
    )]
    MissingIdentifier { sort_key: String },

    #[error("♊ Identifier '{identifier}' appears more than once")]
    #[diagnostic(
        code(picker::selection::duplicate_identifier),
        help("A selection, and each membership group, can contain an entity at most once")
    )]
    DuplicateIdentifier { identifier: String },

    #[error(
        "🧩 Membership partition has {partitioned} entities, but there are {total} candidates"
    )]
    #[diagnostic(
        code(picker::selection::partition_mismatch),
        help("Members and non members must split the full candidate list")
    )]
    PartitionMismatch { total: usize, partitioned: usize },

    #[error("👻 Identifier '{identifier}' is in a membership group but not a candidate")]
    #[diagnostic(
        code(picker::selection::unknown_candidate),
        help("Members and non members must be taken from the full candidate list")
    )]
    UnknownCandidate { identifier: String },
}

pub type SelectionResult<T> = Result<T, SelectionError>;
