// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fixed for the lifetime of a [`crate::SelectionController`]. Determines which toggle
/// path is active, and whether items render with a checkbox.
#[derive(
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    ValueEnum,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SelectionMode {
    /// Select only one entity from the list.
    #[default]
    Single,
    /// Select multiple entities from the list.
    Multi,
}

impl SelectionMode {
    #[must_use]
    pub fn is_multi(self) -> bool { self == SelectionMode::Multi }
}
