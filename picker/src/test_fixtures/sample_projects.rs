// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Project, SelectableEntity};

/// Identifiers of `entities`, in order. Handy for asserting on ordering.
#[must_use]
pub fn slugs<E: SelectableEntity>(entities: &[E]) -> Vec<&str> {
    entities.iter().map(SelectableEntity::identifier).collect()
}

/// Three member projects (one bookmarked) and two non member projects, deliberately
/// not in display order.
#[must_use]
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new("1", "web-frontend"),
        Project::new("2", "api").bookmarked(true),
        Project::new("3", "billing").member(false),
        Project::new("4", "android"),
        Project::new("5", "analytics").member(false),
    ]
}
