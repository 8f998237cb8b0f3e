// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

/// Access scope that allows creating projects.
pub const PROJECT_WRITE_ACCESS: &str = "project:write";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Organization {
    pub slug: String,
    #[serde(default)]
    pub access: Vec<String>,
}

impl Organization {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            access: vec![],
        }
    }

    #[must_use]
    pub fn with_access(mut self, scope: impl Into<String>) -> Self {
        self.access.push(scope.into());
        self
    }

    /// Resolve the write permission capability once, at the boundary. Everything
    /// downstream receives the resulting `bool`.
    #[must_use]
    pub fn has_project_write(&self) -> bool {
        self.access.iter().any(|scope| scope == PROJECT_WRITE_ACCESS)
    }
}
