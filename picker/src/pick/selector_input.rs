// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{io::Read as _, path::Path};

use miette::{IntoDiagnostic as _, WrapErr as _};
use serde::{Deserialize, Serialize};

use crate::{CommonResult, Organization, PickError, Project, SelectableEntity,
            SelectionSet};

/// The document the data source hands to `pick`. The membership partition comes from
/// [`Project::is_member`], and the write permission from the organization's access
/// scopes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SelectorInput {
    pub organization: Organization,
    #[serde(default)]
    pub projects: Vec<Project>,
    /// Identifiers of the selected projects, in selection order.
    #[serde(default)]
    pub selected: Vec<String>,
    #[serde(default)]
    pub paginated: bool,
    #[serde(default)]
    pub searching: bool,
}

impl SelectorInput {
    /// # Errors
    ///
    /// Returns [`PickError::ParseInput`] if the JSON doesn't match the expected shape.
    pub fn try_parse(json: &str) -> CommonResult<Self> {
        serde_json::from_str(json)
            .into_diagnostic()
            .wrap_err(PickError::ParseInput)
    }

    /// Read from `maybe_path`, or stdin if there isn't one.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::ReadInput`] if the input can't be read, or
    /// [`PickError::ParseInput`] if it can't be parsed.
    pub fn try_load(maybe_path: Option<&Path>) -> CommonResult<Self> {
        let json = match maybe_path {
            Some(path) => std::fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err(PickError::ReadInput {
                    source_name: format!("'{}'", path.display()),
                })?,
            None => {
                let mut acc = String::new();
                std::io::stdin()
                    .read_to_string(&mut acc)
                    .into_diagnostic()
                    .wrap_err(PickError::ReadInput {
                        source_name: "stdin".to_string(),
                    })?;
                acc
            }
        };
        Self::try_parse(&json)
    }

    /// # Errors
    ///
    /// Returns [`PickError::UnknownEntity`] if there's no such project.
    pub fn find_project(&self, identifier: &str) -> Result<&Project, PickError> {
        self.projects
            .iter()
            .find(|project| project.identifier() == identifier)
            .ok_or_else(|| PickError::UnknownEntity {
                identifier: identifier.to_string(),
            })
    }

    /// Resolve [`SelectorInput::selected`] to projects.
    ///
    /// # Errors
    ///
    /// Returns an error if an identifier is unknown, or listed twice.
    pub fn initial_selection(&self) -> CommonResult<SelectionSet<Project>> {
        let projects = self
            .selected
            .iter()
            .map(|identifier| self.find_project(identifier).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SelectionSet::try_from_entities(projects)?)
    }
}
