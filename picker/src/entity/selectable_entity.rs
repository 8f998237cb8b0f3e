// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Debug;

use crate::{SelectionError, SelectionResult};

/// An item that can be shown in a picker and selected. Entities are owned by the data
/// source, the selection controller only reads them and clones them into a
/// [`crate::SelectionSet`].
///
/// Two entities are "the same" for selection purposes when their
/// [`identifier`](SelectableEntity::identifier)s are equal, regardless of whether any of
/// their other fields differ. This guards against stale copies of an entity held by the
/// caller.
pub trait SelectableEntity: Clone + Debug {
    /// Unique and stable key.
    fn identifier(&self) -> &str;

    /// Preferred entities (eg: bookmarked projects) are listed before the rest.
    fn is_preferred(&self) -> bool;

    /// Display ordering key, compared lexicographically.
    fn sort_key(&self) -> &str;
}

/// Fail fast when an entity has no usable identifier. Proceeding would silently break
/// the "no duplicate identifiers" invariant of [`crate::SelectionSet`], since every
/// malformed entity would collide with every other one.
///
/// # Errors
///
/// Returns [`SelectionError::MissingIdentifier`] if the identifier is empty or only
/// whitespace.
pub fn validate_entity<E: SelectableEntity>(entity: &E) -> SelectionResult<()> {
    if entity.identifier().trim().is_empty() {
        return Err(SelectionError::MissingIdentifier {
            sort_key: entity.sort_key().to_string(),
        });
    }
    Ok(())
}

/// Run [`validate_entity`] over every entity, stopping at the first malformed one.
///
/// # Errors
///
/// Returns the error for the first malformed entity.
pub fn validate_entities<'a, E: SelectableEntity + 'a>(
    entities: impl IntoIterator<Item = &'a E>,
) -> SelectionResult<()> {
    entities.into_iter().try_for_each(validate_entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Project, assert_eq2};

    #[test]
    fn test_validate_entity_ok() {
        let project = Project::new("1", "alpha");
        assert!(validate_entity(&project).is_ok());
    }

    #[test]
    fn test_validate_entity_blank_identifier() {
        let project = Project::new("1", "   ");
        let result = validate_entity(&project);
        assert_eq2!(
            result,
            Err(SelectionError::MissingIdentifier {
                sort_key: "   ".to_string()
            })
        );
    }

    #[test]
    fn test_validate_entities_stops_at_first_malformed() {
        let projects = [
            Project::new("1", "alpha"),
            Project::new("2", ""),
            Project::new("3", "gamma"),
        ];
        assert!(validate_entities(&projects).is_err());
        assert!(validate_entities(&projects[..1]).is_ok());
    }
}
