// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{SelectableEntity, SelectionResult, SelectionSet, validate_entity};

/// Single select is the identity: the caller replaces whatever it had selected with the
/// returned entity (eg: with [`SelectionSet::try_from_single`]).
///
/// # Errors
///
/// Returns [`crate::SelectionError::MissingIdentifier`] if the entity is malformed.
pub fn toggle_single<E: SelectableEntity>(entity: E) -> SelectionResult<E> {
    validate_entity(&entity)?;
    Ok(entity)
}

/// Compute the next multi select selection, w/out touching `current_selection`.
///
/// - If an entity with the same identifier is selected, it is removed. The comparison is
///   by identifier, so a stale copy of the entity still unselects it.
/// - Otherwise `entity` is appended at the end, so the selection remembers the order in
///   which entities were picked.
///
/// # Errors
///
/// Returns [`crate::SelectionError::MissingIdentifier`] if the entity is malformed.
pub fn toggle_multi<E: SelectableEntity>(
    entity: &E,
    current_selection: &SelectionSet<E>,
) -> SelectionResult<SelectionSet<E>> {
    validate_entity(entity)?;

    let next_selection = match current_selection.position(entity.identifier()) {
        // Entity already in selection so remove it.
        Some(index) => current_selection.without_index(index),
        // Entity not found in selection so add it.
        None => current_selection.with_appended(entity.clone()),
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "toggle_multi",
        identifier = %entity.identifier(),
        before = current_selection.len(),
        after = next_selection.len()
    );

    Ok(next_selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Project, SelectionError, assert_eq2, test_fixtures::slugs};

    fn abc() -> SelectionSet<Project> {
        SelectionSet::try_from_entities([
            Project::new("1", "a"),
            Project::new("2", "b"),
            Project::new("3", "c"),
        ])
        .unwrap()
    }

    #[test]
    fn test_toggle_single_is_identity() {
        let project = Project::new("1", "alpha").bookmarked(true);
        assert_eq2!(toggle_single(project.clone()), Ok(project));
    }

    #[test]
    fn test_toggle_single_rejects_malformed() {
        assert!(toggle_single(Project::new("1", "")).is_err());
    }

    #[test]
    fn test_toggle_multi_adds_at_end() {
        let current = abc();
        let next = toggle_multi(&Project::new("0", "0-first-alphabetically"), &current)
            .unwrap();
        assert_eq2!(next.len(), current.len() + 1);
        assert_eq2!(
            next.last().map(|it| it.slug.as_str()),
            Some("0-first-alphabetically")
        );
    }

    #[test]
    fn test_toggle_multi_removes_by_identifier() {
        let current = abc();
        // A stale copy w/ different fields, same slug.
        let stale_b = Project::new("other-id", "b").bookmarked(true);
        let next = toggle_multi(&stale_b, &current).unwrap();
        assert_eq2!(next.len(), current.len() - 1);
        assert!(!next.contains(&stale_b));
        assert_eq2!(slugs(next.as_slice()), vec!["a", "c"]);
    }

    #[test]
    fn test_toggle_multi_does_not_mutate_input() {
        let current = abc();
        let snapshot = current.clone();
        let _unused = toggle_multi(&Project::new("1", "a"), &current).unwrap();
        let _unused = toggle_multi(&Project::new("9", "z"), &current).unwrap();
        assert_eq2!(current, snapshot);
    }

    #[test]
    fn test_double_toggle_restores_set() {
        let current = abc();

        // Absent entity: added then removed, exact same order.
        let z = Project::new("9", "z");
        let round_trip = toggle_multi(&z, &toggle_multi(&z, &current).unwrap()).unwrap();
        assert_eq2!(round_trip, current);

        // Present entity: removed then re-added at the end.
        let a = Project::new("1", "a");
        let round_trip = toggle_multi(&a, &toggle_multi(&a, &current).unwrap()).unwrap();
        assert_eq2!(slugs(round_trip.as_slice()), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_toggle_multi_rejects_malformed() {
        let result = toggle_multi(&Project::new("1", ""), &abc());
        assert!(matches!(
            result,
            Err(SelectionError::MissingIdentifier { .. })
        ));
    }
}
