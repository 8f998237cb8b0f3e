// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::collections::HashSet;

use crate::{SelectableEntity, SelectionError, SelectionResult, SelectionSet,
            validate_entities};

/// Display ordered groups produced by [`compute_ordered_groups`]. Each group is a
/// permutation of the corresponding input group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedGroups<E> {
    pub members: Vec<E>,
    pub non_members: Vec<E>,
}

impl<E> OrderedGroups<E> {
    #[must_use]
    pub fn has_entities(&self) -> bool {
        !self.members.is_empty() || !self.non_members.is_empty()
    }

    #[must_use]
    pub fn into_tuple(self) -> (Vec<E>, Vec<E>) { (self.members, self.non_members) }
}

/// Order the caller's membership partition for display.
///
/// - `members` are sorted by `(not selected, not preferred, sort key)`, ascending. So
///   selected entities come first, then preferred ones, then alphabetical.
/// - `non_members` are sorted by sort key only.
///
/// Both sorts are stable, entities with equal keys keep their relative input order.
/// Whether an entity is selected is decided by identifier, not by value.
///
/// # Errors
///
/// - [`SelectionError::MissingIdentifier`] if any entity is malformed.
/// - Any error from [`check_partition`], if `members` and `non_members` don't split
///   `all_entities` exactly.
pub fn compute_ordered_groups<E: SelectableEntity>(
    all_entities: &[E],
    member_entities: &[E],
    non_member_entities: &[E],
    selection: &SelectionSet<E>,
) -> SelectionResult<OrderedGroups<E>> {
    validate_entities(all_entities)?;
    validate_entities(member_entities)?;
    validate_entities(non_member_entities)?;

    check_partition(all_entities, member_entities, non_member_entities)?;

    let it = OrderedGroups {
        members: sort_members(member_entities, selection),
        non_members: sort_non_members(non_member_entities),
    };

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "compute_ordered_groups",
        members = it.members.len(),
        non_members = it.non_members.len(),
        selected = selection.len()
    );

    Ok(it)
}

/// The membership groups must split `all_entities` exactly: same size, every entity is
/// a candidate, and no identifier shows up twice across both groups.
///
/// # Errors
///
/// - [`SelectionError::PartitionMismatch`] if the sizes differ.
/// - [`SelectionError::UnknownCandidate`] if a grouped entity isn't in `all_entities`.
/// - [`SelectionError::DuplicateIdentifier`] if an identifier is grouped twice.
pub fn check_partition<E: SelectableEntity>(
    all_entities: &[E],
    member_entities: &[E],
    non_member_entities: &[E],
) -> SelectionResult<()> {
    let partitioned = member_entities.len() + non_member_entities.len();
    if partitioned != all_entities.len() {
        return Err(SelectionError::PartitionMismatch {
            total: all_entities.len(),
            partitioned,
        });
    }

    let candidates: HashSet<&str> =
        all_entities.iter().map(SelectableEntity::identifier).collect();
    let mut grouped: HashSet<&str> = HashSet::with_capacity(partitioned);
    for entity in member_entities.iter().chain(non_member_entities) {
        let identifier = entity.identifier();
        if !candidates.contains(identifier) {
            return Err(SelectionError::UnknownCandidate {
                identifier: identifier.to_string(),
            });
        }
        if !grouped.insert(identifier) {
            return Err(SelectionError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }
    }

    Ok(())
}

/// Stable sort on `(not selected, not preferred, sort key)`.
#[must_use]
pub fn sort_members<E: SelectableEntity>(
    members: &[E],
    selection: &SelectionSet<E>,
) -> Vec<E> {
    let selected_ids: HashSet<&str> = selection.identifiers().collect();
    let sort_tuple = |entity: &E| {
        (
            !selected_ids.contains(entity.identifier()),
            !entity.is_preferred(),
            entity.sort_key().to_owned(),
        )
    };

    let mut acc = members.to_vec();
    acc.sort_by_cached_key(sort_tuple);
    acc
}

/// Stable sort on sort key.
#[must_use]
pub fn sort_non_members<E: SelectableEntity>(non_members: &[E]) -> Vec<E> {
    let mut acc = non_members.to_vec();
    acc.sort_by(|lhs, rhs| lhs.sort_key().cmp(rhs.sort_key()));
    acc
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;
    use crate::{Project, assert_eq2, test_fixtures::slugs};

    fn selection_of(slugs: &[&str]) -> SelectionSet<Project> {
        SelectionSet::try_from_entities(
            slugs.iter().map(|slug| Project::new(*slug, *slug)),
        )
        .unwrap()
    }

    #[test]
    fn test_selected_then_preferred_then_alphabetical() {
        let members = vec![
            Project::new("1", "delta"),
            Project::new("2", "charlie").bookmarked(true),
            Project::new("3", "bravo"),
            Project::new("4", "alpha").bookmarked(true),
            Project::new("5", "echo"),
        ];
        let selection = selection_of(&["echo", "charlie"]);

        let ordered = sort_members(&members, &selection);

        assert_eq2!(
            slugs(&ordered),
            vec!["charlie", "echo", "alpha", "bravo", "delta"]
        );
    }

    #[test]
    fn test_members_sort_is_stable() {
        // Same (selected, preferred, sort key) tuple, told apart by id.
        let members = vec![
            Project {
                id: "first".into(),
                ..Project::new("", "twin")
            },
            Project::new("x", "aardvark"),
            Project {
                id: "second".into(),
                ..Project::new("", "twin")
            },
        ];
        let ordered = sort_members(&members, &SelectionSet::new());
        let ids: Vec<_> = ordered.iter().map(|it| it.id.as_str()).collect();
        assert_eq2!(ids, vec!["x", "first", "second"]);
    }

    #[test]
    fn test_non_members_ignore_selection_and_preference() {
        let non_members = vec![
            Project::new("1", "zulu").member(false),
            Project::new("2", "yankee").member(false).bookmarked(true),
            Project::new("3", "xray").member(false),
        ];
        assert_eq2!(
            slugs(&sort_non_members(&non_members)),
            vec!["xray", "yankee", "zulu"]
        );
    }

    #[test_case(&["b", "a"], &["a", "b"] ; "plain lowercase")]
    #[test_case(&["b", "B", "a"], &["B", "a", "b"] ; "uppercase sorts before lowercase")]
    #[test_case(&["ab", "a", "abc"], &["a", "ab", "abc"] ; "prefix sorts first")]
    fn test_sort_key_is_lexicographic(input: &[&str], expected: &[&str]) {
        let non_members: Vec<_> = input.iter().map(|it| Project::new(*it, *it)).collect();
        assert_eq2!(slugs(&sort_non_members(&non_members)), expected.to_vec());
    }

    #[test]
    fn test_compute_ordered_groups_is_permutation() {
        let all = vec![
            Project::new("1", "c"),
            Project::new("2", "a").member(false),
            Project::new("3", "b").bookmarked(true),
            Project::new("4", "d").member(false),
        ];
        let (members, non_members) = crate::partition_by_membership(&all);
        let selection = selection_of(&["c"]);

        let groups =
            compute_ordered_groups(&all, &members, &non_members, &selection).unwrap();

        assert_eq2!(groups.members.len(), members.len());
        assert_eq2!(groups.non_members.len(), non_members.len());
        assert_eq2!(slugs(&groups.members), vec!["c", "b"]);
        assert_eq2!(slugs(&groups.non_members), vec!["a", "d"]);
        assert!(groups.has_entities());
    }

    #[test]
    fn test_compute_ordered_groups_rejects_bad_partition() {
        let all = vec![Project::new("1", "a"), Project::new("2", "b")];
        let result =
            compute_ordered_groups(&all, &all[..1], &[], &SelectionSet::new());
        assert_eq2!(
            result,
            Err(SelectionError::PartitionMismatch {
                total: 2,
                partitioned: 1
            })
        );
    }

    #[test]
    fn test_compute_ordered_groups_rejects_member_listed_twice() {
        let all = vec![Project::new("1", "a"), Project::new("2", "b")];
        let members = vec![all[0].clone(), all[0].clone()];
        let result = compute_ordered_groups(&all, &members, &[], &SelectionSet::new());
        assert_eq2!(
            result,
            Err(SelectionError::DuplicateIdentifier {
                identifier: "a".to_string()
            })
        );
    }

    #[test]
    fn test_compute_ordered_groups_rejects_member_that_is_not_a_candidate() {
        let all = vec![Project::new("1", "a"), Project::new("2", "b")];
        let members = vec![all[0].clone()];
        let non_members = vec![Project::new("3", "c").member(false)];
        let result =
            compute_ordered_groups(&all, &members, &non_members, &SelectionSet::new());
        assert_eq2!(
            result,
            Err(SelectionError::UnknownCandidate {
                identifier: "c".to_string()
            })
        );
    }

    #[test]
    fn test_compute_ordered_groups_rejects_malformed_entity() {
        let all = vec![Project::new("1", "a"), Project::new("2", " ")];
        let result = compute_ordered_groups(&all, &all, &[], &SelectionSet::new());
        assert!(matches!(
            result,
            Err(SelectionError::MissingIdentifier { .. })
        ));
    }

    #[test]
    fn test_empty_groups() {
        let groups = compute_ordered_groups::<Project>(&[], &[], &[], &SelectionSet::new())
            .unwrap();
        assert!(!groups.has_entities());
        assert_eq2!(groups.into_tuple(), (vec![], vec![]));
    }
}
