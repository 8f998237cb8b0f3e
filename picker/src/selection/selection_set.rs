// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{InlineVec, SelectableEntity, SelectionError, SelectionResult,
            validate_entity};

/// Ordered collection of selected entities, keyed by
/// [`SelectableEntity::identifier`].
///
/// - No identifier appears twice.
/// - Order is insertion order (ie, the order in which entities were toggled on), not
///   sort order.
/// - In [`crate::SelectionMode::Single`] the caller keeps this to at most one entity.
///
/// This is a value type. Toggling never mutates a set in place, it produces a new one
/// (see [`crate::toggle_multi`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSet<E> {
    items: InlineVec<E>,
}

impl<E> Default for SelectionSet<E> {
    fn default() -> Self {
        Self {
            items: InlineVec::new(),
        }
    }
}

impl<E: SelectableEntity> SelectionSet<E> {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Build a selection from caller supplied data, eg: the authoritative selection that
    /// the data source hands over on every update.
    ///
    /// # Errors
    ///
    /// - [`SelectionError::MissingIdentifier`] if an entity has a blank identifier.
    /// - [`SelectionError::DuplicateIdentifier`] if two entities share an identifier.
    pub fn try_from_entities(
        entities: impl IntoIterator<Item = E>,
    ) -> SelectionResult<Self> {
        let mut acc = Self::new();
        for entity in entities {
            validate_entity(&entity)?;
            if acc.contains_identifier(entity.identifier()) {
                return Err(SelectionError::DuplicateIdentifier {
                    identifier: entity.identifier().to_string(),
                });
            }
            acc.items.push(entity);
        }
        Ok(acc)
    }

    /// The result of a single select, see [`crate::toggle_single`].
    ///
    /// # Errors
    ///
    /// Returns [`SelectionError::MissingIdentifier`] if the entity is malformed.
    pub fn try_from_single(entity: E) -> SelectionResult<Self> {
        Self::try_from_entities([entity])
    }

    #[must_use]
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.identifier() == identifier)
    }

    #[must_use]
    pub fn contains_identifier(&self, identifier: &str) -> bool {
        self.position(identifier).is_some()
    }

    #[must_use]
    pub fn contains(&self, entity: &E) -> bool {
        self.contains_identifier(entity.identifier())
    }

    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(SelectableEntity::identifier)
    }

    /// New set that is a copy of this one plus `entity` at the end. The caller has
    /// already checked that `entity` is not present.
    pub(crate) fn with_appended(&self, entity: E) -> Self {
        let mut items = self.items.clone();
        items.push(entity);
        Self { items }
    }

    /// New set that is a copy of this one minus the entity at `index`.
    pub(crate) fn without_index(&self, index: usize) -> Self {
        let items = self
            .items
            .iter()
            .enumerate()
            .filter(|(it, _)| *it != index)
            .map(|(_, item)| item.clone())
            .collect();
        Self { items }
    }
}

impl<E> SelectionSet<E> {
    #[must_use]
    pub fn len(&self) -> usize { self.items.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn iter(&self) -> std::slice::Iter<'_, E> { self.items.iter() }

    #[must_use]
    pub fn as_slice(&self) -> &[E] { &self.items }

    #[must_use]
    pub fn last(&self) -> Option<&E> { self.items.last() }
}

impl<'a, E> IntoIterator for &'a SelectionSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}

impl<E> IntoIterator for SelectionSet<E> {
    type Item = E;
    type IntoIter = smallvec::IntoIter<[E; crate::INLINE_VEC_SIZE]>;

    fn into_iter(self) -> Self::IntoIter { self.items.into_iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Project, assert_eq2};

    #[test]
    fn test_try_from_entities_preserves_order() {
        let set = SelectionSet::try_from_entities([
            Project::new("1", "zeta"),
            Project::new("2", "alpha"),
        ])
        .unwrap();
        let ids: Vec<_> = set.identifiers().collect();
        assert_eq2!(ids, vec!["zeta", "alpha"]);
        assert_eq2!(set.len(), 2);
        assert_eq2!(set.position("alpha"), Some(1));
    }

    #[test]
    fn test_try_from_entities_rejects_duplicates() {
        // Same slug, different everything else: still the same entity.
        let result = SelectionSet::try_from_entities([
            Project::new("1", "alpha"),
            Project::new("99", "alpha").bookmarked(true),
        ]);
        assert_eq2!(
            result,
            Err(SelectionError::DuplicateIdentifier {
                identifier: "alpha".to_string()
            })
        );
    }

    #[test]
    fn test_try_from_entities_rejects_missing_identifier() {
        let result = SelectionSet::try_from_entities([Project::new("1", "")]);
        assert!(matches!(
            result,
            Err(SelectionError::MissingIdentifier { .. })
        ));
    }

    #[test]
    fn test_contains_matches_by_identifier_not_value() {
        let set = SelectionSet::try_from_single(Project::new("1", "alpha")).unwrap();
        let stale_copy = Project::new("1", "alpha").bookmarked(true);
        assert!(set.contains(&stale_copy));
        assert!(!set.contains_identifier("beta"));
    }

    #[test]
    fn test_spills_past_inline_capacity() {
        let projects = (0..20).map(|it| Project::new(it.to_string(), format!("p{it}")));
        let set = SelectionSet::try_from_entities(projects).unwrap();
        assert_eq2!(set.len(), 20);
        assert_eq2!(set.last().map(|it| it.slug.as_str()), Some("p19"));
    }
}
