// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{OrderedGroups, SelectableEntity, SelectionMode, SelectionResult,
            SelectionSet, compute_ordered_groups, toggle_multi, toggle_single};

/// Stateless selection logic for one picker. The only thing it holds is the
/// [`SelectionMode`], canonical selection state always lives with the caller and is
/// passed in on every call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SelectionController {
    mode: SelectionMode,
}

/// Integration mistakes that are reported as a warning and turn the call into a no-op.
/// They are recoverable, and don't say anything about the integrity of the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display)]
pub enum Misconfiguration {
    #[strum(to_string = "Multi select toggle used on a single select picker")]
    MultiToggleInSingleMode,
    #[strum(to_string = "Multi select used but no multi select callback is registered")]
    MissingMultiSelectCallback,
}

/// Emit the one warning diagnostic for this misconfiguration.
pub fn report_misconfiguration(misconfiguration: Misconfiguration) {
    // % is Display, ? is Debug.
    tracing::warn!(
        message = %misconfiguration,
        kind = ?misconfiguration
    );
}

/// What happened when a multi select toggle was requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultiToggleOutcome<E> {
    Toggled(SelectionSet<E>),
    Ignored(Misconfiguration),
}

impl<E: Clone> MultiToggleOutcome<E> {
    /// The selection the caller should hold after this toggle. For an ignored toggle,
    /// that's `current_selection` unchanged.
    #[must_use]
    pub fn next_selection(self, current_selection: &SelectionSet<E>) -> SelectionSet<E> {
        match self {
            MultiToggleOutcome::Toggled(it) => it,
            MultiToggleOutcome::Ignored(_) => current_selection.clone(),
        }
    }
}

impl SelectionController {
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self { Self { mode } }

    #[must_use]
    pub fn mode(&self) -> SelectionMode { self.mode }

    /// See [`compute_ordered_groups`].
    ///
    /// # Errors
    ///
    /// See [`compute_ordered_groups`].
    pub fn compute_ordered_groups<E: SelectableEntity>(
        &self,
        all_entities: &[E],
        member_entities: &[E],
        non_member_entities: &[E],
        selection: &SelectionSet<E>,
    ) -> SelectionResult<OrderedGroups<E>> {
        compute_ordered_groups(
            all_entities,
            member_entities,
            non_member_entities,
            selection,
        )
    }

    /// See [`toggle_single`].
    ///
    /// # Errors
    ///
    /// See [`toggle_single`].
    pub fn toggle_single<E: SelectableEntity>(&self, entity: E) -> SelectionResult<E> {
        toggle_single(entity)
    }

    /// See [`toggle_multi`]. On a [`SelectionMode::Single`] controller this reports
    /// [`Misconfiguration::MultiToggleInSingleMode`] and changes nothing, so the
    /// single selection can't grow past one entity.
    ///
    /// # Errors
    ///
    /// See [`toggle_multi`]. The mode is checked first, so an ignored toggle never
    /// errors.
    pub fn toggle_multi<E: SelectableEntity>(
        &self,
        entity: &E,
        current_selection: &SelectionSet<E>,
    ) -> SelectionResult<MultiToggleOutcome<E>> {
        match self.mode {
            SelectionMode::Single => {
                let it = Misconfiguration::MultiToggleInSingleMode;
                report_misconfiguration(it);
                Ok(MultiToggleOutcome::Ignored(it))
            }
            SelectionMode::Multi => {
                toggle_multi(entity, current_selection).map(MultiToggleOutcome::Toggled)
            }
        }
    }
}
