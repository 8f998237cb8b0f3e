// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! The render ready description of a project picker menu. Nothing in here draws
//! anything, the presentation layer decides how each part looks.

use crate::InlineString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ItemSize {
    #[default]
    Default,
    Small,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem<E> {
    pub value: E,
    /// Matched against the filter input, see [`crate::filter_groups`].
    pub search_key: InlineString,
    pub is_checked: bool,
    pub is_preferred: bool,
    /// Render a checkbox that toggles this item w/out closing the menu.
    pub is_multi: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup<E> {
    pub id: Option<&'static str>,
    pub label: Option<&'static str>,
    pub hide_group_label: bool,
    pub item_size: ItemSize,
    pub items: Vec<MenuItem<E>>,
}

/// The "add project" action next to the filter input. Always present, but disabled w/
/// an explanation when the user can't create projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddEntityAction {
    pub label: &'static str,
    pub target_path: String,
    pub is_disabled: bool,
    pub tooltip: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntityAction {
    pub label: &'static str,
    pub target_path: String,
}

/// Only built when at least one of the two parts is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFooter {
    /// Shown when there are no entities at all, and the user may create one.
    pub create_action: Option<CreateEntityAction>,
    /// The caller's [`crate::MenuFooter`], resolved.
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SelectorMenu<E> {
    /// Empty when [`has_entities`](SelectorMenu::has_entities) is false.
    pub groups: Vec<MenuGroup<E>>,
    pub has_entities: bool,
    pub is_multi: bool,
    pub add_action: AddEntityAction,
    pub footer: Option<ResolvedFooter>,
    pub search_placeholder: &'static str,
    pub empty_message: &'static str,
    pub no_results_message: &'static str,
    /// When fully loaded, an empty list has nothing to search so the input is hidden.
    /// When paginated the input stays, so a search w/ no results can be corrected.
    pub empty_hides_input: bool,
    /// Keep showing items while a search is in flight.
    pub busy_items_still_visible: bool,
}

impl<E> SelectorMenu<E> {
    pub fn items(&self) -> impl Iterator<Item = &MenuItem<E>> {
        self.groups.iter().flat_map(|group| group.items.iter())
    }

    #[must_use]
    pub fn item_count(&self) -> usize { self.items().count() }

    pub fn checked_items(&self) -> impl Iterator<Item = &MenuItem<E>> {
        self.items().filter(|item| item.is_checked)
    }
}
