// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{MenuGroup, SelectorMenu};

/// Keep the items whose search key contains `query`, ignoring case. A blank query keeps
/// everything. Groups are kept (even when empty) so that their position is stable, but
/// a group w/ no remaining items hides its label.
#[must_use]
pub fn filter_groups<E: Clone>(groups: &[MenuGroup<E>], query: &str) -> Vec<MenuGroup<E>> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return groups.to_vec();
    }

    groups
        .iter()
        .map(|group| {
            let items: Vec<_> = group
                .items
                .iter()
                .filter(|item| item.search_key.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            MenuGroup {
                hide_group_label: group.hide_group_label || items.is_empty(),
                items,
                ..group.clone()
            }
        })
        .collect()
}

impl<E: Clone> SelectorMenu<E> {
    /// Copy of this menu w/ only the items that match `query`, see [`filter_groups`].
    #[must_use]
    pub fn filter(&self, query: &str) -> Self {
        Self {
            groups: filter_groups(&self.groups, query),
            ..self.clone()
        }
    }

    /// Message to show instead of items, if any.
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        if !self.has_entities {
            Some(self.empty_message)
        } else if self.item_count() == 0 {
            Some(self.no_results_message)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ItemSize, MenuItem, assert_eq2};

    fn item(key: &str) -> MenuItem<String> {
        MenuItem {
            value: key.to_string(),
            search_key: key.into(),
            is_checked: false,
            is_preferred: false,
            is_multi: false,
        }
    }

    fn groups() -> Vec<MenuGroup<String>> {
        vec![
            MenuGroup {
                id: None,
                label: None,
                hide_group_label: true,
                item_size: ItemSize::Default,
                items: vec![item("web-frontend"), item("API"), item("android")],
            },
            MenuGroup {
                id: Some("other"),
                label: Some("Other"),
                hide_group_label: false,
                item_size: ItemSize::Small,
                items: vec![item("billing")],
            },
        ]
    }

    fn keys(groups: &[MenuGroup<String>]) -> Vec<Vec<&str>> {
        groups
            .iter()
            .map(|group| group.items.iter().map(|it| it.value.as_str()).collect())
            .collect()
    }

    #[test]
    fn test_blank_query_keeps_everything() {
        assert_eq2!(filter_groups(&groups(), "  "), groups());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let filtered = filter_groups(&groups(), "N");
        assert_eq2!(
            keys(&filtered),
            vec![vec!["web-frontend", "android"], vec!["billing"]]
        );

        let filtered = filter_groups(&groups(), "Ap");
        assert_eq2!(keys(&filtered), vec![vec!["API"], vec![]]);
    }

    #[test]
    fn test_empty_group_hides_label() {
        let filtered = filter_groups(&groups(), "android");
        assert!(filtered[0].hide_group_label);
        assert!(filtered[1].hide_group_label);
        assert_eq2!(filtered[1].label, Some("Other"));

        let filtered = filter_groups(&groups(), "bill");
        assert!(!filtered[1].hide_group_label);
    }
}
