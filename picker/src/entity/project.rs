// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::SelectableEntity;

/// A project in an organization. The slug is both the identifier and the sort key, and
/// bookmarked projects are preferred.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub slug: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_bookmarked: bool,
    /// Whether the current user belongs to one of the project's teams. This is only
    /// used by the caller to partition projects, see [`partition_by_membership`].
    #[serde(default)]
    pub is_member: bool,
    #[serde(default)]
    pub platform: Option<String>,
}

impl Project {
    /// A member project that isn't bookmarked, named after its slug.
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        let slug = slug.into();
        Self {
            id: id.into(),
            name: slug.clone(),
            slug,
            is_bookmarked: false,
            is_member: true,
            platform: None,
        }
    }

    #[must_use]
    pub fn bookmarked(mut self, is_bookmarked: bool) -> Self {
        self.is_bookmarked = is_bookmarked;
        self
    }

    #[must_use]
    pub fn member(mut self, is_member: bool) -> Self {
        self.is_member = is_member;
        self
    }
}

impl SelectableEntity for Project {
    fn identifier(&self) -> &str { &self.slug }

    fn is_preferred(&self) -> bool { self.is_bookmarked }

    fn sort_key(&self) -> &str { &self.slug }
}

/// Split `projects` into `(members, non_members)` using [`Project::is_member`],
/// preserving relative order in both halves.
#[must_use]
pub fn partition_by_membership(projects: &[Project]) -> (Vec<Project>, Vec<Project>) {
    projects.iter().cloned().partition(|project| project.is_member)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;

    #[test]
    fn test_project_is_selectable_by_slug() {
        let project = Project::new("42", "backend").bookmarked(true);
        assert_eq2!(project.identifier(), "backend");
        assert_eq2!(project.sort_key(), "backend");
        assert!(project.is_preferred());
    }

    #[test]
    fn test_partition_by_membership_keeps_order() {
        let projects = vec![
            Project::new("1", "c"),
            Project::new("2", "b").member(false),
            Project::new("3", "a"),
            Project::new("4", "d").member(false),
        ];
        let (members, non_members) = partition_by_membership(&projects);
        let member_slugs: Vec<_> = members.iter().map(|it| it.slug.as_str()).collect();
        let non_member_slugs: Vec<_> =
            non_members.iter().map(|it| it.slug.as_str()).collect();
        assert_eq2!(member_slugs, vec!["c", "a"]);
        assert_eq2!(non_member_slugs, vec!["b", "d"]);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let project: Project =
            serde_json::from_str(r#"{ "id": "7", "slug": "web" }"#).unwrap();
        assert_eq2!(project.slug, "web");
        assert!(!project.is_bookmarked);
        assert!(!project.is_member);
        assert_eq2!(project.platform, None);
    }
}
