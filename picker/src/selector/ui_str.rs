// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

pub const SEARCH_PLACEHOLDER: &str = "Filter projects";
pub const EMPTY_MESSAGE: &str = "You have no projects";
pub const NO_RESULTS_MESSAGE: &str = "No projects found";
pub const NON_MEMBER_GROUP_LABEL: &str = "Projects I don't belong to";
pub const NON_MEMBER_GROUP_ID: &str = "no-membership-header";
pub const ADD_ACTION_LABEL: &str = "Project";
pub const ADD_ACTION_NO_PERMISSION_TOOLTIP: &str =
    "You don't have permission to add a project";
pub const CREATE_ACTION_LABEL: &str = "Create project";

/// Where the add and create actions lead to.
#[must_use]
pub fn new_project_path(organization_slug: &str) -> String {
    format!("/organizations/{organization_slug}/projects/new/")
}
