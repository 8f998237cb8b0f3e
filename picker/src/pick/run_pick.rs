// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{cell::RefCell,
          fmt::{Display, Formatter}};

use crate::{CLIArg, CommonResult, FooterRenderProps, InteractionEvent, MenuFooter,
            Project, ProjectSelector, SelectionMode, SelectionSet, SelectorInput,
            SelectorMenu, SelectorProps, partition_by_membership, ui_templates};

/// What `pick` ends up with after replaying the toggles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    pub selection_mode: SelectionMode,
    pub selection: SelectionSet<Project>,
    pub menu: SelectorMenu<Project>,
}

impl Display for PickResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            ui_templates::render_pick_result(&self.menu, &self.selection)
        )
    }
}

/// # Errors
///
/// Returns an error if the input can't be loaded, or [`run_pick`] fails.
pub fn handle_pick_command(cli_arg: &CLIArg) -> CommonResult<PickResult> {
    let input = SelectorInput::try_load(cli_arg.input.as_deref())?;
    run_pick(
        &input,
        cli_arg.selection_mode,
        &cli_arg.toggle,
        cli_arg.filter.as_deref(),
    )
}

/// Play the role of the data source: own the canonical selection, apply each toggle
/// that the selector proposes through its callbacks, and finally derive the menu.
///
/// # Errors
///
/// Returns an error if a toggled or selected identifier is unknown, or the input
/// contains malformed projects.
pub fn run_pick(
    input: &SelectorInput,
    selection_mode: SelectionMode,
    toggles: &[String],
    maybe_filter: Option<&str>,
) -> CommonResult<PickResult> {
    let (members, non_members) = partition_by_membership(&input.projects);
    let mut selection = input.initial_selection()?;
    let proposed: RefCell<Option<SelectionSet<Project>>> = RefCell::new(None);

    let mut selector = ProjectSelector::new(selection_mode)
        .on_select(|project: &Project| {
            *proposed.borrow_mut() = SelectionSet::try_from_single(project.clone()).ok();
        })
        .on_multi_select(|next_selection, _event| {
            *proposed.borrow_mut() = Some(next_selection);
        })
        .menu_footer(MenuFooter::render_fn(|props| {
            (!props.input_value.is_empty())
                .then(|| format!("Showing matches for '{}'", props.input_value))
        }));

    for identifier in toggles {
        let project = input.find_project(identifier)?.clone();
        match selection_mode {
            SelectionMode::Single => selector.handle_select(project)?,
            SelectionMode::Multi => {
                selector.handle_multi_select(
                    &project,
                    &selection,
                    InteractionEvent::Programmatic,
                )?;
            }
        }
        if let Some(next_selection) = proposed.borrow_mut().take() {
            selection = next_selection;
        }
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "applied toggle",
            identifier = %identifier,
            selection = ?selection.identifiers().collect::<Vec<_>>()
        );
    }

    let props = SelectorProps {
        organization_slug: &input.organization.slug,
        all_entities: &input.projects,
        member_entities: &members,
        non_member_entities: &non_members,
        selection: &selection,
        has_write_permission: input.organization.has_project_write(),
        searching: input.searching,
        paginated: input.paginated,
    };
    let footer_render_props = FooterRenderProps {
        is_open: true,
        input_value: maybe_filter.unwrap_or_default().trim().into(),
    };
    let menu = selector.build_menu(&props, &footer_render_props)?;
    let menu = match maybe_filter {
        Some(query) => menu.filter(query),
        None => menu,
    };

    Ok(PickResult {
        selection_mode,
        selection,
        menu,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PickError, assert_eq2, test_fixtures::slugs};

    fn input() -> SelectorInput {
        SelectorInput::try_parse(
            r#"{
                "organization": { "slug": "acme", "access": ["project:write"] },
                "projects": [
                    { "id": "1", "slug": "web", "is_member": true },
                    { "id": "2", "slug": "api", "is_member": true, "is_bookmarked": true },
                    { "id": "3", "slug": "ios" }
                ],
                "selected": ["web"]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_multi_toggles_apply_in_order() {
        let toggles = vec!["ios".to_string(), "web".to_string(), "api".to_string()];
        let result = run_pick(&input(), SelectionMode::Multi, &toggles, None).unwrap();
        assert_eq2!(slugs(result.selection.as_slice()), vec!["ios", "api"]);
    }

    #[test]
    fn test_single_toggle_replaces_selection() {
        let toggles = vec!["api".to_string(), "ios".to_string()];
        let result = run_pick(&input(), SelectionMode::Single, &toggles, None).unwrap();
        assert_eq2!(slugs(result.selection.as_slice()), vec!["ios"]);
        assert!(!result.menu.is_multi);
    }

    #[test]
    fn test_unknown_toggle() {
        let toggles = vec!["android".to_string()];
        let report =
            run_pick(&input(), SelectionMode::Multi, &toggles, None).unwrap_err();
        assert_eq2!(
            report.downcast_ref::<PickError>(),
            Some(&PickError::UnknownEntity {
                identifier: "android".to_string()
            })
        );
    }

    #[test]
    fn test_filter_and_footer() {
        let result = run_pick(&input(), SelectionMode::Multi, &[], Some("i")).unwrap();
        let shown: Vec<_> = result
            .menu
            .items()
            .map(|it| it.value.slug.as_str())
            .collect();
        assert_eq2!(shown, vec!["api", "ios"]);
        assert_eq2!(
            result.menu.footer.and_then(|it| it.content),
            Some("Showing matches for 'i'".to_string())
        );
    }
}
