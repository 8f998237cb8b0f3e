// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::{AddEntityAction, CreateEntityAction, FooterRenderProps, InlineString,
            InteractionEvent, ItemSize, MenuFooter, MenuGroup, MenuItem,
            Misconfiguration, MultiToggleOutcome, Project, ResolvedFooter,
            SelectableEntity, SelectionController, SelectionMode, SelectionResult,
            SelectionSet, SelectorMenu, report_misconfiguration, ui_str};

pub type OnSelect<'a, E> = Box<dyn FnMut(&E) + 'a>;
pub type OnMultiSelect<'a, E> = Box<dyn FnMut(SelectionSet<E>, InteractionEvent) + 'a>;

/// Everything the data source hands over on each update. The selector keeps none of
/// it between calls.
#[derive(Debug, Clone)]
pub struct SelectorProps<'p, E> {
    pub organization_slug: &'p str,
    pub all_entities: &'p [E],
    pub member_entities: &'p [E],
    pub non_member_entities: &'p [E],
    /// The authoritative selection, owned by the data source.
    pub selection: &'p SelectionSet<E>,
    /// Resolved once by the caller, eg: with [`crate::Organization::has_project_write`].
    pub has_write_permission: bool,
    pub searching: bool,
    pub paginated: bool,
}

/// Wires a [`SelectionController`] to the data source callbacks, and derives the
/// [`SelectorMenu`] for the presentation layer.
///
/// This is a controlled component. Selection changes are only proposed through the
/// callbacks, the caller decides whether to apply them and passes the result back in
/// on the next update.
pub struct ProjectSelector<'a, E = Project> {
    controller: SelectionController,
    on_select: Option<OnSelect<'a, E>>,
    on_multi_select: Option<OnMultiSelect<'a, E>>,
    menu_footer: MenuFooter<'a>,
}

impl<E> Debug for ProjectSelector<'_, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProjectSelector")
            .field("controller", &self.controller)
            .field("has_on_select", &self.on_select.is_some())
            .field("has_on_multi_select", &self.on_multi_select.is_some())
            .field("menu_footer", &self.menu_footer)
            .finish()
    }
}

impl<'a, E: SelectableEntity> ProjectSelector<'a, E> {
    #[must_use]
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            controller: SelectionController::new(mode),
            on_select: None,
            on_multi_select: None,
            menu_footer: MenuFooter::None,
        }
    }

    #[must_use]
    pub fn on_select(mut self, callback: impl FnMut(&E) + 'a) -> Self {
        self.on_select = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn on_multi_select(
        mut self,
        callback: impl FnMut(SelectionSet<E>, InteractionEvent) + 'a,
    ) -> Self {
        self.on_multi_select = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn menu_footer(mut self, menu_footer: impl Into<MenuFooter<'a>>) -> Self {
        self.menu_footer = menu_footer.into();
        self
    }

    #[must_use]
    pub fn controller(&self) -> SelectionController { self.controller }

    /// An item was picked. The entity is forwarded to the `on_select` callback, if
    /// there is one.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SelectionError::MissingIdentifier`] if the entity is malformed.
    pub fn handle_select(&mut self, entity: E) -> SelectionResult<()> {
        let picked = self.controller.toggle_single(entity)?;
        if let Some(callback) = self.on_select.as_mut() {
            callback(&picked);
        }
        Ok(())
    }

    /// An item's checkbox was toggled. The next selection is forwarded to the
    /// `on_multi_select` callback along w/ the originating event.
    ///
    /// W/out a registered `on_multi_select` callback, or on a single select picker,
    /// this reports exactly one [`Misconfiguration`] and changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SelectionError::MissingIdentifier`] if the entity is malformed.
    pub fn handle_multi_select(
        &mut self,
        entity: &E,
        current_selection: &SelectionSet<E>,
        event: InteractionEvent,
    ) -> SelectionResult<MultiToggleOutcome<E>> {
        let Some(callback) = self.on_multi_select.as_mut() else {
            let it = Misconfiguration::MissingMultiSelectCallback;
            report_misconfiguration(it);
            return Ok(MultiToggleOutcome::Ignored(it));
        };

        let outcome = self.controller.toggle_multi(entity, current_selection)?;
        if let MultiToggleOutcome::Toggled(next_selection) = &outcome {
            callback(next_selection.clone(), event);
        }
        Ok(outcome)
    }

    /// Derive the menu for the current update.
    ///
    /// # Errors
    ///
    /// See [`crate::compute_ordered_groups`].
    pub fn build_menu(
        &self,
        props: &SelectorProps<'_, E>,
        footer_render_props: &FooterRenderProps,
    ) -> SelectionResult<SelectorMenu<E>> {
        let ordered = self.controller.compute_ordered_groups(
            props.all_entities,
            props.member_entities,
            props.non_member_entities,
            props.selection,
        )?;

        let has_entities = ordered.has_entities();
        let is_multi = self.controller.mode().is_multi();
        let to_item = |entity: E| MenuItem {
            search_key: InlineString::from(entity.sort_key()),
            is_checked: props.selection.contains(&entity),
            is_preferred: entity.is_preferred(),
            is_multi,
            value: entity,
        };

        let groups = if has_entities {
            let (members, non_members) = ordered.into_tuple();
            vec![
                MenuGroup {
                    id: None,
                    label: None,
                    hide_group_label: true,
                    item_size: ItemSize::Default,
                    items: members.into_iter().map(&to_item).collect(),
                },
                MenuGroup {
                    id: Some(ui_str::NON_MEMBER_GROUP_ID),
                    label: Some(ui_str::NON_MEMBER_GROUP_LABEL),
                    hide_group_label: non_members.is_empty(),
                    item_size: ItemSize::Small,
                    items: non_members.into_iter().map(&to_item).collect(),
                },
            ]
        } else {
            vec![]
        };

        let target_path = ui_str::new_project_path(props.organization_slug);

        let add_action = AddEntityAction {
            label: ui_str::ADD_ACTION_LABEL,
            target_path: target_path.clone(),
            is_disabled: !props.has_write_permission,
            tooltip: (!props.has_write_permission)
                .then_some(ui_str::ADD_ACTION_NO_PERMISSION_TOOLTIP),
        };

        let footer = {
            let content = self.menu_footer.resolve(footer_render_props);
            let create_action = (!has_entities && props.has_write_permission)
                .then_some(CreateEntityAction {
                    label: ui_str::CREATE_ACTION_LABEL,
                    target_path,
                });
            (content.is_some() || create_action.is_some()).then_some(ResolvedFooter {
                create_action,
                content,
            })
        };

        Ok(SelectorMenu {
            groups,
            has_entities,
            is_multi,
            add_action,
            footer,
            search_placeholder: ui_str::SEARCH_PLACEHOLDER,
            empty_message: ui_str::EMPTY_MESSAGE,
            no_results_message: ui_str::NO_RESULTS_MESSAGE,
            empty_hides_input: !props.paginated,
            busy_items_still_visible: props.searching,
        })
    }
}
