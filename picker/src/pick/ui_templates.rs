// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{MenuGroup, MenuItem, Project, SelectionSet, SelectorMenu};

const PREFERRED_GLYPH: &str = "★";
const GROUP_RULE_GLYPH: &str = "──";

fn check_box(item: &MenuItem<Project>) -> &'static str {
    match (item.is_multi, item.is_checked) {
        (true, true) => "[x]",
        (true, false) => "[ ]",
        (false, true) => "(•)",
        (false, false) => "( )",
    }
}

fn render_group(acc: &mut String, group: &MenuGroup<Project>) {
    if let (false, Some(label)) = (group.hide_group_label, group.label) {
        _ = writeln!(acc, "{GROUP_RULE_GLYPH} {label} {GROUP_RULE_GLYPH}");
    }
    for item in &group.items {
        _ = writeln!(
            acc,
            "  {check} {star} {slug}",
            check = check_box(item),
            star = if item.is_preferred { PREFERRED_GLYPH } else { " " },
            slug = item.value.slug
        );
    }
}

/// Plain text rendering of the menu, followed by the selection in selection order.
#[must_use]
pub fn render_pick_result(
    menu: &SelectorMenu<Project>,
    selection: &SelectionSet<Project>,
) -> String {
    let mut acc = String::new();

    _ = write!(acc, "🔍 {}", menu.search_placeholder);
    match menu.add_action.tooltip {
        Some(tooltip) if menu.add_action.is_disabled => {
            _ = writeln!(acc, "  [+ {}] (disabled: {tooltip})", menu.add_action.label);
        }
        _ => {
            _ = writeln!(
                acc,
                "  [+ {}] {}",
                menu.add_action.label, menu.add_action.target_path
            );
        }
    }

    match menu.status_message() {
        Some(message) => {
            _ = writeln!(acc, "  {message}");
        }
        None => {
            for group in &menu.groups {
                render_group(&mut acc, group);
            }
        }
    }

    if let Some(footer) = &menu.footer {
        if let Some(create_action) = &footer.create_action {
            _ = writeln!(acc, "  [{}] {}", create_action.label, create_action.target_path);
        }
        if let Some(content) = &footer.content {
            _ = writeln!(acc, "  {content}");
        }
    }

    let selected: Vec<_> = selection.iter().map(|it| it.slug.as_str()).collect();
    _ = write!(acc, "Selected: {}", selected.join(", "));

    acc
}
