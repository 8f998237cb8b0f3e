// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// The user interaction that caused a selection change. It is handed back to the data
/// source along with the next selection, so it can tell eg: a checkbox click apart from
/// a keyboard toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, strum_macros::Display)]
pub enum InteractionEvent {
    /// Mouse click or tap on the item's checkbox.
    #[default]
    Pointer,
    /// Keyboard toggle, eg: space on the focused item.
    Keyboard,
    /// Not caused by the user, eg: replaying toggles from the command line.
    Programmatic,
}
