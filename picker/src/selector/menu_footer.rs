// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Debug, Formatter};

use crate::InlineString;

/// What the footer render function gets to look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FooterRenderProps {
    pub is_open: bool,
    pub input_value: InlineString,
}

pub type FooterRenderFn<'a> = Box<dyn Fn(&FooterRenderProps) -> Option<String> + 'a>;

/// Caller supplied content shown at the bottom of the menu. The variant is decided once,
/// when the caller builds it, and [`MenuFooter::resolve`] runs once per menu build.
#[derive(Default)]
pub enum MenuFooter<'a> {
    #[default]
    None,
    StaticContent(String),
    RenderFunction(FooterRenderFn<'a>),
}

impl<'a> MenuFooter<'a> {
    pub fn render_fn(
        render_fn: impl Fn(&FooterRenderProps) -> Option<String> + 'a,
    ) -> Self {
        MenuFooter::RenderFunction(Box::new(render_fn))
    }

    #[must_use]
    pub fn resolve(&self, props: &FooterRenderProps) -> Option<String> {
        match self {
            MenuFooter::None => None,
            MenuFooter::StaticContent(content) => Some(content.clone()),
            MenuFooter::RenderFunction(render_fn) => render_fn(props),
        }
    }
}

impl Debug for MenuFooter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MenuFooter::None => write!(f, "None"),
            MenuFooter::StaticContent(content) => {
                f.debug_tuple("StaticContent").field(content).finish()
            }
            MenuFooter::RenderFunction(_) => write!(f, "RenderFunction"),
        }
    }
}

impl From<&str> for MenuFooter<'_> {
    fn from(content: &str) -> Self { MenuFooter::StaticContent(content.to_string()) }
}

impl From<String> for MenuFooter<'_> {
    fn from(content: String) -> Self { MenuFooter::StaticContent(content) }
}
