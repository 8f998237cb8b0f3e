// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::Debug,
          sync::{Arc, Mutex}};

use tracing::{Event, Level, Subscriber,
              field::{Field, Visit}};
use tracing_subscriber::{Layer, layer::{Context, SubscriberExt as _}};

/// A [`Layer`] that records the message of every warning level event. Use
/// [`DiagnosticCapture::run`] to collect the warnings emitted by a closure, on the
/// current thread only, so tests running in parallel don't see each other's output.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCapture {
    warnings: Arc<Mutex<Vec<String>>>,
}

impl DiagnosticCapture {
    pub fn run<T>(&self, block: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::registry().with(self.clone());
        tracing::subscriber::with_default(subscriber, block)
    }

    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings
            .lock()
            .map(|it| it.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn warning_count(&self) -> usize { self.warnings().len() }
}

impl<S: Subscriber> Layer<S> for DiagnosticCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        if let Ok(mut warnings) = self.warnings.lock() {
            warnings.push(visitor.message);
        }
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}
