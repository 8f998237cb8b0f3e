// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{ops::Deref,
          path::{Path, PathBuf},
          sync::atomic::{AtomicUsize, Ordering}};

use miette::IntoDiagnostic as _;

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// A folder under the system temp folder, deleted (w/ its contents) on drop.
#[derive(Debug)]
pub struct TempDir {
    pub inner: PathBuf,
}

impl TempDir {
    #[must_use]
    pub fn join<P: AsRef<Path>>(&self, path: P) -> PathBuf { self.inner.join(path) }
}

/// Create a fresh, empty [`TempDir`]. Hold on to it for as long as the folder is needed.
///
/// # Errors
///
/// Returns an error if the folder can't be created.
pub fn try_create_temp_dir() -> miette::Result<TempDir> {
    let id = TEMP_DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    let inner = std::env::temp_dir().join(format!(
        "picker_test_{pid}_{id}",
        pid = std::process::id()
    ));
    std::fs::create_dir_all(&inner).into_diagnostic()?;
    Ok(TempDir { inner })
}

impl Drop for TempDir {
    fn drop(&mut self) {
        // Nothing useful to do if this fails.
        std::fs::remove_dir_all(&self.inner).ok();
    }
}

impl Deref for TempDir {
    type Target = PathBuf;

    fn deref(&self) -> &Self::Target { &self.inner }
}
