//! Shared test utilities for unit tests.
//!
//! This module provides common test infrastructure used across multiple test modules.
//! It is only compiled during testing (`#[cfg(test)]`).

use crate::config::HOME_ENV;
use std::ffi::OsString;
use std::path::Path;
use std::sync::Mutex;
use tempfile::TempDir;

/// Global mutex to serialize tests that modify `ARTICLE_PARAMS_HOME`.
static HOME_LOCK: Mutex<()> = Mutex::new(());

/// Helper function to create a temporary test directory using tempfile.
/// Returns a `TempDir` that automatically cleans up when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points `ARTICLE_PARAMS_HOME` at a test directory
/// and restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because other threads
/// may read the environment concurrently. The `HOME_LOCK` mutex is held for the
/// guard's lifetime, so tests touching the variable run one at a time, and every
/// test gets its own `TempDir`.
pub struct HomeGuard {
    original: Option<OsString>,
    // Held for the guard's lifetime to keep access to the variable exclusive
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under HOME_LOCK"
)]
impl HomeGuard {
    /// Point the config home at `temp_dir`
    pub fn new(temp_dir: &TempDir) -> Self {
        Self::with_path(temp_dir.path())
    }

    /// Point the config home at an arbitrary path
    pub fn with_path(path: &Path) -> Self {
        // A panicking test poisons the lock; the guarded data is `()`, so recover it
        let lock = HOME_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var_os(HOME_ENV);
        // SAFETY: HOME_LOCK serializes all writers; see struct docs.
        unsafe {
            std::env::set_var(HOME_ENV, path);
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under HOME_LOCK"
)]
impl Drop for HomeGuard {
    fn drop(&mut self) {
        // SAFETY: still holding HOME_LOCK; restoring the pre-test value.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var(HOME_ENV, original);
            }
        } else {
            unsafe {
                std::env::remove_var(HOME_ENV);
            }
        }
    }
}

