//! Shared test utilities for unit tests.
//!
//! Only compiled during testing (`#[cfg(test)]`).

use std::sync::Mutex;
use tempfile::TempDir;

/// Serializes tests that modify the APPDATA environment variable.
static APPDATA_LOCK: Mutex<()> = Mutex::new(());

/// Create a temporary test directory that is removed when dropped.
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// RAII guard that points APPDATA at a temp directory for one test and
/// restores the original value when dropped.
///
/// # Safety Considerations
///
/// `std::env::set_var` and `std::env::remove_var` are unsafe because another
/// thread may read the environment concurrently. The guard holds
/// `APPDATA_LOCK` for its whole lifetime, so tests touching APPDATA run one
/// at a time, and each test gets its own `TempDir`.
pub struct AppdataGuard {
    original: Option<String>,
    _lock: std::sync::MutexGuard<'static, ()>,
}

#[expect(
    unsafe_code,
    reason = "Test-only code that modifies environment variables under APPDATA_LOCK"
)]
impl AppdataGuard {
    /// Create a new guard that sets APPDATA to the given temp directory path.
    pub fn new(temp_dir: &TempDir) -> Self {
        // A panicking test poisons the lock; the guarded value is `()` so it is safe to reuse.
        let lock = APPDATA_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);

        let original = std::env::var("APPDATA").ok();
        // SAFETY: APPDATA_LOCK is held, so no other test mutates the environment concurrently.
        unsafe {
            std::env::set_var("APPDATA", temp_dir.path());
        }
        Self {
            original,
            _lock: lock,
        }
    }
}

#[expect(
    unsafe_code,
    reason = "Test-only code that restores environment variables under APPDATA_LOCK"
)]
impl Drop for AppdataGuard {
    fn drop(&mut self) {
        // SAFETY: the lock is still held until `_lock` drops after this body.
        if let Some(ref original) = self.original {
            unsafe {
                std::env::set_var("APPDATA", original);
            }
        } else {
            unsafe {
                std::env::remove_var("APPDATA");
            }
        }
    }
}
