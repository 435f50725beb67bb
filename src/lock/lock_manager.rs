use std::sync::Arc;

use super::{Lock, LockError, LockGuard};

/// Hands out one lock per key.
///
/// `InMemoryLockManager` covers a single process. Several server instances
/// sharing a database would need a manager backed by a shared lock service.
pub trait LockManager: Send + Sync + Sized {
    type Lock: Lock;

    /// The lock for `key`. Callers holding or waiting on a key all get the
    /// same lock.
    fn lock_for(&self, key: &str) -> Result<Arc<Self::Lock>, LockError>;

    /// Take back a handle from `lock_for` once its holder is done with it.
    /// Managers that cache locks use this to forget idle keys.
    fn retire(&self, _key: &str, _lock: Arc<Self::Lock>) {}

    fn acquire(&self, key: &str) -> Result<LockGuard<'_, Self>, LockError> {
        LockGuard::acquire(self, key)
    }
}
