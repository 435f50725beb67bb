//! Keyed locks used to serialize read-modify-write cycles on one entity.
//!
//! The review lifecycle holds the lock for `restaurant:{id}` while it writes
//! a review and recomputes that restaurant's rating, so two writers on the
//! same restaurant cannot interleave their recomputes. Review creation and
//! visitor deletion also take `visitor:{id}` first, so a review cannot slip in
//! behind a visitor's cascade.

mod error;
mod in_memory;
mod lock_manager;

use std::sync::Arc;

use tracing::{trace, warn};

pub use error::LockError;
pub use in_memory::{InMemoryLock, InMemoryLockManager};
pub use lock_manager::LockManager;

/// One named lock. Holding it is not tied to a borrow, so a [`LockGuard`]
/// can span several store calls.
pub trait Lock: Send + Sync {
    /// Block until the lock is ours.
    fn acquire(&self) -> Result<(), LockError>;

    /// `Ok(false)` if somebody else holds it.
    fn try_acquire(&self) -> Result<bool, LockError>;

    fn release(&self) -> Result<(), LockError>;
}

/// An acquired lock. On drop it is released and handed back to its manager.
#[must_use = "the lock is released as soon as the guard is dropped"]
pub struct LockGuard<'a, M: LockManager> {
    manager: &'a M,
    key: String,
    lock: Option<Arc<M::Lock>>,
}

impl<'a, M: LockManager> LockGuard<'a, M> {
    pub fn acquire(manager: &'a M, key: impl Into<String>) -> Result<Self, LockError> {
        let key = key.into();
        let lock = manager.lock_for(&key)?;

        let acquired = match lock.try_acquire() {
            Ok(true) => Ok(()),
            Ok(false) => {
                trace!(key = %key, "lock contended");
                lock.acquire()
            }
            Err(e) => Err(e),
        };
        if let Err(e) = acquired {
            manager.retire(&key, lock);
            return Err(e);
        }

        Ok(Self {
            manager,
            key,
            lock: Some(lock),
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<M: LockManager> Drop for LockGuard<'_, M> {
    fn drop(&mut self) {
        let Some(lock) = self.lock.take() else {
            return;
        };
        if let Err(e) = lock.release() {
            warn!(key = %self.key, error = %e, "lock not released");
        }
        self.manager.retire(&self.key, lock);
    }
}
