use std::collections::HashMap;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use tracing::trace;

use super::{Lock, LockError, LockManager};

/// A process-local lock: a `held` flag behind a `Mutex`, with a `Condvar`
/// to park waiters until the holder releases it.
pub struct InMemoryLock {
    key: String,
    held: Mutex<bool>,
    freed: Condvar,
}

impl InMemoryLock {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            held: Mutex::new(false),
            freed: Condvar::new(),
        }
    }

    fn poisoned(&self) -> LockError {
        LockError::Poisoned(self.key.clone())
    }

    fn state(&self) -> Result<MutexGuard<'_, bool>, LockError> {
        self.held.lock().map_err(|_| self.poisoned())
    }
}

impl Lock for InMemoryLock {
    fn acquire(&self) -> Result<(), LockError> {
        let mut held = self.state()?;
        if *held {
            trace!(key = %self.key, "waiting for lock");
            held = self
                .freed
                .wait_while(held, |held| *held)
                .map_err(|_| self.poisoned())?;
        }
        *held = true;
        Ok(())
    }

    fn try_acquire(&self) -> Result<bool, LockError> {
        let mut held = self.state()?;
        let was_held = std::mem::replace(&mut *held, true);
        Ok(!was_held)
    }

    fn release(&self) -> Result<(), LockError> {
        *self.state()? = false;
        self.freed.notify_one();
        Ok(())
    }
}

/// Creates a lock when a key is first asked for and forgets it once no
/// holder or waiter is left, so the map only ever contains busy keys.
#[derive(Default)]
pub struct InMemoryLockManager {
    locks: Mutex<HashMap<String, Arc<InMemoryLock>>>,
}

impl InMemoryLockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently held or waited on.
    pub fn len(&self) -> usize {
        self.table().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The map only holds `Arc`s, so a panic elsewhere cannot leave it torn.
    fn table(&self) -> MutexGuard<'_, HashMap<String, Arc<InMemoryLock>>> {
        self.locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl LockManager for InMemoryLockManager {
    type Lock = InMemoryLock;

    fn lock_for(&self, key: &str) -> Result<Arc<InMemoryLock>, LockError> {
        let mut locks = self.table();
        let lock = locks
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(InMemoryLock::new(key)));
        Ok(Arc::clone(lock))
    }

    fn retire(&self, key: &str, lock: Arc<InMemoryLock>) {
        // Handles are cloned and dropped under the map mutex, so a count of
        // one means the map holds the last reference.
        let mut locks = self.table();
        drop(lock);
        if locks.get(key).is_some_and(|l| Arc::strong_count(l) == 1) {
            locks.remove(key);
        }
    }
}
