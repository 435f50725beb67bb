use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LockError {
    /// A thread panicked while holding the lock's internal state.
    #[error("lock `{0}` is poisoned")]
    Poisoned(String),
    /// The lock backend could not be reached or refused the request.
    #[error("lock `{key}` unavailable: {reason}")]
    Unavailable { key: String, reason: String },
}
