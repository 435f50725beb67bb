use super::{Model, ModelError};

/// Row storage, one table per `Model::COLLECTION`.
///
/// Writes are upserts keyed by `Model::key`. Consistency across several calls
/// is the caller's business (see `crate::lock`).
pub trait ModelStore: Send + Sync {
    fn get_model<M: Model>(&self, key: &str) -> Result<Option<M>, ModelError>;

    /// Like `get_model` but skips decoding.
    fn contains_model<M: Model>(&self, key: &str) -> Result<bool, ModelError>;

    fn save_model<M: Model>(&self, model: &M) -> Result<(), ModelError>;

    /// Returns whether a row was removed.
    fn delete_model<M: Model>(&self, key: &str) -> Result<bool, ModelError>;

    /// Rows of `M` accepted by `predicate`, in key order.
    fn find_models<M: Model>(&self, predicate: &dyn Fn(&M) -> bool)
        -> Result<Vec<M>, ModelError>;

    /// Next value of the table's id sequence. Starts at 1 and never repeats,
    /// even after deletes.
    fn next_id<M: Model>(&self) -> Result<u64, ModelError>;
}
