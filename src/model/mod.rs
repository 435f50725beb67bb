//! Models: keyed, serde-encoded rows grouped into collections.
//!
//! Restaurants, visitors and reviews are all `Model`s. A `ModelStore` keeps
//! one table per collection, and `ModelsExt::models::<M>()` narrows a store to
//! a typed view of a single table.
//!
//! ```ignore
//! use restaurant_ratings::model::{InMemoryModelStore, ModelsExt};
//!
//! let store = InMemoryModelStore::new();
//! let id = store.models::<Visitor>().next_id()?;
//! store.models::<Visitor>().save(&Visitor::create(id, fields))?;
//! let visitor = store.models::<Visitor>().get(&id.to_string())?;
//! ```

mod in_memory;
mod model_repository;
mod store;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

pub use in_memory::InMemoryModelStore;
pub use model_repository::{ModelRepository, ModelsExt};
pub use store::ModelStore;

/// A row type. `COLLECTION` names its table, `key` its primary key.
pub trait Model: Serialize + DeserializeOwned + Clone + Send + Sync {
    const COLLECTION: &'static str;

    fn key(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// A row could not be encoded or decoded.
    #[error("model serialization error: {0}")]
    Serde(String),
    /// The backing storage failed.
    #[error("model storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::Serde(err.to_string())
    }
}
