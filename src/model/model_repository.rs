use std::marker::PhantomData;

use super::{Model, ModelError, ModelStore};

/// A store narrowed to the table of one model type.
pub struct ModelRepository<'a, S, M> {
    store: &'a S,
    _model: PhantomData<M>,
}

impl<'a, S: ModelStore, M: Model> ModelRepository<'a, S, M> {
    pub fn new(store: &'a S) -> Self {
        Self {
            store,
            _model: PhantomData,
        }
    }

    pub fn get(&self, key: &str) -> Result<Option<M>, ModelError> {
        self.store.get_model(key)
    }

    pub fn exists(&self, key: &str) -> Result<bool, ModelError> {
        self.store.contains_model::<M>(key)
    }

    /// Upsert and hand back what was written.
    pub fn save(&self, model: &M) -> Result<M, ModelError> {
        self.store.save_model(model)?;
        Ok(model.clone())
    }

    pub fn delete(&self, key: &str) -> Result<bool, ModelError> {
        self.store.delete_model::<M>(key)
    }

    pub fn find(&self, predicate: &dyn Fn(&M) -> bool) -> Result<Vec<M>, ModelError> {
        self.store.find_models(predicate)
    }

    pub fn all(&self) -> Result<Vec<M>, ModelError> {
        self.find(&|_| true)
    }

    pub fn next_id(&self) -> Result<u64, ModelError> {
        self.store.next_id::<M>()
    }
}

/// `store.models::<Restaurant>()` on any `ModelStore`.
pub trait ModelsExt: ModelStore + Sized {
    fn models<M: Model>(&self) -> ModelRepository<'_, Self, M> {
        ModelRepository::new(self)
    }
}

impl<S: ModelStore> ModelsExt for S {}
