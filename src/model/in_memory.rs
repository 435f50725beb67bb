use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{Model, ModelError, ModelStore};

/// One collection: encoded rows by key, plus its id sequence.
#[derive(Default)]
struct Table {
    rows: BTreeMap<String, Vec<u8>>,
    last_id: u64,
}

type Tables = HashMap<&'static str, Table>;

/// `ModelStore` kept in process memory. Rows are stored as JSON so a model
/// that does not round-trip through serde fails here, as it would in a real
/// backend.
///
/// Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryModelStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>, ModelError> {
        self.tables
            .read()
            .map_err(|_| ModelError::Storage("in-memory tables poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>, ModelError> {
        self.tables
            .write()
            .map_err(|_| ModelError::Storage("in-memory tables poisoned".into()))
    }
}

impl ModelStore for InMemoryModelStore {
    fn get_model<M: Model>(&self, key: &str) -> Result<Option<M>, ModelError> {
        let tables = self.read()?;
        let Some(bytes) = tables.get(M::COLLECTION).and_then(|t| t.rows.get(key)) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(bytes)?))
    }

    fn contains_model<M: Model>(&self, key: &str) -> Result<bool, ModelError> {
        let tables = self.read()?;
        Ok(tables
            .get(M::COLLECTION)
            .is_some_and(|t| t.rows.contains_key(key)))
    }

    fn save_model<M: Model>(&self, model: &M) -> Result<(), ModelError> {
        let bytes = serde_json::to_vec(model)?;
        let mut tables = self.write()?;
        tables
            .entry(M::COLLECTION)
            .or_default()
            .rows
            .insert(model.key(), bytes);
        Ok(())
    }

    fn delete_model<M: Model>(&self, key: &str) -> Result<bool, ModelError> {
        let mut tables = self.write()?;
        Ok(tables
            .get_mut(M::COLLECTION)
            .is_some_and(|t| t.rows.remove(key).is_some()))
    }

    fn find_models<M: Model>(
        &self,
        predicate: &dyn Fn(&M) -> bool,
    ) -> Result<Vec<M>, ModelError> {
        let tables = self.read()?;
        let Some(table) = tables.get(M::COLLECTION) else {
            return Ok(Vec::new());
        };

        let mut matches = Vec::new();
        for bytes in table.rows.values() {
            let model: M = serde_json::from_slice(bytes)?;
            if predicate(&model) {
                matches.push(model);
            }
        }
        Ok(matches)
    }

    fn next_id<M: Model>(&self) -> Result<u64, ModelError> {
        let mut tables = self.write()?;
        let table = tables.entry(M::COLLECTION).or_default();
        table.last_id += 1;
        Ok(table.last_id)
    }
}
