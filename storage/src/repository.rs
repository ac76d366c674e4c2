//! Repository abstraction and a list repository that keeps all records of one kind under a single key.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::error::StorageError;
use crate::kv::{load_json, save_json, KeyValueStore};

/// Anything stored by id.
pub trait Record {
    fn id(&self) -> &str;
}

#[async_trait]
pub trait Repository<T> {
    /// Inserts or replaces by id.
    async fn save(&self, entity: &T) -> Result<(), StorageError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StorageError>;
    async fn find_all(&self) -> Result<Vec<T>, StorageError>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: &str) -> Result<bool, StorageError>;
}

/// JSON array under one key. New records go to the front; updates keep their position.
pub struct JsonListRepository<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for JsonListRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            key: self.key.clone(),
            _record: PhantomData,
        }
    }
}

impl<T> JsonListRepository<T>
where
    T: Record + Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    async fn load(&self) -> Result<Vec<T>, StorageError> {
        Ok(load_json(self.store.as_ref(), &self.key)
            .await?
            .unwrap_or_default())
    }

    async fn store_all(&self, records: &[T]) -> Result<(), StorageError> {
        save_json(self.store.as_ref(), &self.key, records).await
    }
}

#[async_trait]
impl<T> Repository<T> for JsonListRepository<T>
where
    T: Record + Clone + Serialize + DeserializeOwned + Send + Sync,
{
    async fn save(&self, entity: &T) -> Result<(), StorageError> {
        let mut records = self.load().await?;
        match records.iter_mut().find(|r| r.id() == entity.id()) {
            Some(existing) => *existing = entity.clone(),
            None => records.insert(0, entity.clone()),
        }
        debug!(key = %self.key, id = %entity.id(), count = records.len(), "repository: record saved");
        self.store_all(&records).await
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<T>, StorageError> {
        Ok(self.load().await?.into_iter().find(|r| r.id() == id))
    }

    async fn find_all(&self) -> Result<Vec<T>, StorageError> {
        self.load().await
    }

    async fn delete(&self, id: &str) -> Result<bool, StorageError> {
        let mut records = self.load().await?;
        let before = records.len();
        records.retain(|r| r.id() != id);
        if records.len() == before {
            return Ok(false);
        }
        self.store_all(&records).await?;
        debug!(key = %self.key, id = %id, "repository: record deleted");
        Ok(true)
    }
}
