use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{Collection, DocumentQuery, Result};

/// Core trait for document store implementations.
///
/// Every operation touches a single document and is atomic on its own.
/// Read-then-write sequences built from these calls are not.
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Inserts a new document.
    ///
    /// Fails with `DuplicateKey` if the key is already present.
    async fn insert(&self, collection: Collection, key: &str, document: Value) -> Result<()>;

    /// Inserts a document, replacing any existing document with the same key.
    async fn upsert(&self, collection: Collection, key: &str, document: Value) -> Result<()>;

    /// Retrieves a document by key.
    ///
    /// Returns None if no document exists.
    async fn find_one(&self, collection: Collection, key: &str) -> Result<Option<Value>>;

    /// Retrieves documents matching a query, in insertion order.
    async fn find(&self, collection: Collection, query: &DocumentQuery) -> Result<Vec<Value>>;

    /// Overwrites the given top-level fields of an existing document.
    ///
    /// Returns false if no document exists for the key.
    async fn update_fields(
        &self,
        collection: Collection,
        key: &str,
        fields: Map<String, Value>,
    ) -> Result<bool>;

    /// Deletes a document.
    ///
    /// Returns false if no document existed for the key.
    async fn delete(&self, collection: Collection, key: &str) -> Result<bool>;
}

/// Extension trait providing typed convenience methods for document stores.
#[async_trait]
pub trait DocumentStoreExt: DocumentStore {
    /// Serializes and inserts a record.
    async fn insert_record<T>(&self, collection: Collection, key: &str, record: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let document = serde_json::to_value(record)?;
        self.insert(collection, key, document).await
    }

    /// Serializes and upserts a record.
    async fn upsert_record<T>(&self, collection: Collection, key: &str, record: &T) -> Result<()>
    where
        T: Serialize + Sync,
    {
        let document = serde_json::to_value(record)?;
        self.upsert(collection, key, document).await
    }

    /// Loads and deserializes a record by key.
    async fn get_record<T>(&self, collection: Collection, key: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.find_one(collection, key).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Loads and deserializes every record matching a query.
    async fn find_records<T>(&self, collection: Collection, query: &DocumentQuery) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        self.find(collection, query)
            .await?
            .into_iter()
            .map(|document| serde_json::from_value(document).map_err(Into::into))
            .collect()
    }
}

// Blanket implementation for all DocumentStore implementations
impl<T: DocumentStore + ?Sized> DocumentStoreExt for T {}
