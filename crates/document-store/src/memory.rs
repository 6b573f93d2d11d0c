use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::{Collection, DocumentQuery, DocumentStore, Result, StoreError};

#[derive(Debug, Clone)]
struct StoredDocument {
    key: String,
    body: Value,
}

/// In-memory document store implementation.
///
/// Provides the same interface as the PostgreSQL implementation and keeps
/// documents of each collection in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<Collection, Vec<StoredDocument>>>>,
}

impl InMemoryDocumentStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of documents stored in a collection.
    pub async fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .await
            .get(&collection)
            .map_or(0, Vec::len)
    }

    /// Removes all documents from every collection.
    pub async fn clear(&self) {
        self.collections.write().await.clear();
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn insert(&self, collection: Collection, key: &str, document: Value) -> Result<()> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        if documents.iter().any(|d| d.key == key) {
            return Err(StoreError::DuplicateKey {
                collection,
                key: key.to_string(),
            });
        }

        documents.push(StoredDocument {
            key: key.to_string(),
            body: document,
        });
        Ok(())
    }

    async fn upsert(&self, collection: Collection, key: &str, document: Value) -> Result<()> {
        let mut collections = self.collections.write().await;
        let documents = collections.entry(collection).or_default();

        match documents.iter_mut().find(|d| d.key == key) {
            Some(existing) => existing.body = document,
            None => documents.push(StoredDocument {
                key: key.to_string(),
                body: document,
            }),
        }
        Ok(())
    }

    async fn find_one(&self, collection: Collection, key: &str) -> Result<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(&collection)
            .and_then(|documents| documents.iter().find(|d| d.key == key))
            .map(|d| d.body.clone()))
    }

    async fn find(&self, collection: Collection, query: &DocumentQuery) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        let Some(documents) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        let matching = documents
            .iter()
            .filter(|d| query.matches(&d.body))
            .map(|d| d.body.clone());

        Ok(match query.limit {
            Some(limit) => matching.take(limit).collect(),
            None => matching.collect(),
        })
    }

    async fn update_fields(
        &self,
        collection: Collection,
        key: &str,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let Some(existing) = collections
            .get_mut(&collection)
            .and_then(|documents| documents.iter_mut().find(|d| d.key == key))
        else {
            return Ok(false);
        };

        match existing.body.as_object_mut() {
            Some(body) => body.extend(fields),
            None => existing.body = Value::Object(fields),
        }
        Ok(true)
    }

    async fn delete(&self, collection: Collection, key: &str) -> Result<bool> {
        let mut collections = self.collections.write().await;
        let Some(documents) = collections.get_mut(&collection) else {
            return Ok(false);
        };

        let before = documents.len();
        documents.retain(|d| d.key != key);
        Ok(documents.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use serde_json::json;

    use super::*;
    use crate::DocumentStoreExt;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Note {
        title: String,
        pinned: bool,
    }

    #[tokio::test]
    async fn insert_and_find_one() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(Collection::Orders, "order_1", json!({"status": "created"}))
            .await
            .unwrap();

        let found = store.find_one(Collection::Orders, "order_1").await.unwrap();
        assert_eq!(found, Some(json!({"status": "created"})));
        assert_eq!(store.count(Collection::Orders).await, 1);
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_key() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(Collection::Orders, "order_1", json!({}))
            .await
            .unwrap();

        let result = store.insert(Collection::Orders, "order_1", json!({})).await;
        assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn collections_are_isolated() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(Collection::Carts, "same", json!({"kind": "cart"}))
            .await
            .unwrap();
        store
            .insert(Collection::Orders, "same", json!({"kind": "order"}))
            .await
            .unwrap();

        let cart = store.find_one(Collection::Carts, "same").await.unwrap();
        assert_eq!(cart, Some(json!({"kind": "cart"})));
        assert!(
            store
                .find_one(Collection::Services, "same")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn upsert_replaces_whole_document() {
        let store = InMemoryDocumentStore::new();
        store
            .upsert(Collection::Carts, "s1", json!({"a": 1, "b": 2}))
            .await
            .unwrap();
        store
            .upsert(Collection::Carts, "s1", json!({"a": 3}))
            .await
            .unwrap();

        let found = store.find_one(Collection::Carts, "s1").await.unwrap();
        assert_eq!(found, Some(json!({"a": 3})));
        assert_eq!(store.count(Collection::Carts).await, 1);
    }

    #[tokio::test]
    async fn update_fields_merges_top_level_fields() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(
                Collection::Orders,
                "order_1",
                json!({"status": "created", "amount": 100}),
            )
            .await
            .unwrap();

        let mut fields = Map::new();
        fields.insert("status".into(), json!("paid"));
        fields.insert("payment_id".into(), json!("pay_1"));
        let updated = store
            .update_fields(Collection::Orders, "order_1", fields)
            .await
            .unwrap();
        assert!(updated);

        let found = store.find_one(Collection::Orders, "order_1").await.unwrap();
        assert_eq!(
            found,
            Some(json!({"status": "paid", "amount": 100, "payment_id": "pay_1"}))
        );
    }

    #[tokio::test]
    async fn update_fields_on_missing_document_returns_false() {
        let store = InMemoryDocumentStore::new();
        let updated = store
            .update_fields(Collection::Orders, "missing", Map::new())
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(Collection::Carts, "s1", json!({}))
            .await
            .unwrap();

        assert!(store.delete(Collection::Carts, "s1").await.unwrap());
        assert!(!store.delete(Collection::Carts, "s1").await.unwrap());
        assert!(!store.delete(Collection::Orders, "s1").await.unwrap());
    }

    #[tokio::test]
    async fn find_filters_and_limits_in_insertion_order() {
        let store = InMemoryDocumentStore::new();
        for (key, active) in [("a", true), ("b", false), ("c", true), ("d", true)] {
            store
                .insert(Collection::Services, key, json!({"key": key, "is_active": active}))
                .await
                .unwrap();
        }

        let query = DocumentQuery::new().field_eq("is_active", true).limit(2);
        let found = store.find(Collection::Services, &query).await.unwrap();
        let keys: Vec<_> = found.iter().map(|d| d["key"].clone()).collect();
        assert_eq!(keys, vec![json!("a"), json!("c")]);
    }

    #[tokio::test]
    async fn typed_helpers_roundtrip_records() {
        let store = InMemoryDocumentStore::new();
        let note = Note {
            title: "hello".into(),
            pinned: true,
        };
        store
            .insert_record(Collection::StatusChecks, "n1", &note)
            .await
            .unwrap();

        let loaded: Option<Note> = store
            .get_record(Collection::StatusChecks, "n1")
            .await
            .unwrap();
        assert_eq!(loaded, Some(note));

        let all: Vec<Note> = store
            .find_records(Collection::StatusChecks, &DocumentQuery::new())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn clear_removes_everything() {
        let store = InMemoryDocumentStore::new();
        store
            .insert(Collection::Carts, "s1", json!({}))
            .await
            .unwrap();
        store.clear().await;
        assert_eq!(store.count(Collection::Carts).await, 0);
    }
}
