//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency.
//! Run with:
//!
//! ```bash
//! cargo test -p document-store --test postgres_integration -- --test-threads=1
//! ```

use std::sync::Arc;

use document_store::{
    Collection, DocumentQuery, DocumentStore, DocumentStoreExt, PostgresDocumentStore, StoreError,
};
use serde_json::{Map, json};
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            let temp_pool = PgPool::connect(&connection_string).await.unwrap();
            PostgresDocumentStore::new(temp_pool.clone())
                .run_migrations()
                .await
                .unwrap();
            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and an empty documents table
async fn get_test_store() -> PostgresDocumentStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE documents")
        .execute(&pool)
        .await
        .unwrap();

    PostgresDocumentStore::new(pool)
}

#[tokio::test]
#[serial]
async fn insert_and_find_one() {
    let store = get_test_store().await;

    store
        .insert(
            Collection::Orders,
            "order_abc",
            json!({"order_id": "order_abc", "status": "created"}),
        )
        .await
        .unwrap();

    let found = store
        .find_one(Collection::Orders, "order_abc")
        .await
        .unwrap();
    assert_eq!(
        found,
        Some(json!({"order_id": "order_abc", "status": "created"}))
    );

    let missing = store.find_one(Collection::Carts, "order_abc").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
#[serial]
async fn duplicate_insert_is_rejected() {
    let store = get_test_store().await;

    store
        .insert(Collection::Orders, "order_dup", json!({}))
        .await
        .unwrap();
    let result = store
        .insert(Collection::Orders, "order_dup", json!({}))
        .await;

    assert!(matches!(result, Err(StoreError::DuplicateKey { .. })));
}

#[tokio::test]
#[serial]
async fn upsert_replaces_document() {
    let store = get_test_store().await;

    store
        .upsert(Collection::Carts, "default", json!({"items": [1, 2]}))
        .await
        .unwrap();
    store
        .upsert(Collection::Carts, "default", json!({"items": []}))
        .await
        .unwrap();

    let found = store.find_one(Collection::Carts, "default").await.unwrap();
    assert_eq!(found, Some(json!({"items": []})));
}

#[tokio::test]
#[serial]
async fn update_fields_merges_into_body() {
    let store = get_test_store().await;

    store
        .insert(
            Collection::Orders,
            "order_pay",
            json!({"status": "created", "total_amount": 150000}),
        )
        .await
        .unwrap();

    let mut fields = Map::new();
    fields.insert("status".into(), json!("paid"));
    fields.insert("payment_id".into(), json!("pay_123"));
    assert!(
        store
            .update_fields(Collection::Orders, "order_pay", fields)
            .await
            .unwrap()
    );

    let found = store
        .find_one(Collection::Orders, "order_pay")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found["status"], "paid");
    assert_eq!(found["payment_id"], "pay_123");
    assert_eq!(found["total_amount"], 150000);

    assert!(
        !store
            .update_fields(Collection::Orders, "order_missing", Map::new())
            .await
            .unwrap()
    );
}

#[tokio::test]
#[serial]
async fn delete_reports_whether_a_row_was_removed() {
    let store = get_test_store().await;

    store
        .insert(Collection::Carts, "s1", json!({}))
        .await
        .unwrap();

    assert!(store.delete(Collection::Carts, "s1").await.unwrap());
    assert!(!store.delete(Collection::Carts, "s1").await.unwrap());
}

#[tokio::test]
#[serial]
async fn find_uses_containment_filter_and_limit() {
    let store = get_test_store().await;

    for (key, active) in [("svc1", true), ("svc2", false), ("svc3", true)] {
        store
            .insert(
                Collection::Services,
                key,
                json!({"id": key, "is_active": active}),
            )
            .await
            .unwrap();
    }

    let active: Vec<serde_json::Value> = store
        .find_records(
            Collection::Services,
            &DocumentQuery::new().field_eq("is_active", true),
        )
        .await
        .unwrap();
    assert_eq!(active.len(), 2);
    assert_eq!(active[0]["id"], "svc1");
    assert_eq!(active[1]["id"], "svc3");

    let limited = store
        .find(Collection::Services, &DocumentQuery::limited(1))
        .await
        .unwrap();
    assert_eq!(limited.len(), 1);
}
