use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::PgPool;

use crate::{Collection, DocumentQuery, DocumentStore, Result, StoreError};

/// PostgreSQL-backed document store implementation.
///
/// Documents live in a single `documents` table as JSONB, keyed by
/// `(collection, key)`.
#[derive(Debug, Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    /// Creates a new PostgreSQL document store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    #[tracing::instrument(skip(self, document))]
    async fn insert(&self, collection: Collection, key: &str, document: Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, key, body)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(collection.as_str())
        .bind(key)
        .bind(&document)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some("documents_pkey")
            {
                return StoreError::DuplicateKey {
                    collection,
                    key: key.to_string(),
                };
            }
            StoreError::Database(e)
        })?;

        Ok(())
    }

    #[tracing::instrument(skip(self, document))]
    async fn upsert(&self, collection: Collection, key: &str, document: Value) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO documents (collection, key, body)
            VALUES ($1, $2, $3)
            ON CONFLICT (collection, key) DO UPDATE SET
                body = EXCLUDED.body,
                updated_at = NOW()
            "#,
        )
        .bind(collection.as_str())
        .bind(key)
        .bind(&document)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_one(&self, collection: Collection, key: &str) -> Result<Option<Value>> {
        let body: Option<Value> =
            sqlx::query_scalar("SELECT body FROM documents WHERE collection = $1 AND key = $2")
                .bind(collection.as_str())
                .bind(key)
                .fetch_optional(&self.pool)
                .await?;

        Ok(body)
    }

    async fn find(&self, collection: Collection, query: &DocumentQuery) -> Result<Vec<Value>> {
        // LIMIT NULL means no limit in Postgres
        let limit = query.limit.map(|l| l as i64);

        let bodies: Vec<Value> = sqlx::query_scalar(
            r#"
            SELECT body
            FROM documents
            WHERE collection = $1 AND body @> $2
            ORDER BY seq ASC
            LIMIT $3
            "#,
        )
        .bind(collection.as_str())
        .bind(query.filter_document())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(bodies)
    }

    #[tracing::instrument(skip(self, fields))]
    async fn update_fields(
        &self,
        collection: Collection,
        key: &str,
        fields: Map<String, Value>,
    ) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE documents
            SET body = body || $3, updated_at = NOW()
            WHERE collection = $1 AND key = $2
            "#,
        )
        .bind(collection.as_str())
        .bind(key)
        .bind(Value::Object(fields))
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete(&self, collection: Collection, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE collection = $1 AND key = $2")
            .bind(collection.as_str())
            .bind(key)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
