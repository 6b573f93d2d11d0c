//! Document store for the storefront backend.
//!
//! Records are schemaless JSON documents grouped into [`Collection`]s and
//! addressed by a string key. Only single-document operations are atomic;
//! there are no joins and no cross-collection transactions.

pub mod collection;
pub mod error;
pub mod memory;
pub mod postgres;
pub mod query;
pub mod store;

pub use collection::Collection;
pub use error::{Result, StoreError};
pub use memory::InMemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use query::DocumentQuery;
pub use store::{DocumentStore, DocumentStoreExt};
