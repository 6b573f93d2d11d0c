use chrono::{DateTime, Utc};
use common::RecordId;
use document_store::{Collection, DocumentQuery, DocumentStore, DocumentStoreExt};
use serde::{Deserialize, Serialize};

use super::LIST_LIMIT;
use crate::error::DomainError;

/// Liveness check submitted by a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStatusCheck {
    pub client_name: String,
}

/// Stored liveness check record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: RecordId,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct StatusService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> StatusService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    #[tracing::instrument(skip(self))]
    pub async fn record(&self, submission: NewStatusCheck) -> Result<StatusCheck, DomainError> {
        let check = StatusCheck {
            id: RecordId::new(),
            client_name: submission.client_name,
            timestamp: Utc::now(),
        };

        self.store
            .insert_record(Collection::StatusChecks, &check.id.to_string(), &check)
            .await?;
        Ok(check)
    }

    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<StatusCheck>, DomainError> {
        Ok(self
            .store
            .find_records(Collection::StatusChecks, &DocumentQuery::limited(LIST_LIMIT))
            .await?)
    }
}
