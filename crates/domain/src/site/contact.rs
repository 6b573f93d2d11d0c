use chrono::{DateTime, Utc};
use common::RecordId;
use document_store::{Collection, DocumentQuery, DocumentStore, DocumentStoreExt};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::LIST_LIMIT;
use crate::error::{DomainError, ValidationError};

/// Processing status of an inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InquiryStatus {
    #[default]
    New,
}

/// Contact-form submission as received from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct NewContactInquiry {
    #[validate(length(min = 2, max = 100, message = "must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = 20, message = "must be at most 20 characters"))]
    pub phone: Option<String>,
    #[validate(length(min = 5, max = 200, message = "must be between 5 and 200 characters"))]
    pub subject: String,
    #[validate(length(min = 10, max = 1000, message = "must be between 10 and 1000 characters"))]
    pub message: String,
    #[serde(default)]
    pub service_interest: Option<String>,
}

/// Stored contact inquiry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInquiry {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub service_interest: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: InquiryStatus,
}

impl ContactInquiry {
    fn from_submission(submission: NewContactInquiry) -> Self {
        Self {
            id: RecordId::new(),
            name: submission.name,
            email: submission.email.trim().to_string(),
            phone: submission.phone,
            subject: submission.subject,
            message: submission.message,
            service_interest: submission.service_interest,
            timestamp: Utc::now(),
            status: InquiryStatus::New,
        }
    }
}

/// Captures and lists contact-form submissions.
#[derive(Debug, Clone)]
pub struct ContactService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> ContactService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates and stores a submission.
    #[tracing::instrument(skip(self, submission))]
    pub async fn submit(
        &self,
        submission: NewContactInquiry,
    ) -> Result<ContactInquiry, DomainError> {
        submission.validate().map_err(ValidationError::from)?;
        let inquiry = ContactInquiry::from_submission(submission);

        self.store
            .insert_record(
                Collection::ContactInquiries,
                &inquiry.id.to_string(),
                &inquiry,
            )
            .await?;
        tracing::info!(inquiry_id = %inquiry.id, "contact inquiry stored");

        Ok(inquiry)
    }

    /// Lists stored inquiries, oldest first.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ContactInquiry>, DomainError> {
        Ok(self
            .store
            .find_records(
                Collection::ContactInquiries,
                &DocumentQuery::limited(LIST_LIMIT),
            )
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use document_store::InMemoryDocumentStore;

    use super::*;

    fn submission() -> NewContactInquiry {
        NewContactInquiry {
            name: "Meera".into(),
            email: "meera@example.com".into(),
            phone: Some("+91 98765 43210".into()),
            subject: "Chakra session".into(),
            message: "I would like to book a session next week.".into(),
            service_interest: Some("Chakra Balancing".into()),
        }
    }

    fn rejected_field(s: &NewContactInquiry) -> Option<String> {
        match s.validate().map_err(ValidationError::from) {
            Err(ValidationError::Field { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn short_name_is_rejected() {
        let mut s = submission();
        s.name = "M".into();
        assert_eq!(
            s.validate().map_err(ValidationError::from),
            Err(ValidationError::Field {
                field: "name".to_string(),
                message: "must be between 2 and 100 characters".to_string(),
            })
        );
    }

    #[test]
    fn lengths_count_surrounding_whitespace() {
        let mut s = submission();
        s.name = " M ".into();
        assert!(s.validate().is_ok());
    }

    #[test]
    fn short_message_is_rejected() {
        let mut s = submission();
        s.message = "hi".into();
        assert_eq!(rejected_field(&s).as_deref(), Some("message"));
    }

    #[test]
    fn long_phone_is_rejected() {
        let mut s = submission();
        s.phone = Some("1".repeat(21));
        assert_eq!(rejected_field(&s).as_deref(), Some("phone"));

        s.phone = None;
        assert!(s.validate().is_ok());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for email in [
            "",
            "meera",
            "@example.com",
            "meera@",
            "a b@x.io",
            "a@b@c.io",
            "meera@example..com",
            "<x>@example.com",
            "a@exa_mple.com",
            "a@-.io",
        ] {
            let mut s = submission();
            s.email = email.into();
            assert_eq!(
                rejected_field(&s).as_deref(),
                Some("email"),
                "{email:?} should be rejected"
            );
        }
    }

    #[test]
    fn first_failing_field_is_reported_in_name_order() {
        let mut s = submission();
        s.subject = "Hi".into();
        s.email = "nope".into();
        assert_eq!(rejected_field(&s).as_deref(), Some("email"));
    }

    #[tokio::test]
    async fn submit_stores_inquiry_with_new_status() {
        let service = ContactService::new(InMemoryDocumentStore::new());

        let inquiry = service.submit(submission()).await.unwrap();
        assert_eq!(inquiry.status, InquiryStatus::New);

        let all = service.list().await.unwrap();
        assert_eq!(all, vec![inquiry]);
    }

    #[tokio::test]
    async fn invalid_submission_is_not_stored() {
        let store = InMemoryDocumentStore::new();
        let service = ContactService::new(store.clone());

        let mut s = submission();
        s.subject = "Hi".into();
        assert!(matches!(
            service.submit(s).await,
            Err(DomainError::Validation(_))
        ));
        assert_eq!(store.count(Collection::ContactInquiries).await, 0);
    }
}
