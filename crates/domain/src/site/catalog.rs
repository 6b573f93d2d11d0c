use common::RecordId;
use document_store::{Collection, DocumentQuery, DocumentStore, DocumentStoreExt};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const SERVICE_LIMIT: usize = 100;

/// A service offering shown on the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: RecordId,
    pub name: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub price_range: Option<String>,
    pub benefits: Vec<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Service {
    fn offering(name: &str, description: &str, duration: &str, benefits: [&str; 4]) -> Self {
        Self {
            id: RecordId::new(),
            name: name.to_string(),
            description: description.to_string(),
            duration: duration.to_string(),
            price_range: None,
            benefits: benefits.iter().map(|b| b.to_string()).collect(),
            is_active: true,
        }
    }
}

/// The four services listed when the store holds none, so a fresh
/// deployment has something to show. Ids are fresh on every call.
pub fn fallback_services() -> Vec<Service> {
    vec![
        Service::offering(
            "Energy Healing Sessions",
            "Personalized energy healing sessions to restore balance and promote natural healing.",
            "60-90 minutes",
            [
                "Stress relief",
                "Energy balance",
                "Emotional healing",
                "Physical wellness",
            ],
        ),
        Service::offering(
            "Group Meditation",
            "Join our weekly group meditation sessions for community healing and shared spiritual growth.",
            "45 minutes",
            [
                "Community connection",
                "Guided practice",
                "Spiritual growth",
                "Inner peace",
            ],
        ),
        Service::offering(
            "Chakra Balancing",
            "Specialized chakra alignment and balancing therapy to harmonize your energy centers.",
            "75 minutes",
            [
                "Energy alignment",
                "Chakra balance",
                "Spiritual clarity",
                "Physical vitality",
            ],
        ),
        Service::offering(
            "Wellness Consultation",
            "Comprehensive wellness assessment and personalized healing plan development.",
            "90 minutes",
            [
                "Personalized plan",
                "Holistic assessment",
                "Goal setting",
                "Ongoing support",
            ],
        ),
    ]
}

/// Read-only access to the service catalog.
#[derive(Debug, Clone)]
pub struct CatalogService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CatalogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists active services, or the fallback set if none are stored.
    #[tracing::instrument(skip(self))]
    pub async fn list_services(&self) -> Result<Vec<Service>, DomainError> {
        let query = DocumentQuery::limited(SERVICE_LIMIT).field_eq("is_active", true);
        let services: Vec<Service> = self
            .store
            .find_records(Collection::Services, &query)
            .await?;

        if services.is_empty() {
            tracing::debug!("no stored services, returning fallback set");
            return Ok(fallback_services());
        }
        Ok(services)
    }
}

#[cfg(test)]
mod tests {
    use document_store::InMemoryDocumentStore;

    use super::*;

    fn stored_service(name: &str, is_active: bool) -> Service {
        let mut service =
            Service::offering(name, "Stored offering.", "60 minutes", ["a", "b", "c", "d"]);
        service.is_active = is_active;
        service
    }

    #[test]
    fn fallback_set_has_four_named_services() {
        let names: Vec<String> = fallback_services().into_iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "Energy Healing Sessions",
                "Group Meditation",
                "Chakra Balancing",
                "Wellness Consultation"
            ]
        );
    }

    #[test]
    fn fallback_ids_are_fresh() {
        let a = fallback_services();
        let b = fallback_services();
        assert_ne!(a[0].id, b[0].id);
        assert!(a.iter().all(|s| s.is_active && s.benefits.len() == 4));
    }

    #[tokio::test]
    async fn empty_store_returns_fallback() {
        let catalog = CatalogService::new(InMemoryDocumentStore::new());
        let services = catalog.list_services().await.unwrap();
        assert_eq!(services.len(), 4);
    }

    #[tokio::test]
    async fn stored_active_services_replace_fallback() {
        let store = InMemoryDocumentStore::new();
        let mut reiki = stored_service("Reiki", true);
        reiki.price_range = Some("₹1500-₹2500".into());
        let retired = stored_service("Retired", false);

        for service in [&reiki, &retired] {
            store
                .insert_record(Collection::Services, &service.id.to_string(), service)
                .await
                .unwrap();
        }

        let catalog = CatalogService::new(store);
        let services = catalog.list_services().await.unwrap();
        assert_eq!(services, vec![reiki]);
    }

    #[tokio::test]
    async fn only_inactive_services_falls_back() {
        let store = InMemoryDocumentStore::new();
        let retired = stored_service("Retired", false);
        store
            .insert_record(Collection::Services, &retired.id.to_string(), &retired)
            .await
            .unwrap();

        let services = CatalogService::new(store).list_services().await.unwrap();
        assert_eq!(services.len(), 4);
        assert!(services.iter().all(|s| s.name != "Retired"));
    }
}
