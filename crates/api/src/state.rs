//! Shared application state.

use std::sync::Arc;

use checkout::{
    CheckoutError, DemoGateway, EmailNotifier, LogNotifier, Notifier, OrderWorkflow,
    PaymentGateway, RazorpayGateway,
};
use document_store::DocumentStore;
use domain::{CartService, CatalogService, ContactService, StatusService};

use crate::config::Config;

/// Shared application state accessible from all handlers.
///
/// Built once at startup and never mutated.
pub struct AppState<S: DocumentStore> {
    pub carts: CartService<S>,
    pub orders: OrderWorkflow<S>,
    pub contact: ContactService<S>,
    pub catalog: CatalogService<S>,
    pub status: StatusService<S>,
    pub notifier: Arc<dyn Notifier>,
    /// Recipient of new-inquiry alerts, if any.
    pub admin_email: Option<String>,
}

/// The external collaborators chosen for this process.
#[derive(Clone)]
pub struct Collaborators {
    pub gateway: Arc<dyn PaymentGateway>,
    pub notifier: Arc<dyn Notifier>,
}

impl Collaborators {
    /// Demo gateway and logging notifier; needs no credentials.
    pub fn demo() -> Self {
        Self {
            gateway: Arc::new(DemoGateway::new()),
            notifier: Arc::new(LogNotifier::new()),
        }
    }
}

/// Picks real or demo collaborators from the configured credentials.
pub fn build_collaborators(config: &Config) -> Result<Collaborators, CheckoutError> {
    let gateway: Arc<dyn PaymentGateway> = match &config.razorpay {
        Some(razorpay) => Arc::new(RazorpayGateway::new(razorpay.clone())?),
        None => {
            tracing::warn!("payment gateway credentials not configured, running in demo mode");
            Arc::new(DemoGateway::new())
        }
    };

    let notifier: Arc<dyn Notifier> = match &config.email {
        Some(email) => Arc::new(EmailNotifier::new(email.clone())?),
        None => {
            tracing::warn!("email API not configured, notifications will only be logged");
            Arc::new(LogNotifier::new())
        }
    };

    tracing::info!(gateway = gateway.name(), "collaborators selected");
    Ok(Collaborators { gateway, notifier })
}

/// Creates the application state over `store`.
pub fn create_state<S: DocumentStore + Clone>(
    store: S,
    collaborators: Collaborators,
    admin_email: Option<String>,
) -> Arc<AppState<S>> {
    let Collaborators { gateway, notifier } = collaborators;

    Arc::new(AppState {
        carts: CartService::new(store.clone()),
        orders: OrderWorkflow::new(store.clone(), gateway, Arc::clone(&notifier)),
        contact: ContactService::new(store.clone()),
        catalog: CatalogService::new(store.clone()),
        status: StatusService::new(store),
        notifier,
        admin_email,
    })
}
