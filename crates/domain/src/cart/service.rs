use common::SessionId;
use document_store::{Collection, DocumentStore, DocumentStoreExt};

use super::{Cart, CartItem};
use crate::error::DomainError;

/// Cart manager: owns per-session cart state and total computation.
///
/// Carts are stored under their session id. Read-modify-write sequences are
/// not locked; concurrent adds for the same session can race.
#[derive(Debug, Clone)]
pub struct CartService<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> CartService<S> {
    /// Creates a new cart service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Adds an item to the session's cart, creating the cart if needed.
    #[tracing::instrument(skip(self, item), fields(product_id = %item.product_id, quantity = item.quantity))]
    pub async fn add_item(
        &self,
        session_id: &SessionId,
        item: CartItem,
    ) -> Result<Cart, DomainError> {
        let cart = match self.load(session_id).await? {
            Some(mut cart) => {
                cart.add_item(item)?;
                cart
            }
            None => {
                tracing::debug!("creating cart for session");
                Cart::with_item(session_id.clone(), item)?
            }
        };

        self.store
            .upsert_record(Collection::Carts, session_id.as_str(), &cart)
            .await?;
        metrics::counter!("cart_items_added_total").increment(1);

        Ok(cart)
    }

    /// Returns the session's cart, or an unsaved empty cart if none exists.
    #[tracing::instrument(skip(self))]
    pub async fn get_cart(&self, session_id: &SessionId) -> Result<Cart, DomainError> {
        Ok(self
            .load(session_id)
            .await?
            .unwrap_or_else(|| Cart::empty(session_id.clone())))
    }

    /// Deletes the session's cart. Clearing a missing cart succeeds.
    #[tracing::instrument(skip(self))]
    pub async fn clear_cart(&self, session_id: &SessionId) -> Result<(), DomainError> {
        let existed = self
            .store
            .delete(Collection::Carts, session_id.as_str())
            .await?;
        tracing::debug!(existed, "cart cleared");
        Ok(())
    }

    /// Removes every line for `product_id`. Missing carts and products are a
    /// successful no-op.
    #[tracing::instrument(skip(self))]
    pub async fn remove_item(
        &self,
        session_id: &SessionId,
        product_id: &str,
    ) -> Result<(), DomainError> {
        let Some(mut cart) = self.load(session_id).await? else {
            return Ok(());
        };

        if cart.remove_item(product_id)? {
            self.store
                .upsert_record(Collection::Carts, session_id.as_str(), &cart)
                .await?;
        }

        Ok(())
    }

    async fn load(&self, session_id: &SessionId) -> Result<Option<Cart>, DomainError> {
        Ok(self
            .store
            .get_record(Collection::Carts, session_id.as_str())
            .await?)
    }
}
