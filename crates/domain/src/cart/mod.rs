//! Session-scoped shopping cart.

mod item;
mod model;
mod service;

pub use item::CartItem;
pub use model::{Cart, compute_total};
pub use service::CartService;
