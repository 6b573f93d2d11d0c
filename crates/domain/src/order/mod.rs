//! Payment order record and related types.

mod record;
mod state;
mod value_objects;

pub use record::{CustomerInfo, Order};
pub use state::OrderStatus;
pub use value_objects::Money;
