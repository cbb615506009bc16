//! Shared types for the dish catalog
//!
//! Wire models exchanged between the catalog front-ends and the
//! dish backend, plus the response envelope the backend wraps lists in.

pub mod models;
pub mod response;

// Re-exports
pub use models::{Dish, DishCategory, DishId, DishUpsert};
pub use response::ListEnvelope;
pub use rust_decimal::Decimal;
