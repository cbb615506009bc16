//! Dish Client - catalog front-end core
//!
//! Gateway to the dish backend, the add/edit form, card view models and the
//! list state machine that ties them together.

pub mod card;
pub mod config;
pub mod controller;
pub mod error;
pub mod form;
pub mod http;
pub mod state;

pub use card::{ButtonState, CardAction, DishCard, Tag, Tone};
pub use config::ClientConfig;
pub use controller::{CatalogController, execute};
pub use error::{ClientError, ClientResult};
pub use form::{DishForm, FieldError, FormErrors, FormField};
pub use http::{DishGateway, NetworkDishGateway};
pub use state::{ActionStatus, CatalogState, DishModal, ListView, Notice, Outcome, Request};

// Re-export shared types for convenience
pub use shared::{Decimal, Dish, DishCategory, DishId, DishUpsert};
