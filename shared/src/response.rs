//! API Response types
//!
//! The catalog backend wraps every list in a `data` envelope:
//! ```json
//! { "data": [ ... ] }
//! ```

use serde::{Deserialize, Serialize};

/// List response envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: Vec<T>,
}

impl<T> ListEnvelope<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.data
    }
}
