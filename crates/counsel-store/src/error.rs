//! Store error types for counsel-store.

use thiserror::Error;

/// Errors from entity store lookups.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No record in the collection carries the requested id.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },
}

impl StoreError {
    #[must_use]
    pub const fn not_found(entity: &'static str, id: u32) -> Self {
        Self::NotFound { entity, id }
    }
}
