//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields overwrite the stored record during the shallow merge. The update is
//! serialized into the store's debug log (changed fields only).

pub mod campaign;
pub mod client;
pub mod lead;

pub use campaign::{CampaignUpdate, CampaignUpdateBuilder};
pub use client::{ClientUpdate, ClientUpdateBuilder};
pub use lead::{LeadUpdate, LeadUpdateBuilder};

/// Overwrite `slot` when the update carries a value.
pub(crate) fn merge_field<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}
