//! # counsel-store
//!
//! In-memory entity store for Counsel and the view computations derived from it.
//!
//! The store holds four ordered collections (clients, campaigns, leads,
//! compliance rules). Every effective mutation installs a fresh collection and
//! bumps a revision counter; records that did not change are shared between the
//! old and new [`Snapshot`]. Views in [`views`] are pure functions of a
//! snapshot.

pub mod error;
pub mod repos;
pub mod seed;
pub mod store;
pub mod updates;
pub mod views;

#[cfg(test)]
mod test_support;

pub use error::StoreError;
pub use store::{CrmStore, Snapshot};
