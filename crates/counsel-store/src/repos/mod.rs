//! Repository methods on [`crate::CrmStore`], one module per entity.
//!
//! Adds apply the creation defaults and never validate; that is the job of the
//! forms in `counsel_core::forms`. Updates merge every record with a matching
//! id and report whether anything matched.

pub mod campaign;
pub mod client;
pub mod compliance_rule;
pub mod lead;
