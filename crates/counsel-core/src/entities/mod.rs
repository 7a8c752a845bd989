//! Entity structs for all Counsel CRM records.
//!
//! Each entity has a stored form (with id and store-assigned defaults) and a
//! `New*` input form accepted by the store's add operations. All structs use
//! camelCase field names on the wire and derive `JsonSchema` for schema
//! validation of CLI output.

mod campaign;
mod client;
mod compliance_rule;
mod lead;

pub use campaign::{Campaign, NewCampaign};
pub use client::{Client, NewClient};
pub use compliance_rule::{ComplianceRule, NewComplianceRule};
pub use lead::{Lead, NewLead};
