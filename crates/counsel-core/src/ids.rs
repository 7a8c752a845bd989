//! Id aliases for CRM entities.
//!
//! Ids are positive integers assigned by the store at creation time. Each
//! collection owns its own sequence, so a `ClientId` and a `LeadId` with the
//! same value refer to unrelated records.

pub type ClientId = u32;
pub type CampaignId = u32;
pub type LeadId = u32;
pub type RuleId = u32;

/// Human-readable entity names used in errors and log fields.
pub const ENTITY_CLIENT: &str = "client";
pub const ENTITY_CAMPAIGN: &str = "campaign";
pub const ENTITY_LEAD: &str = "lead";
pub const ENTITY_RULE: &str = "compliance_rule";
