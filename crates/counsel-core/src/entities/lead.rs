use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{LeadSource, LeadStatus, Priority};
use crate::ids::{CampaignId, ClientId, LeadId};

/// A prospective legal client generated by a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
    pub campaign_id: CampaignId,
    pub client_id: ClientId,
    pub practice_area: String,
    pub status: LeadStatus,
    pub priority: Priority,
    /// Estimated case value.
    pub value: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub last_contact: DateTime<Utc>,
    pub compliance_flags: Vec<String>,
}

/// Input for `CrmStore::add_lead`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewLead {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub source: LeadSource,
    pub campaign_id: CampaignId,
    pub client_id: ClientId,
    pub practice_area: String,
    /// Ignored by the store: every new lead starts as [`LeadStatus::New`].
    #[serde(default)]
    pub status: Option<LeadStatus>,
    pub priority: Priority,
    pub value: f64,
    pub notes: Option<String>,
}
