use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ClientStatus, ComplianceStatus};
use crate::ids::{CampaignId, ClientId};

/// A law-firm client of the marketing agency.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub practice_areas: Vec<String>,
    pub status: ClientStatus,
    pub retainer_value: f64,
    pub monthly_spend: f64,
    pub join_date: NaiveDate,
    pub last_contact: Option<NaiveDate>,
    pub address: Option<String>,
    pub bar_number: Option<String>,
    pub compliance_status: ComplianceStatus,
    /// Campaign ids attached to this client. Soft references.
    pub campaigns: Vec<CampaignId>,
    pub leads: u32,
    pub conversions: u32,
    /// Return on investment, in percent.
    pub roi: f64,
}

/// Input for `CrmStore::add_client`.
///
/// Status, join date, campaign list and performance counters are filled in by
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub practice_areas: Vec<String>,
    pub retainer_value: f64,
    pub monthly_spend: f64,
    pub address: Option<String>,
    pub bar_number: Option<String>,
    pub compliance_status: ComplianceStatus,
}
