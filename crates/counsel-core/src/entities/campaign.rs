use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{CampaignStatus, CampaignType};
use crate::ids::{CampaignId, ClientId};

/// A marketing campaign run for one client.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub name: String,
    /// Owning client. Not checked against the client collection.
    pub client_id: ClientId,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: f64,
    pub spent: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub leads: u32,
    pub conversions: u32,
    /// Cost per lead.
    pub cpl: f64,
    pub roi: f64,
    pub compliance_checked: bool,
}

/// Input for `CrmStore::add_campaign`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub name: String,
    pub client_id: ClientId,
    #[serde(rename = "type")]
    pub campaign_type: CampaignType,
    pub status: CampaignStatus,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
