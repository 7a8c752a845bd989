//! Campaign update builder.

use chrono::NaiveDate;
use serde::Serialize;

use counsel_core::entities::Campaign;
use counsel_core::enums::{CampaignStatus, CampaignType};
use counsel_core::ids::ClientId;

use super::merge_field;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub campaign_type: Option<CampaignType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CampaignStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leads: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpl: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_checked: Option<bool>,
}

impl CampaignUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the set fields over `campaign`.
    #[must_use]
    pub fn apply(&self, campaign: &Campaign) -> Campaign {
        let mut next = campaign.clone();
        merge_field(&mut next.name, self.name.as_ref());
        merge_field(&mut next.client_id, self.client_id.as_ref());
        merge_field(&mut next.campaign_type, self.campaign_type.as_ref());
        merge_field(&mut next.status, self.status.as_ref());
        merge_field(&mut next.budget, self.budget.as_ref());
        merge_field(&mut next.spent, self.spent.as_ref());
        merge_field(&mut next.start_date, self.start_date.as_ref());
        merge_field(&mut next.end_date, self.end_date.as_ref());
        merge_field(&mut next.leads, self.leads.as_ref());
        merge_field(&mut next.conversions, self.conversions.as_ref());
        merge_field(&mut next.cpl, self.cpl.as_ref());
        merge_field(&mut next.roi, self.roi.as_ref());
        merge_field(&mut next.compliance_checked, self.compliance_checked.as_ref());
        next
    }
}

#[derive(Debug, Default)]
pub struct CampaignUpdateBuilder(CampaignUpdate);

impl CampaignUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(CampaignUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.0.client_id = Some(client_id);
        self
    }

    #[must_use]
    pub fn campaign_type(mut self, campaign_type: CampaignType) -> Self {
        self.0.campaign_type = Some(campaign_type);
        self
    }

    #[must_use]
    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn budget(mut self, budget: f64) -> Self {
        self.0.budget = Some(budget);
        self
    }

    #[must_use]
    pub fn spent(mut self, spent: f64) -> Self {
        self.0.spent = Some(spent);
        self
    }

    #[must_use]
    pub fn start_date(mut self, start_date: NaiveDate) -> Self {
        self.0.start_date = Some(start_date);
        self
    }

    #[must_use]
    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.0.end_date = Some(end_date);
        self
    }

    #[must_use]
    pub fn leads(mut self, leads: u32) -> Self {
        self.0.leads = Some(leads);
        self
    }

    #[must_use]
    pub fn conversions(mut self, conversions: u32) -> Self {
        self.0.conversions = Some(conversions);
        self
    }

    #[must_use]
    pub fn cpl(mut self, cpl: f64) -> Self {
        self.0.cpl = Some(cpl);
        self
    }

    #[must_use]
    pub fn roi(mut self, roi: f64) -> Self {
        self.0.roi = Some(roi);
        self
    }

    #[must_use]
    pub fn compliance_checked(mut self, compliance_checked: bool) -> Self {
        self.0.compliance_checked = Some(compliance_checked);
        self
    }

    #[must_use]
    pub fn build(self) -> CampaignUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    #[test]
    fn type_field_keeps_its_wire_name() {
        let update = CampaignUpdateBuilder::new()
            .campaign_type(CampaignType::SocialMedia)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"type": "Social Media"}));
    }

    #[test]
    fn pause_and_record_spend() {
        let campaign = seed::campaigns().remove(0);
        let next = CampaignUpdateBuilder::new()
            .status(CampaignStatus::Paused)
            .spent(4100.0)
            .build()
            .apply(&campaign);

        assert_eq!(next.status, CampaignStatus::Paused);
        assert!((next.spent - 4100.0).abs() < f64::EPSILON);
        assert_eq!(next.name, campaign.name);
        assert_eq!(next.budget.to_bits(), campaign.budget.to_bits());
        assert!(next.compliance_checked);
    }
}
