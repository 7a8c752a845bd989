//! Client update builder.

use chrono::NaiveDate;
use serde::Serialize;

use counsel_core::entities::Client;
use counsel_core::enums::{ClientStatus, ComplianceStatus};
use counsel_core::ids::CampaignId;

use super::merge_field;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_person: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_areas: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClientStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retainer_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<Option<NaiveDate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar_number: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compliance_status: Option<ComplianceStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaigns: Option<Vec<CampaignId>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leads: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversions: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roi: Option<f64>,
}

impl ClientUpdate {
    /// `true` when no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the set fields over `client`.
    #[must_use]
    pub fn apply(&self, client: &Client) -> Client {
        let mut next = client.clone();
        merge_field(&mut next.name, self.name.as_ref());
        merge_field(&mut next.contact_person, self.contact_person.as_ref());
        merge_field(&mut next.email, self.email.as_ref());
        merge_field(&mut next.phone, self.phone.as_ref());
        merge_field(&mut next.practice_areas, self.practice_areas.as_ref());
        merge_field(&mut next.status, self.status.as_ref());
        merge_field(&mut next.retainer_value, self.retainer_value.as_ref());
        merge_field(&mut next.monthly_spend, self.monthly_spend.as_ref());
        merge_field(&mut next.last_contact, self.last_contact.as_ref());
        merge_field(&mut next.address, self.address.as_ref());
        merge_field(&mut next.bar_number, self.bar_number.as_ref());
        merge_field(&mut next.compliance_status, self.compliance_status.as_ref());
        merge_field(&mut next.campaigns, self.campaigns.as_ref());
        merge_field(&mut next.leads, self.leads.as_ref());
        merge_field(&mut next.conversions, self.conversions.as_ref());
        merge_field(&mut next.roi, self.roi.as_ref());
        next
    }
}

#[derive(Debug, Default)]
pub struct ClientUpdateBuilder(ClientUpdate);

impl ClientUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ClientUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn contact_person(mut self, contact_person: impl Into<String>) -> Self {
        self.0.contact_person = Some(contact_person.into());
        self
    }

    #[must_use]
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.0.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.0.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn practice_areas(mut self, practice_areas: Vec<String>) -> Self {
        self.0.practice_areas = Some(practice_areas);
        self
    }

    #[must_use]
    pub fn status(mut self, status: ClientStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn retainer_value(mut self, retainer_value: f64) -> Self {
        self.0.retainer_value = Some(retainer_value);
        self
    }

    #[must_use]
    pub fn monthly_spend(mut self, monthly_spend: f64) -> Self {
        self.0.monthly_spend = Some(monthly_spend);
        self
    }

    #[must_use]
    pub fn last_contact(mut self, last_contact: Option<NaiveDate>) -> Self {
        self.0.last_contact = Some(last_contact);
        self
    }

    #[must_use]
    pub fn address(mut self, address: Option<String>) -> Self {
        self.0.address = Some(address);
        self
    }

    #[must_use]
    pub fn bar_number(mut self, bar_number: Option<String>) -> Self {
        self.0.bar_number = Some(bar_number);
        self
    }

    #[must_use]
    pub fn compliance_status(mut self, compliance_status: ComplianceStatus) -> Self {
        self.0.compliance_status = Some(compliance_status);
        self
    }

    #[must_use]
    pub fn campaigns(mut self, campaigns: Vec<CampaignId>) -> Self {
        self.0.campaigns = Some(campaigns);
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
    pub fn roi(mut self, roi: f64) -> Self {
        self.0.roi = Some(roi);
        self
    }

    #[must_use]
    pub fn build(self) -> ClientUpdate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    #[test]
    fn only_set_fields_are_serialized() {
        let update = ClientUpdateBuilder::new()
            .status(ClientStatus::Pending)
            .address(None)
            .build();
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Pending", "address": null}));
    }

    #[test]
    fn apply_overwrites_only_set_fields() {
        let client = seed::clients().remove(0);
        let update = ClientUpdateBuilder::new()
            .compliance_status(ComplianceStatus::UnderReview)
            .roi(410.0)
            .build();
        let next = update.apply(&client);

        assert_eq!(next.compliance_status, ComplianceStatus::UnderReview);
        assert!((next.roi - 410.0).abs() < f64::EPSILON);
        assert_eq!(
            Client {
                compliance_status: client.compliance_status,
                roi: client.roi,
                ..next
            },
            client
        );
    }

    #[test]
    fn clearing_an_optional_field() {
        let client = seed::clients().remove(1);
        let next = ClientUpdateBuilder::new().bar_number(None).build().apply(&client);
        assert_eq!(next.bar_number, None);
        assert_eq!(next.address, client.address);
    }

    #[test]
    fn default_update_is_empty() {
        assert!(ClientUpdate::default().is_empty());
        assert!(!ClientUpdateBuilder::new().leads(1).build().is_empty());
    }
}
