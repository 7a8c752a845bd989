//! Lead update builder.

use chrono::{DateTime, Utc};
use serde::Serialize;

use counsel_core::entities::Lead;
use counsel_core::enums::{LeadSource, LeadStatus, Priority};
use counsel_core::ids::{CampaignId, ClientId};

use super::merge_field;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LeadSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<CampaignId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<ClientId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub practice_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<LeadStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_contact: Option<DateTime<Utc>>,
}

impl LeadUpdate {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge the set fields over `lead`.
    #[must_use]
    pub fn apply(&self, lead: &Lead) -> Lead {
        let mut next = lead.clone();
        merge_field(&mut next.name, self.name.as_ref());
        merge_field(&mut next.email, self.email.as_ref());
        merge_field(&mut next.phone, self.phone.as_ref());
        merge_field(&mut next.source, self.source.as_ref());
        merge_field(&mut next.campaign_id, self.campaign_id.as_ref());
        merge_field(&mut next.client_id, self.client_id.as_ref());
        merge_field(&mut next.practice_area, self.practice_area.as_ref());
        merge_field(&mut next.status, self.status.as_ref());
        merge_field(&mut next.priority, self.priority.as_ref());
        merge_field(&mut next.value, self.value.as_ref());
        merge_field(&mut next.notes, self.notes.as_ref());
        merge_field(&mut next.last_contact, self.last_contact.as_ref());
        next
    }
}

#[derive(Debug, Default)]
pub struct LeadUpdateBuilder(LeadUpdate);

impl LeadUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(LeadUpdate::default())
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.0.name = Some(name.into());
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
    pub fn source(mut self, source: LeadSource) -> Self {
        self.0.source = Some(source);
        self
    }

    #[must_use]
    pub fn campaign_id(mut self, campaign_id: CampaignId) -> Self {
        self.0.campaign_id = Some(campaign_id);
        self
    }

    #[must_use]
    pub fn client_id(mut self, client_id: ClientId) -> Self {
        self.0.client_id = Some(client_id);
        self
    }

    #[must_use]
    pub fn practice_area(mut self, practice_area: impl Into<String>) -> Self {
        self.0.practice_area = Some(practice_area.into());
        self
    }

    #[must_use]
    pub fn status(mut self, status: LeadStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: Priority) -> Self {
        self.0.priority = Some(priority);
        self
    }

    #[must_use]
    pub fn value(mut self, value: f64) -> Self {
        self.0.value = Some(value);
        self
    }

    #[must_use]
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.0.notes = Some(notes);
        self
    }

    #[must_use]
    pub fn last_contact(mut self, last_contact: DateTime<Utc>) -> Self {
        self.0.last_contact = Some(last_contact);
        self
    }

    #[must_use]
    pub fn build(self) -> LeadUpdate {
        self.0
    }
}
