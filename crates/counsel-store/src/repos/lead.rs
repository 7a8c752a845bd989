//! Lead repository: add, partial update, status changes, lookups.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::debug;

use counsel_core::entities::{Lead, NewLead};
use counsel_core::enums::LeadStatus;
use counsel_core::ids::{ENTITY_LEAD, LeadId};

use crate::error::StoreError;
use crate::store::CrmStore;
use crate::updates::{LeadUpdate, LeadUpdateBuilder};

impl CrmStore {
    /// Add a lead created now.
    pub fn add_lead(&mut self, new: NewLead) -> Arc<Lead> {
        self.add_lead_at(new, Utc::now())
    }

    /// Add a lead with an explicit creation instant.
    ///
    /// The lead always starts as `New`; a status on `new` is ignored.
    /// `created_at` and `last_contact` are both set to `now`.
    pub fn add_lead_at(&mut self, new: NewLead, now: DateTime<Utc>) -> Arc<Lead> {
        let id = self.leads.allocate_id();
        if let Some(requested) = new.status.filter(|status| *status != LeadStatus::New) {
            debug!(entity = ENTITY_LEAD, id, %requested, "ignoring status on new lead");
        }
        let lead = self.leads.append(Lead {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            source: new.source,
            campaign_id: new.campaign_id,
            client_id: new.client_id,
            practice_area: new.practice_area,
            status: LeadStatus::New,
            priority: new.priority,
            value: new.value,
            notes: new.notes,
            created_at: now,
            last_contact: now,
            compliance_flags: Vec::new(),
        });
        let revision = self.bump_revision();
        debug!(entity = ENTITY_LEAD, id, revision, "added");
        lead
    }

    /// Merge `update` into every lead with `id`; `None` when nothing matched.
    pub fn update_lead(&mut self, id: LeadId, update: &LeadUpdate) -> Option<Arc<Lead>> {
        let merged = self.leads.merge_where(id, |lead| update.apply(lead))?;
        let revision = self.bump_revision();
        debug!(
            entity = ENTITY_LEAD,
            id,
            revision,
            changes = %serde_json::to_string(update).unwrap_or_default(),
            "updated"
        );
        Some(merged)
    }

    /// Move a lead through the pipeline; the status selector on a lead card.
    pub fn set_lead_status(&mut self, id: LeadId, status: LeadStatus) -> Option<Arc<Lead>> {
        self.update_lead(id, &LeadUpdateBuilder::new().status(status).build())
    }

    /// Look up a lead by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no lead has this id.
    pub fn lead(&self, id: LeadId) -> Result<Arc<Lead>, StoreError> {
        self.find_lead(id)
            .ok_or_else(|| StoreError::not_found(ENTITY_LEAD, id))
    }

    #[must_use]
    pub fn find_lead(&self, id: LeadId) -> Option<Arc<Lead>> {
        self.leads.find(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_support::{test_now, walk_in_lead};

    #[test]
    fn add_lead_forces_new_status() {
        let mut store = CrmStore::seeded();
        let mut new = walk_in_lead();
        new.status = Some(LeadStatus::Converted);

        let lead = store.add_lead_at(new, test_now());

        assert_eq!(lead.id, 3);
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.created_at, test_now());
        assert_eq!(lead.last_contact, test_now());
        assert!(lead.compliance_flags.is_empty());
    }

    #[test]
    fn add_lead_stamps_current_time() {
        let mut store = CrmStore::empty();
        let before = Utc::now();
        let lead = store.add_lead(walk_in_lead());
        let after = Utc::now();
        assert!(lead.created_at >= before && lead.created_at <= after);
    }

    #[test]
    fn status_change_touches_one_field() {
        let mut store = CrmStore::seeded();
        let original = store.lead(1).unwrap();
        let updated = store.set_lead_status(1, LeadStatus::Qualified).unwrap();

        assert_eq!(
            *updated,
            Lead {
                status: LeadStatus::Qualified,
                ..(*original).clone()
            }
        );
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn status_change_on_unknown_lead() {
        let mut store = CrmStore::seeded();
        assert!(store.set_lead_status(12, LeadStatus::Lost).is_none());
        assert_eq!(store.revision(), 0);
        assert!(store.lead(12).is_err());
    }
}
