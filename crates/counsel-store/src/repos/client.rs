//! Client repository: add, partial update, lookups.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::debug;

use counsel_core::entities::{Client, NewClient};
use counsel_core::enums::ClientStatus;
use counsel_core::ids::{ClientId, ENTITY_CLIENT};

use crate::error::StoreError;
use crate::store::CrmStore;
use crate::updates::ClientUpdate;

impl CrmStore {
    /// Add a client joining today (UTC calendar date).
    pub fn add_client(&mut self, new: NewClient) -> Arc<Client> {
        self.add_client_on(new, Utc::now().date_naive())
    }

    /// Add a client with an explicit join date.
    ///
    /// New clients start `Active` with no campaigns and zeroed counters.
    pub fn add_client_on(&mut self, new: NewClient, join_date: NaiveDate) -> Arc<Client> {
        let id = self.clients.allocate_id();
        let client = self.clients.append(Client {
            id,
            name: new.name,
            contact_person: new.contact_person,
            email: new.email,
            phone: new.phone,
            practice_areas: new.practice_areas,
            status: ClientStatus::Active,
            retainer_value: new.retainer_value,
            monthly_spend: new.monthly_spend,
            join_date,
            last_contact: None,
            address: new.address,
            bar_number: new.bar_number,
            compliance_status: new.compliance_status,
            campaigns: Vec::new(),
            leads: 0,
            conversions: 0,
            roi: 0.0,
        });
        let revision = self.bump_revision();
        debug!(entity = ENTITY_CLIENT, id, revision, "added");
        client
    }

    /// Merge `update` into every client with `id`.
    ///
    /// Returns the merged record, or `None` when no client matched; the store
    /// is then left untouched and the revision does not move.
    pub fn update_client(&mut self, id: ClientId, update: &ClientUpdate) -> Option<Arc<Client>> {
        let merged = self.clients.merge_where(id, |client| update.apply(client))?;
        let revision = self.bump_revision();
        debug!(
            entity = ENTITY_CLIENT,
            id,
            revision,
            changes = %serde_json::to_string(update).unwrap_or_default(),
            "updated"
        );
        Some(merged)
    }

    /// Look up a client by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no client has this id.
    pub fn client(&self, id: ClientId) -> Result<Arc<Client>, StoreError> {
        self.find_client(id)
            .ok_or_else(|| StoreError::not_found(ENTITY_CLIENT, id))
    }

    #[must_use]
    pub fn find_client(&self, id: ClientId) -> Option<Arc<Client>> {
        self.clients.find(id)
    }
}
