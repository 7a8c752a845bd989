//! Campaign repository: add, partial update, lookups.

use std::sync::Arc;

use tracing::debug;

use counsel_core::entities::{Campaign, NewCampaign};
use counsel_core::ids::{CampaignId, ENTITY_CAMPAIGN};

use crate::error::StoreError;
use crate::store::CrmStore;
use crate::updates::CampaignUpdate;

impl CrmStore {
    /// Add a campaign with zeroed spend and performance counters.
    ///
    /// `client_id` is a soft reference and is not checked here.
    pub fn add_campaign(&mut self, new: NewCampaign) -> Arc<Campaign> {
        let id = self.campaigns.allocate_id();
        let client_id = new.client_id;
        let campaign = self.campaigns.append(Campaign {
            id,
            name: new.name,
            client_id,
            campaign_type: new.campaign_type,
            status: new.status,
            budget: new.budget,
            spent: 0.0,
            start_date: new.start_date,
            end_date: new.end_date,
            leads: 0,
            conversions: 0,
            cpl: 0.0,
            roi: 0.0,
            compliance_checked: false,
        });
        let revision = self.bump_revision();
        debug!(entity = ENTITY_CAMPAIGN, id, client_id, revision, "added");
        campaign
    }

    /// Merge `update` into every campaign with `id`; `None` when nothing matched.
    pub fn update_campaign(
        &mut self,
        id: CampaignId,
        update: &CampaignUpdate,
    ) -> Option<Arc<Campaign>> {
        let merged = self
            .campaigns
            .merge_where(id, |campaign| update.apply(campaign))?;
        let revision = self.bump_revision();
        debug!(
            entity = ENTITY_CAMPAIGN,
            id,
            revision,
            changes = %serde_json::to_string(update).unwrap_or_default(),
            "updated"
        );
        Some(merged)
    }

    /// Look up a campaign by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no campaign has this id.
    pub fn campaign(&self, id: CampaignId) -> Result<Arc<Campaign>, StoreError> {
        self.find_campaign(id)
            .ok_or_else(|| StoreError::not_found(ENTITY_CAMPAIGN, id))
    }

    #[must_use]
    pub fn find_campaign(&self, id: CampaignId) -> Option<Arc<Campaign>> {
        self.campaigns.find(id)
    }
}
