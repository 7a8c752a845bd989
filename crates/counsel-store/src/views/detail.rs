//! Client and campaign detail pages.

use chrono::NaiveDate;

use counsel_core::entities::{Campaign, Lead};
use counsel_core::enums::{CampaignTab, ClientTab};
use counsel_core::ids::{CampaignId, ClientId};
use counsel_core::responses::{CampaignDetail, ClientDetail, Detail};

use crate::store::Snapshot;
use crate::views::metrics::budget_usage;
use crate::views::samples;

pub const CLIENT_NOT_FOUND: &str = "Client not found";
pub const CAMPAIGN_NOT_FOUND: &str = "Campaign not found";

/// Whole days from `start` to `end`; negative when `end` precedes `start`.
#[must_use]
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// A client with the campaigns and leads that point at it.
#[must_use]
pub fn client_detail(snapshot: &Snapshot, id: ClientId, tab: ClientTab) -> Detail<ClientDetail> {
    let Some(client) = snapshot.find_client(id) else {
        return Detail::NotFound {
            message: CLIENT_NOT_FOUND.to_string(),
        };
    };
    Detail::Found(ClientDetail {
        tab,
        client: client.clone(),
        campaigns: snapshot
            .campaigns()
            .iter()
            .filter(|c| c.client_id == id)
            .map(|c| Campaign::clone(c))
            .collect(),
        leads: snapshot
            .leads()
            .iter()
            .filter(|l| l.client_id == id)
            .map(|l| Lead::clone(l))
            .collect(),
    })
}

/// A campaign with its owning client, its leads and budget figures.
#[must_use]
pub fn campaign_detail(
    snapshot: &Snapshot,
    id: CampaignId,
    tab: CampaignTab,
) -> Detail<CampaignDetail> {
    let Some(campaign) = snapshot.find_campaign(id) else {
        return Detail::NotFound {
            message: CAMPAIGN_NOT_FOUND.to_string(),
        };
    };
    Detail::Found(CampaignDetail {
        tab,
        campaign: campaign.clone(),
        client: snapshot.find_client(campaign.client_id).cloned(),
        leads: snapshot
            .leads()
            .iter()
            .filter(|l| l.campaign_id == id)
            .map(|l| Lead::clone(l))
            .collect(),
        budget_usage: budget_usage(campaign),
        duration_days: duration_days(campaign.start_date, campaign.end_date),
        weekly_performance: samples::weekly_performance(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CrmStore;
    use crate::test_support::estate_campaign;

    #[test]
    fn client_detail_collects_related_records() {
        let snap = CrmStore::seeded().snapshot();
        let Detail::Found(detail) = client_detail(&snap, 1, ClientTab::Campaigns) else {
            panic!("client 1 is seeded");
        };
        assert_eq!(detail.tab, ClientTab::Campaigns);
        assert_eq!(
            detail.campaigns.iter().map(|c| c.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(detail.leads.len(), 2);
    }

    #[test]
    fn missing_client_renders_placeholder() {
        let snap = CrmStore::seeded().snapshot();
        assert_eq!(
            client_detail(&snap, 99, ClientTab::default()),
            Detail::NotFound {
                message: "Client not found".into()
            }
        );
    }

    #[test]
    fn campaign_detail_of_seeded_campaign() {
        let snap = CrmStore::seeded().snapshot();
        let Detail::Found(detail) = campaign_detail(&snap, 1, CampaignTab::Overview) else {
            panic!("campaign 1 is seeded");
        };
        assert_eq!(detail.client.map(|c| c.name).as_deref(), Some("Smith & Associates Law Firm"));
        assert_eq!(detail.leads.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(detail.budget_usage.label, "64.0% used");
        assert_eq!(detail.duration_days, 60);
        assert_eq!(detail.weekly_performance.len(), 6);
    }

    #[test]
    fn campaign_with_dangling_client_still_renders() {
        let mut store = CrmStore::seeded();
        let campaign = store.add_campaign(estate_campaign(31));
        let detail = campaign_detail(&store.snapshot(), campaign.id, CampaignTab::Leads);
        let Detail::Found(detail) = detail else {
            panic!("campaign was just added");
        };
        assert!(detail.client.is_none());
        assert!(detail.leads.is_empty());
    }

    #[test]
    fn missing_campaign_renders_placeholder() {
        let snap = CrmStore::empty().snapshot();
        assert!(!campaign_detail(&snap, 1, CampaignTab::Performance).is_found());
    }
}
