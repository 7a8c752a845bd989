//! Whole-page views assembled from the smaller computations.

use chrono::{DateTime, Utc};

use counsel_core::enums::ComplianceTab;
use counsel_core::responses::{
    Analytics, CampaignRow, CompliancePage, Dashboard, LeadBoard, LeadRow, MetricCard,
};

use crate::store::Snapshot;
use crate::views::filter::{CampaignFilter, LeadFilter};
use crate::views::format::{currency, relative_time};
use crate::views::metrics::{
    active_campaigns, budget_usage, campaign_chart, compliance_stats, conversion_rate,
    dashboard_metrics, lead_status_counts, total_revenue,
};
use crate::views::ranking::{follow_up_leads, recent_leads, top_clients};
use crate::views::samples;

/// How many entries each dashboard list shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardLimits {
    pub top_clients: usize,
    pub follow_up_leads: usize,
    pub recent_leads: usize,
}

impl Default for DashboardLimits {
    fn default() -> Self {
        Self {
            top_clients: 3,
            follow_up_leads: 4,
            recent_leads: 5,
        }
    }
}

#[must_use]
pub fn dashboard(snapshot: &Snapshot, limits: DashboardLimits) -> Dashboard {
    let metrics = dashboard_metrics(snapshot);
    let cards = vec![
        MetricCard {
            title: "Active Law Firms".into(),
            value: metrics.law_firms.to_string(),
        },
        MetricCard {
            title: "Active Campaigns".into(),
            value: metrics.active_campaigns.to_string(),
        },
        MetricCard {
            title: "Total Leads".into(),
            value: metrics.total_leads.to_string(),
        },
        MetricCard {
            title: "Monthly Revenue".into(),
            value: currency(metrics.monthly_revenue),
        },
        MetricCard {
            title: "Average ROI".into(),
            value: format!("{}%", metrics.average_roi),
        },
        MetricCard {
            title: "Compliance Issues".into(),
            value: metrics.compliance_issues.to_string(),
        },
    ];

    let clients = snapshot.clients().iter().map(|client| &**client);
    let leads = || snapshot.leads().iter().map(|lead| &**lead);
    Dashboard {
        metrics,
        cards,
        top_clients: top_clients(clients, limits.top_clients),
        follow_up_leads: follow_up_leads(leads(), limits.follow_up_leads),
        recent_leads: recent_leads(leads(), limits.recent_leads),
        campaign_performance: campaign_chart(snapshot.campaigns().iter().map(|c| &**c)),
    }
}

/// Totals from the store alongside the fixed chart series.
#[must_use]
pub fn analytics(snapshot: &Snapshot) -> Analytics {
    let leads = || snapshot.leads().iter().map(|lead| &**lead);
    Analytics {
        total_leads: snapshot.leads().len(),
        total_conversions: lead_status_counts(leads()).converted,
        conversion_rate: conversion_rate(leads()),
        total_revenue: total_revenue(snapshot.clients().iter().map(|c| &**c)),
        active_campaigns: active_campaigns(snapshot.campaigns().iter().map(|c| &**c)),
        monthly_performance: samples::monthly_performance(),
        channel_mix: samples::channel_mix(),
        practice_areas: samples::practice_area_performance(),
    }
}

/// The compliance page; rules and reports are only filled on their tabs.
#[must_use]
pub fn compliance_page(snapshot: &Snapshot, tab: ComplianceTab) -> CompliancePage {
    CompliancePage {
        tab,
        stats: compliance_stats(snapshot),
        rules: (tab == ComplianceTab::Rules)
            .then(|| snapshot.rules().iter().map(|r| (**r).clone()).collect()),
        reports: (tab == ComplianceTab::Reports).then(samples::compliance_reports),
    }
}

/// Filtered lead cards plus status counts over the filtered set.
#[must_use]
pub fn lead_board(snapshot: &Snapshot, filter: &LeadFilter, now: DateTime<Utc>) -> LeadBoard {
    let leads = filter.apply(snapshot);
    LeadBoard {
        counts: lead_status_counts(&leads),
        leads: leads
            .into_iter()
            .map(|lead| LeadRow {
                client_name: snapshot.client_name(lead.client_id),
                campaign_name: snapshot.campaign_name(lead.campaign_id),
                created: relative_time(lead.created_at, now),
                lead,
            })
            .collect(),
    }
}

/// Filtered campaign cards with client names and budget bars.
#[must_use]
pub fn campaign_rows(snapshot: &Snapshot, filter: &CampaignFilter) -> Vec<CampaignRow> {
    filter
        .apply(snapshot)
        .into_iter()
        .map(|campaign| CampaignRow {
            client_name: snapshot.client_name(campaign.client_id),
            budget_usage: budget_usage(&campaign),
            campaign,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::CrmStore;
    use crate::test_support::{test_now, walk_in_lead};
    use crate::views::filter::Facet;
    use counsel_core::enums::{ComplianceStatus, LeadStatus};

    #[test]
    fn seeded_dashboard() {
        let snap = CrmStore::seeded().snapshot();
        let page = dashboard(&snap, DashboardLimits::default());

        let cards: Vec<(&str, &str)> = page
            .cards
            .iter()
            .map(|c| (c.title.as_str(), c.value.as_str()))
            .collect();
        assert_eq!(
            cards,
            vec![
                ("Active Law Firms", "2"),
                ("Active Campaigns", "3"),
                ("Total Leads", "2"),
                ("Monthly Revenue", "$27,000"),
                ("Average ROI", "300%"),
                ("Compliance Issues", "0"),
            ]
        );
        assert_eq!(page.top_clients.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(page.follow_up_leads.len(), 2);
        assert_eq!(page.recent_leads.len(), 2);
        assert_eq!(page.campaign_performance[0].name, "Personal Injury");
    }

    #[test]
    fn dashboard_respects_limits() {
        let snap = CrmStore::seeded().snapshot();
        let page = dashboard(
            &snap,
            DashboardLimits {
                top_clients: 1,
                follow_up_leads: 1,
                recent_leads: 0,
            },
        );
        assert_eq!(page.top_clients.len(), 1);
        assert_eq!(page.follow_up_leads.len(), 1);
        assert!(page.recent_leads.is_empty());
    }

    #[test]
    fn non_compliant_clients_count_as_issues() {
        let mut store = CrmStore::seeded();
        let update = crate::updates::ClientUpdateBuilder::new()
            .compliance_status(ComplianceStatus::NonCompliant)
            .build();
        store.update_client(1, &update);
        let page = dashboard(&store.snapshot(), DashboardLimits::default());
        assert_eq!(page.metrics.compliance_issues, 1);
    }

    #[test]
    fn analytics_on_seeded_store() {
        let mut store = CrmStore::seeded();
        let page = analytics(&store.snapshot());
        assert_eq!(page.total_leads, 2);
        assert_eq!(page.total_conversions, 0);
        assert_eq!(page.conversion_rate, "0.0");
        assert_eq!(page.active_campaigns, 3);

        store.set_lead_status(2, LeadStatus::Converted);
        let page = analytics(&store.snapshot());
        assert_eq!(page.conversion_rate, "50.0");
        assert_eq!(page.monthly_performance.len(), 6);
    }

    #[test]
    fn analytics_without_leads() {
        assert_eq!(analytics(&CrmStore::empty().snapshot()).conversion_rate, "0");
    }

    #[test]
    fn compliance_tabs_select_sections() {
        let snap = CrmStore::seeded().snapshot();
        let overview = compliance_page(&snap, ComplianceTab::Overview);
        assert!(overview.rules.is_none() && overview.reports.is_none());
        assert_eq!(overview.stats.total_rules, 3);

        let rules = compliance_page(&snap, ComplianceTab::Rules);
        assert_eq!(rules.rules.map(|r| r.len()), Some(3));

        let reports = compliance_page(&snap, ComplianceTab::Reports);
        assert_eq!(reports.reports.map(|r| r.len()), Some(3));
    }

    #[test]
    fn lead_board_counts_follow_the_filter() {
        let mut store = CrmStore::seeded();
        store.add_lead_at(walk_in_lead(), test_now());
        let snap = store.snapshot();

        let all = lead_board(&snap, &LeadFilter::default(), test_now());
        assert_eq!((all.counts.new, all.counts.qualified), (2, 1));

        let qualified = LeadFilter {
            status: Facet::Only(LeadStatus::Qualified),
            ..LeadFilter::default()
        };
        let board = lead_board(&snap, &qualified, test_now());
        assert_eq!(board.leads.len(), 1);
        assert_eq!((board.counts.new, board.counts.qualified), (0, 1));
    }

    #[test]
    fn lead_rows_resolve_names_and_age() {
        let snap = CrmStore::seeded().snapshot();
        let now = Utc.with_ymd_and_hms(2024, 12, 12, 10, 30, 0).unwrap();
        let board = lead_board(&snap, &LeadFilter::default(), now);
        let davis = &board.leads[0];
        assert_eq!(davis.client_name.as_deref(), Some("Smith & Associates Law Firm"));
        assert_eq!(davis.campaign_name.as_deref(), Some("Personal Injury Lead Generation"));
        assert_eq!(davis.created, "2 days ago");
    }

    #[test]
    fn campaign_rows_carry_budget_usage() {
        let snap = CrmStore::seeded().snapshot();
        let rows = campaign_rows(&snap, &CampaignFilter::default());
        let labels: Vec<&str> = rows.iter().map(|r| r.budget_usage.label.as_str()).collect();
        assert_eq!(labels, ["64.0% used", "70.0% used", "72.0% used"]);
        assert_eq!(rows[2].client_name.as_deref(), Some("Johnson Legal Group"));
    }
}
