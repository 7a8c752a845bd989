//! Aggregate numbers over a snapshot.

use std::ops::Deref;

use counsel_core::entities::{Campaign, Client, Lead};
use counsel_core::enums::{CampaignStatus, ComplianceStatus, LeadStatus};
use counsel_core::responses::{
    BudgetUsage, CampaignChartRow, ComplianceStats, DashboardMetrics, LeadStatusCounts,
};

use crate::store::Snapshot;

/// Sum of client retainers.
#[must_use]
pub fn total_revenue<'a>(clients: impl IntoIterator<Item = &'a Client>) -> f64 {
    clients.into_iter().map(|c| c.retainer_value).sum()
}

#[must_use]
pub fn active_campaigns<'a>(campaigns: impl IntoIterator<Item = &'a Campaign>) -> usize {
    campaigns
        .into_iter()
        .filter(|c| c.status == CampaignStatus::Active)
        .count()
}

#[must_use]
pub fn lead_status_counts<'a>(leads: impl IntoIterator<Item = &'a Lead>) -> LeadStatusCounts {
    leads
        .into_iter()
        .fold(LeadStatusCounts::default(), |mut counts, lead| {
            match lead.status {
                LeadStatus::New => counts.new += 1,
                LeadStatus::Qualified => counts.qualified += 1,
                LeadStatus::Converted => counts.converted += 1,
                LeadStatus::Lost => counts.lost += 1,
            }
            counts
        })
}

/// Converted share of `leads` in percent with one decimal, `"0"` without leads.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn conversion_rate<'a>(leads: impl IntoIterator<Item = &'a Lead>) -> String {
    let (total, converted) = leads.into_iter().fold((0usize, 0usize), |(t, c), lead| {
        (t + 1, c + usize::from(lead.status == LeadStatus::Converted))
    });
    if total == 0 {
        return "0".to_string();
    }
    format!("{:.1}", converted as f64 / total as f64 * 100.0)
}

/// Mean client ROI rounded half up, `0` without clients.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn average_roi<'a>(clients: impl IntoIterator<Item = &'a Client>) -> i64 {
    let (count, sum) = clients
        .into_iter()
        .fold((0usize, 0.0_f64), |(n, s), c| (n + 1, s + c.roi));
    if count == 0 {
        return 0;
    }
    (sum / count as f64 + 0.5).floor() as i64
}

/// Budget consumption of one campaign.
///
/// A non-positive budget counts as nothing used.
#[must_use]
pub fn budget_usage(campaign: &Campaign) -> BudgetUsage {
    let used_percent = if campaign.budget > 0.0 {
        campaign.spent / campaign.budget * 100.0
    } else {
        0.0
    };
    BudgetUsage {
        used_percent,
        bar_percent: used_percent.min(100.0),
        remaining: campaign.budget - campaign.spent,
        label: format!("{used_percent:.1}% used"),
    }
}

/// Clients per compliance standing plus the number of rules.
#[must_use]
pub fn compliance_stats(snapshot: &Snapshot) -> ComplianceStats {
    let mut stats = ComplianceStats {
        total_rules: snapshot.rules().len(),
        ..ComplianceStats::default()
    };
    for client in snapshot.clients() {
        match client.compliance_status {
            ComplianceStatus::Compliant => stats.compliant += 1,
            ComplianceStatus::NonCompliant => stats.non_compliant += 1,
            ComplianceStatus::UnderReview => stats.under_review += 1,
        }
    }
    stats
}

/// Chart label for a campaign: its first two words.
#[must_use]
pub fn short_name(name: &str) -> String {
    name.split(' ').take(2).collect::<Vec<_>>().join(" ")
}

#[must_use]
pub fn campaign_chart<'a>(
    campaigns: impl IntoIterator<Item = &'a Campaign>,
) -> Vec<CampaignChartRow> {
    campaigns
        .into_iter()
        .map(|c| CampaignChartRow {
            name: short_name(&c.name),
            leads: c.leads,
            conversions: c.conversions,
            roi: c.roi,
        })
        .collect()
}

#[must_use]
pub fn dashboard_metrics(snapshot: &Snapshot) -> DashboardMetrics {
    let clients = || snapshot.clients().iter().map(Deref::deref);
    DashboardMetrics {
        law_firms: snapshot.clients().len(),
        active_campaigns: active_campaigns(snapshot.campaigns().iter().map(Deref::deref)),
        total_leads: snapshot.leads().len(),
        monthly_revenue: total_revenue(clients()),
        average_roi: average_roi(clients()),
        compliance_issues: compliance_stats(snapshot).non_compliant,
    }
}
