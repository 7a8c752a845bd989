//! Response types produced by the derived views and printed by `counsel`.
//!
//! These structs define the JSON shape of page-level commands such as
//! `counsel dashboard`, `counsel lead list`, `counsel campaign get` and
//! `counsel compliance`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Campaign, Client, ComplianceRule, Lead};
use crate::enums::{CampaignTab, ClientTab, ComplianceTab};

/// A detail page either shows its record or a "not found" placeholder.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Detail<T> {
    Found(T),
    NotFound { message: String },
}

impl<T> Detail<T> {
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

/// Lead counts per pipeline status.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LeadStatusCounts {
    pub new: usize,
    pub qualified: usize,
    pub converted: usize,
    pub lost: usize,
}

/// A lead card: the lead plus its resolved client and campaign names.
///
/// Names are `None` when the soft reference points at nothing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeadRow {
    #[serde(flatten)]
    pub lead: Lead,
    pub client_name: Option<String>,
    pub campaign_name: Option<String>,
    /// Relative age of the lead, e.g. "2 days ago".
    pub created: String,
}

/// Response from `counsel lead list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LeadBoard {
    pub counts: LeadStatusCounts,
    pub leads: Vec<LeadRow>,
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// Budget consumption of a campaign.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetUsage {
    /// `spent / budget * 100`, uncapped.
    pub used_percent: f64,
    /// Progress-bar fill, capped at 100.
    pub bar_percent: f64,
    /// `budget - spent`; negative when overspent.
    pub remaining: f64,
    /// e.g. "64.0% used".
    pub label: String,
}

/// A campaign card: the campaign plus its client name and budget bar.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRow {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub client_name: Option<String>,
    pub budget_usage: BudgetUsage,
}

/// One bar group of the campaign performance chart.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CampaignChartRow {
    /// First two words of the campaign name.
    pub name: String,
    pub leads: u32,
    pub conversions: u32,
    pub roi: f64,
}

/// One point of a campaign's weekly performance series.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeeklyPerformance {
    pub date: NaiveDate,
    pub leads: u32,
    pub cost: f64,
    pub conversions: u32,
}

/// Response from `counsel campaign get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CampaignDetail {
    pub tab: CampaignTab,
    pub campaign: Campaign,
    /// The owning client, `None` when the reference dangles.
    pub client: Option<Client>,
    pub leads: Vec<Lead>,
    pub budget_usage: BudgetUsage,
    /// Whole days from start to end date, rounded up.
    pub duration_days: i64,
    pub weekly_performance: Vec<WeeklyPerformance>,
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

/// Response from `counsel client get`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClientDetail {
    pub tab: ClientTab,
    pub client: Client,
    pub campaigns: Vec<Campaign>,
    pub leads: Vec<Lead>,
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Headline numbers of the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMetrics {
    pub law_firms: usize,
    pub active_campaigns: usize,
    pub total_leads: usize,
    /// Sum of client retainers.
    pub monthly_revenue: f64,
    /// Mean client ROI, rounded to the nearest integer.
    pub average_roi: i64,
    /// Clients marked non-compliant.
    pub compliance_issues: usize,
}

/// A formatted metric card.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MetricCard {
    pub title: String,
    pub value: String,
}

/// Response from `counsel dashboard`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub metrics: DashboardMetrics,
    pub cards: Vec<MetricCard>,
    pub top_clients: Vec<Client>,
    pub follow_up_leads: Vec<Lead>,
    pub recent_leads: Vec<Lead>,
    pub campaign_performance: Vec<CampaignChartRow>,
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MonthlyPerformance {
    pub month: String,
    pub leads: u32,
    pub conversions: u32,
    pub revenue: f64,
}

/// Share of spend per marketing channel, in percent.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ChannelShare {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PracticeAreaPerformance {
    pub area: String,
    pub leads: u32,
    pub conversions: u32,
}

/// Response from `counsel analytics`.
///
/// Totals are computed from the store; the series are fixed sample data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_leads: usize,
    pub total_conversions: usize,
    /// Converted share of all leads with one decimal, or "0" without leads.
    pub conversion_rate: String,
    pub total_revenue: f64,
    pub active_campaigns: usize,
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub channel_mix: Vec<ChannelShare>,
    pub practice_areas: Vec<PracticeAreaPerformance>,
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

/// Client counts per compliance standing plus the rule count.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceStats {
    pub compliant: usize,
    pub non_compliant: usize,
    pub under_review: usize,
    pub total_rules: usize,
}

/// A past compliance review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ComplianceReport {
    pub id: u32,
    pub title: String,
    pub date: NaiveDate,
    pub status: String,
    pub issues: u32,
    pub checks: u32,
}

/// Response from `counsel compliance`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CompliancePage {
    pub tab: ComplianceTab,
    pub stats: ComplianceStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<Vec<ComplianceRule>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reports: Option<Vec<ComplianceReport>>,
}
