//! Fixed chart series and report history.
//!
//! These are display samples, not computed from the store.

use chrono::NaiveDate;

use counsel_core::responses::{
    ChannelShare, ComplianceReport, MonthlyPerformance, PracticeAreaPerformance, WeeklyPerformance,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// Leads, conversions and revenue for January through June.
#[must_use]
pub fn monthly_performance() -> Vec<MonthlyPerformance> {
    [
        ("Jan", 45, 12, 25000.0),
        ("Feb", 52, 15, 28000.0),
        ("Mar", 48, 14, 26000.0),
        ("Apr", 61, 18, 32000.0),
        ("May", 58, 16, 30000.0),
        ("Jun", 67, 20, 35000.0),
    ]
    .into_iter()
    .map(|(month, leads, conversions, revenue)| MonthlyPerformance {
        month: month.to_string(),
        leads,
        conversions,
        revenue,
    })
    .collect()
}

/// Spend share per channel, in percent; sums to 100.
#[must_use]
pub fn channel_mix() -> Vec<ChannelShare> {
    [
        ("Google Ads", 40),
        ("SEO", 30),
        ("Content Marketing", 20),
        ("Social Media", 10),
    ]
    .into_iter()
    .map(|(name, value)| ChannelShare {
        name: name.to_string(),
        value,
    })
    .collect()
}

#[must_use]
pub fn practice_area_performance() -> Vec<PracticeAreaPerformance> {
    [
        ("Personal Injury", 35, 12),
        ("Criminal Defense", 28, 8),
        ("Family Law", 22, 7),
        ("Estate Planning", 18, 5),
        ("Business Law", 15, 4),
    ]
    .into_iter()
    .map(|(area, leads, conversions)| PracticeAreaPerformance {
        area: area.to_string(),
        leads,
        conversions,
    })
    .collect()
}

/// Weekly series shown on every campaign's performance tab.
#[must_use]
pub fn weekly_performance() -> Vec<WeeklyPerformance> {
    [
        (day(2024, 11, 1), 8, 450.0, 2),
        (day(2024, 11, 8), 12, 680.0, 3),
        (day(2024, 11, 15), 15, 820.0, 4),
        (day(2024, 11, 22), 10, 590.0, 3),
        (day(2024, 11, 29), 14, 750.0, 5),
        (day(2024, 12, 6), 18, 920.0, 6),
    ]
    .into_iter()
    .map(|(date, leads, cost, conversions)| WeeklyPerformance {
        date,
        leads,
        cost,
        conversions,
    })
    .collect()
}

/// Past compliance reviews listed on the reports tab.
#[must_use]
pub fn compliance_reports() -> Vec<ComplianceReport> {
    [
        (1, "Monthly Compliance Report - December 2024", day(2024, 12, 1), 0, 15),
        (2, "Campaign Compliance Audit - Q4 2024", day(2024, 11, 15), 2, 28),
        (3, "Bar Association Compliance Review", day(2024, 11, 1), 0, 12),
    ]
    .into_iter()
    .map(|(id, title, date, issues, checks)| ComplianceReport {
        id,
        title: title.to_string(),
        date,
        status: "Completed".to_string(),
        issues,
        checks,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_mix_sums_to_one_hundred() {
        assert_eq!(channel_mix().iter().map(|c| c.value).sum::<u32>(), 100);
    }

    #[test]
    fn monthly_series_covers_six_months() {
        let months: Vec<String> = monthly_performance().into_iter().map(|m| m.month).collect();
        assert_eq!(months, ["Jan", "Feb", "Mar", "Apr", "May", "Jun"]);
    }

    #[test]
    fn audit_report_found_two_issues() {
        let reports = compliance_reports();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[1].issues, 2);
        assert!(reports.iter().all(|r| r.status == "Completed"));
    }
}
