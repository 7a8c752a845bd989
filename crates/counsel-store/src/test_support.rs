//! Shared test utilities for counsel-store unit tests.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use counsel_core::entities::{NewCampaign, NewClient, NewLead};
use counsel_core::enums::{CampaignStatus, CampaignType, ComplianceStatus, LeadSource, Priority};

/// Fixed "now" two days after the newest sample lead.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 12, 12, 10, 30, 0).unwrap()
}

pub fn test_today() -> NaiveDate {
    test_now().date_naive()
}

pub fn doe_law() -> NewClient {
    NewClient {
        name: "Doe Law".into(),
        contact_person: "Jane Doe".into(),
        email: "jane@doelaw.com".into(),
        phone: "(555) 000-1111".into(),
        practice_areas: vec!["Family Law".into()],
        retainer_value: 8000.0,
        monthly_spend: 900.0,
        address: None,
        bar_number: Some("BAR555000".into()),
        compliance_status: ComplianceStatus::Compliant,
    }
}

pub fn estate_campaign(client_id: u32) -> NewCampaign {
    NewCampaign {
        name: "Estate Planning Webinars".into(),
        client_id,
        campaign_type: CampaignType::EmailMarketing,
        status: CampaignStatus::Active,
        budget: 1500.0,
        start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
    }
}

pub fn walk_in_lead() -> NewLead {
    NewLead {
        name: "Carlos Vega".into(),
        email: "carlos@email.com".into(),
        phone: "(555) 444-5555".into(),
        source: LeadSource::Referral,
        campaign_id: 1,
        client_id: 1,
        practice_area: "Personal Injury".into(),
        status: None,
        priority: Priority::Low,
        value: 2500.0,
        notes: None,
    }
}
