//! Serde roundtrip and JsonSchema validation tests for entity and response types.

use chrono::{NaiveDate, TimeZone, Utc};
use counsel_core::entities::*;
use counsel_core::enums::*;
use counsel_core::responses::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn smith_law() -> Client {
    Client {
        id: 1,
        name: "Smith & Associates Law Firm".into(),
        contact_person: "John Smith".into(),
        email: "john@smithlaw.com".into(),
        phone: "(555) 123-4567".into(),
        practice_areas: vec!["Personal Injury".into(), "Criminal Defense".into()],
        status: ClientStatus::Active,
        retainer_value: 15000.0,
        monthly_spend: 2500.0,
        join_date: date(2024, 1, 15),
        last_contact: Some(date(2024, 12, 10)),
        address: Some("123 Main St, City, State 12345".into()),
        bar_number: Some("BAR123456".into()),
        compliance_status: ComplianceStatus::UnderReview,
        campaigns: vec![1, 2],
        leads: 24,
        conversions: 8,
        roi: 320.0,
    }
}

fn pi_campaign() -> Campaign {
    Campaign {
        id: 1,
        name: "Personal Injury Lead Generation".into(),
        client_id: 1,
        campaign_type: CampaignType::GoogleAds,
        status: CampaignStatus::Active,
        budget: 5000.0,
        spent: 3200.0,
        start_date: date(2024, 11, 1),
        end_date: date(2024, 12, 31),
        leads: 45,
        conversions: 12,
        cpl: 71.0,
        roi: 340.0,
        compliance_checked: true,
    }
}

fn davis_lead() -> Lead {
    let at = Utc.with_ymd_and_hms(2024, 12, 10, 10, 30, 0).unwrap();
    Lead {
        id: 1,
        name: "Michael Davis".into(),
        email: "michael@email.com".into(),
        phone: "(555) 111-2222".into(),
        source: LeadSource::GoogleAds,
        campaign_id: 1,
        client_id: 1,
        practice_area: "Personal Injury".into(),
        status: LeadStatus::New,
        priority: Priority::High,
        value: 5000.0,
        notes: Some("Car accident case, potential high value".into()),
        created_at: at,
        last_contact: at,
        compliance_flags: vec![],
    }
}

roundtrip_and_validate!(client_roundtrip, Client, smith_law());

roundtrip_and_validate!(campaign_roundtrip, Campaign, pi_campaign());

roundtrip_and_validate!(lead_roundtrip, Lead, davis_lead());

roundtrip_and_validate!(
    compliance_rule_roundtrip,
    ComplianceRule,
    ComplianceRule {
        id: 3,
        name: "Solicitation Restrictions".into(),
        description: "No direct solicitation of accident victims".into(),
        category: RuleCategory::Solicitation,
        status: RuleStatus::Active,
        last_updated: date(2024, 12, 1),
    }
);

roundtrip_and_validate!(
    new_lead_without_status_roundtrip,
    NewLead,
    NewLead {
        name: "Ana Ruiz".into(),
        email: "ana@email.com".into(),
        phone: "(555) 222-3333".into(),
        source: LeadSource::Referral,
        campaign_id: 2,
        client_id: 1,
        practice_area: "Criminal Defense".into(),
        status: None,
        priority: Priority::Low,
        value: 1200.0,
        notes: None,
    }
);

roundtrip_and_validate!(
    lead_board_roundtrip,
    LeadBoard,
    LeadBoard {
        counts: LeadStatusCounts {
            new: 1,
            ..LeadStatusCounts::default()
        },
        leads: vec![LeadRow {
            lead: davis_lead(),
            client_name: Some("Smith & Associates Law Firm".into()),
            campaign_name: None,
            created: "2 days ago".into(),
        }],
    }
);

roundtrip_and_validate!(
    campaign_detail_roundtrip,
    Detail<CampaignDetail>,
    Detail::Found(CampaignDetail {
        tab: CampaignTab::Performance,
        campaign: pi_campaign(),
        client: None,
        leads: vec![davis_lead()],
        budget_usage: BudgetUsage {
            used_percent: 64.0,
            bar_percent: 64.0,
            remaining: 1800.0,
            label: "64.0% used".into(),
        },
        duration_days: 60,
        weekly_performance: vec![WeeklyPerformance {
            date: date(2024, 11, 1),
            leads: 8,
            cost: 450.0,
            conversions: 2,
        }],
    })
);

roundtrip_and_validate!(
    client_detail_not_found_roundtrip,
    Detail<ClientDetail>,
    Detail::NotFound {
        message: "Client not found".into(),
    }
);

roundtrip_and_validate!(
    compliance_page_roundtrip,
    CompliancePage,
    CompliancePage {
        tab: ComplianceTab::Reports,
        stats: ComplianceStats {
            compliant: 2,
            non_compliant: 0,
            under_review: 0,
            total_rules: 3,
        },
        rules: None,
        reports: Some(vec![ComplianceReport {
            id: 1,
            title: "Monthly Compliance Report - December 2024".into(),
            date: date(2024, 12, 1),
            status: "Completed".into(),
            issues: 0,
            checks: 15,
        }]),
    }
);

#[test]
fn client_uses_camel_case_field_names() {
    let json = serde_json::to_value(smith_law()).unwrap();
    assert_eq!(json["contactPerson"], "John Smith");
    assert_eq!(json["retainerValue"], 15000.0);
    assert_eq!(json["complianceStatus"], "Under Review");
    assert_eq!(json["joinDate"], "2024-01-15");
}

#[test]
fn campaign_type_field_is_named_type() {
    let json = serde_json::to_value(pi_campaign()).unwrap();
    assert_eq!(json["type"], "Google Ads");
    assert_eq!(json["complianceChecked"], true);
    assert!(json.get("campaignType").is_none());
}

#[test]
fn detail_is_tagged_by_state() {
    let json = serde_json::to_value(Detail::<ClientDetail>::NotFound {
        message: "Client not found".into(),
    })
    .unwrap();
    assert_eq!(json["state"], "not_found");
    assert_eq!(json["message"], "Client not found");
}
