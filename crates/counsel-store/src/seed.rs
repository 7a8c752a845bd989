//! Built-in sample records loaded by [`crate::CrmStore::seeded`].

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use counsel_core::entities::{Campaign, Client, ComplianceRule, Lead};
use counsel_core::enums::{
    CampaignStatus, CampaignType, ClientStatus, ComplianceStatus, LeadSource, LeadStatus,
    Priority, RuleCategory, RuleStatus,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn at(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

#[must_use]
pub fn clients() -> Vec<Client> {
    vec![
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
            join_date: day(2024, 1, 15),
            last_contact: Some(day(2024, 12, 10)),
            address: Some("123 Main St, City, State 12345".into()),
            bar_number: Some("BAR123456".into()),
            compliance_status: ComplianceStatus::Compliant,
            campaigns: vec![1, 2],
            leads: 24,
            conversions: 8,
            roi: 320.0,
        },
        Client {
            id: 2,
            name: "Johnson Legal Group".into(),
            contact_person: "Emily Johnson".into(),
            email: "emily@johnsonlegal.com".into(),
            phone: "(555) 987-6543".into(),
            practice_areas: vec!["Family Law".into(), "Estate Planning".into()],
            status: ClientStatus::Active,
            retainer_value: 12000.0,
            monthly_spend: 1800.0,
            join_date: day(2024, 2, 20),
            last_contact: Some(day(2024, 12, 8)),
            address: Some("456 Oak Ave, City, State 12345".into()),
            bar_number: Some("BAR789012".into()),
            compliance_status: ComplianceStatus::Compliant,
            campaigns: vec![3],
            leads: 18,
            conversions: 6,
            roi: 280.0,
        },
    ]
}

#[must_use]
pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: 1,
            name: "Personal Injury Lead Generation".into(),
            client_id: 1,
            campaign_type: CampaignType::GoogleAds,
            status: CampaignStatus::Active,
            budget: 5000.0,
            spent: 3200.0,
            start_date: day(2024, 11, 1),
            end_date: day(2024, 12, 31),
            leads: 45,
            conversions: 12,
            cpl: 71.0,
            roi: 340.0,
            compliance_checked: true,
        },
        Campaign {
            id: 2,
            name: "Criminal Defense SEO".into(),
            client_id: 1,
            campaign_type: CampaignType::Seo,
            status: CampaignStatus::Active,
            budget: 3000.0,
            spent: 2100.0,
            start_date: day(2024, 10, 15),
            end_date: day(2024, 12, 31),
            leads: 28,
            conversions: 8,
            cpl: 75.0,
            roi: 280.0,
            compliance_checked: true,
        },
        Campaign {
            id: 3,
            name: "Family Law Content Marketing".into(),
            client_id: 2,
            campaign_type: CampaignType::ContentMarketing,
            status: CampaignStatus::Active,
            budget: 2500.0,
            spent: 1800.0,
            start_date: day(2024, 11, 15),
            end_date: day(2024, 12, 31),
            leads: 18,
            conversions: 6,
            cpl: 100.0,
            roi: 220.0,
            compliance_checked: true,
        },
    ]
}

#[must_use]
pub fn leads() -> Vec<Lead> {
    vec![
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
            created_at: at(12, 10, 10, 30),
            last_contact: at(12, 10, 10, 30),
            compliance_flags: Vec::new(),
        },
        Lead {
            id: 2,
            name: "Lisa Thompson".into(),
            email: "lisa@email.com".into(),
            phone: "(555) 333-4444".into(),
            source: LeadSource::Seo,
            campaign_id: 2,
            client_id: 1,
            practice_area: "Criminal Defense".into(),
            status: LeadStatus::Qualified,
            priority: Priority::Medium,
            value: 3000.0,
            notes: Some("DUI case, needs consultation".into()),
            created_at: at(12, 9, 14, 15),
            last_contact: at(12, 9, 16, 20),
            compliance_flags: Vec::new(),
        },
    ]
}

#[must_use]
pub fn compliance_rules() -> Vec<ComplianceRule> {
    let updated = day(2024, 12, 1);
    vec![
        ComplianceRule {
            id: 1,
            name: "Attorney Advertising Compliance".into(),
            description: "All advertising must comply with state bar regulations".into(),
            category: RuleCategory::Advertising,
            status: RuleStatus::Active,
            last_updated: updated,
        },
        ComplianceRule {
            id: 2,
            name: "Client Confidentiality".into(),
            description: "Ensure all client communications are confidential".into(),
            category: RuleCategory::Privacy,
            status: RuleStatus::Active,
            last_updated: updated,
        },
        ComplianceRule {
            id: 3,
            name: "Solicitation Restrictions".into(),
            description: "No direct solicitation of accident victims".into(),
            category: RuleCategory::Solicitation,
            status: RuleStatus::Active,
            last_updated: updated,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_sequential() {
        let ids: Vec<u32> = campaigns().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn seed_references_resolve() {
        let clients = clients();
        let campaigns = campaigns();
        for lead in leads() {
            assert!(clients.iter().any(|c| c.id == lead.client_id));
            assert!(campaigns.iter().any(|c| c.id == lead.campaign_id));
        }
    }

    #[test]
    fn seed_timestamps_are_exact() {
        let lisa = &leads()[1];
        assert_eq!(lisa.created_at.to_rfc3339(), "2024-12-09T14:15:00+00:00");
        assert_eq!(lisa.last_contact.to_rfc3339(), "2024-12-09T16:20:00+00:00");
    }
}
