use serde::{Deserialize, Serialize};

use super::{Checker, FormErrors};
use crate::entities::NewCampaign;
use crate::enums::{CampaignStatus, CampaignType};

/// The "Create Campaign" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignForm {
    pub name: String,
    pub client_id: String,
    #[serde(rename = "type")]
    pub campaign_type: String,
    pub budget: String,
    pub start_date: String,
    pub end_date: String,
}

impl CampaignForm {
    /// Check every field and build the store input. New campaigns start active.
    ///
    /// # Errors
    ///
    /// Returns `FormErrors` listing every rejected field.
    pub fn validate(&self) -> Result<NewCampaign, FormErrors> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name, "Campaign name is required");
        let client_id = check.id("clientId", &self.client_id, "Client is required");
        let campaign_type = check.label::<CampaignType>(
            "type",
            &self.campaign_type,
            "Campaign type is required",
        );
        let budget = check.amount(
            "budget",
            &self.budget,
            "Budget is required",
            1.0,
            "Budget must be at least $1",
        );
        let start_date = check.date("startDate", &self.start_date, "Start date is required");
        let end_date = check.date("endDate", &self.end_date, "End date is required");

        match (name, client_id, campaign_type, budget, start_date, end_date) {
            (
                Some(name),
                Some(client_id),
                Some(campaign_type),
                Some(budget),
                Some(start_date),
                Some(end_date),
            ) if check.is_clean() => Ok(NewCampaign {
                name,
                client_id,
                campaign_type,
                status: CampaignStatus::Active,
                budget,
                start_date,
                end_date,
            }),
            _ => Err(check.into_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn seo_push() -> CampaignForm {
        CampaignForm {
            name: "Estate Planning SEO".into(),
            client_id: "2".into(),
            campaign_type: "seo".into(),
            budget: "2500".into(),
            start_date: "2025-01-01".into(),
            end_date: "2025-03-31".into(),
        }
    }

    #[test]
    fn valid_form_starts_active() {
        let campaign = seo_push().validate().unwrap();
        assert_eq!(campaign.status, CampaignStatus::Active);
        assert_eq!(campaign.campaign_type, CampaignType::Seo);
        assert_eq!(campaign.client_id, 2);
        assert_eq!(
            campaign.end_date,
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap()
        );
    }

    #[test]
    fn budget_below_one_dollar_is_rejected() {
        let mut form = seo_push();
        form.budget = "0".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("budget"), Some("Budget must be at least $1"));
    }

    #[test]
    fn missing_selections_use_required_messages() {
        let mut form = seo_push();
        form.client_id = String::new();
        form.campaign_type = String::new();
        form.start_date = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("clientId"), Some("Client is required"));
        assert_eq!(errors.message_for("type"), Some("Campaign type is required"));
        assert_eq!(errors.message_for("startDate"), Some("Start date is required"));
        assert_eq!(errors.message_for("endDate"), None);
    }

    #[test]
    fn unknown_type_reports_the_allowed_labels() {
        let mut form = seo_push();
        form.campaign_type = "billboard".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.message_for("type").unwrap().contains("Google Ads"));
    }
}
