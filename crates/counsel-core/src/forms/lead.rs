use serde::{Deserialize, Serialize};

use super::{Checker, FormErrors};
use crate::catalog::canonical_practice_area;
use crate::entities::NewLead;
use crate::enums::{LeadSource, LeadStatus, Priority};

/// The "Add Lead" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub practice_area: String,
    pub source: String,
    pub client_id: String,
    pub campaign_id: String,
    pub priority: String,
    pub value: String,
    pub notes: Option<String>,
}

impl LeadForm {
    /// Check every field and build the store input, marked `New`.
    ///
    /// # Errors
    ///
    /// Returns `FormErrors` listing every rejected field.
    pub fn validate(&self) -> Result<NewLead, FormErrors> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name, "Name is required");
        let email = check.email("email", &self.email, "Email is required");
        let phone = check.required("phone", &self.phone, "Phone is required");
        let practice_area = check
            .required("practiceArea", &self.practice_area, "Practice area is required")
            .map(|area| canonical_practice_area(&area).map_or(area, String::from));
        let source = check.label::<LeadSource>("source", &self.source, "Source is required");
        let client_id = check.id("clientId", &self.client_id, "Client is required");
        let campaign_id = check.id("campaignId", &self.campaign_id, "Campaign is required");
        let priority = check.label::<Priority>("priority", &self.priority, "Priority is required");
        let value = check.amount(
            "value",
            &self.value,
            "Value is required",
            0.0,
            "Value must be positive",
        );

        match (
            name,
            email,
            phone,
            practice_area,
            source,
            client_id,
            campaign_id,
            priority,
            value,
        ) {
            (
                Some(name),
                Some(email),
                Some(phone),
                Some(practice_area),
                Some(source),
                Some(client_id),
                Some(campaign_id),
                Some(priority),
                Some(value),
            ) if check.is_clean() => Ok(NewLead {
                name,
                email,
                phone,
                source,
                campaign_id,
                client_id,
                practice_area,
                status: Some(LeadStatus::New),
                priority,
                value,
                notes: Checker::optional(self.notes.as_deref()),
            }),
            _ => Err(check.into_errors()),
        }
    }
}
