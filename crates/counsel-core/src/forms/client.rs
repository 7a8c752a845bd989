use serde::{Deserialize, Serialize};

use super::{Checker, FormErrors};
use crate::catalog::canonical_practice_area;
use crate::entities::NewClient;
use crate::enums::ComplianceStatus;

/// The "Add Law Firm" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientForm {
    pub name: String,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub bar_number: Option<String>,
    pub monthly_spend: String,
    pub retainer_value: String,
    pub address: Option<String>,
    /// Toggled practice areas, in selection order.
    pub practice_areas: Vec<String>,
}

impl ClientForm {
    /// Check every field and build the store input.
    ///
    /// New firms are recorded as compliant; the store fills in the rest of the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns `FormErrors` listing every rejected field.
    pub fn validate(&self) -> Result<NewClient, FormErrors> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name, "Firm name is required");
        let contact_person = check.required(
            "contactPerson",
            &self.contact_person,
            "Contact person is required",
        );
        let email = check.email("email", &self.email, "Email is required");
        let phone = check.required("phone", &self.phone, "Phone is required");
        let monthly_spend = check.amount(
            "monthlySpend",
            &self.monthly_spend,
            "Monthly spend is required",
            0.0,
            "Must be positive",
        );
        let retainer_value = check.amount(
            "retainerValue",
            &self.retainer_value,
            "Retainer value is required",
            0.0,
            "Must be positive",
        );

        let mut practice_areas: Vec<String> = Vec::new();
        for raw in &self.practice_areas {
            let area = canonical_practice_area(raw).map_or_else(|| raw.trim().to_string(), String::from);
            if !area.is_empty() && !practice_areas.contains(&area) {
                practice_areas.push(area);
            }
        }
        check.ensure(
            !practice_areas.is_empty(),
            "practiceAreas",
            "Select at least one practice area",
        );

        match (name, contact_person, email, phone, monthly_spend, retainer_value) {
            (
                Some(name),
                Some(contact_person),
                Some(email),
                Some(phone),
                Some(monthly_spend),
                Some(retainer_value),
            ) if check.is_clean() => Ok(NewClient {
                name,
                contact_person,
                email,
                phone,
                practice_areas,
                retainer_value,
                monthly_spend,
                address: Checker::optional(self.address.as_deref()),
                bar_number: Checker::optional(self.bar_number.as_deref()),
                compliance_status: ComplianceStatus::Compliant,
            }),
            _ => Err(check.into_errors()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn doe_law() -> ClientForm {
        ClientForm {
            name: "Doe Law".into(),
            contact_person: "Jane Doe".into(),
            email: "jane@doelaw.com".into(),
            phone: "(555) 000-1111".into(),
            bar_number: Some(String::new()),
            monthly_spend: "1500".into(),
            retainer_value: "9000".into(),
            address: None,
            practice_areas: vec!["family law".into()],
        }
    }

    #[test]
    fn valid_form_builds_compliant_client_input() {
        let client = doe_law().validate().expect("form should validate");
        assert_eq!(client.name, "Doe Law");
        assert_eq!(client.practice_areas, vec!["Family Law".to_string()]);
        assert_eq!(client.compliance_status, ComplianceStatus::Compliant);
        assert_eq!(client.monthly_spend, 1500.0);
        assert_eq!(client.bar_number, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = ClientForm::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.fields().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(
            fields,
            vec![
                "name",
                "contactPerson",
                "email",
                "phone",
                "monthlySpend",
                "retainerValue",
                "practiceAreas"
            ]
        );
        assert_eq!(errors.message_for("name"), Some("Firm name is required"));
        assert_eq!(
            errors.message_for("practiceAreas"),
            Some("Select at least one practice area")
        );
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let mut form = doe_law();
        form.retainer_value = "-1".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.message_for("retainerValue"), Some("Must be positive"));
    }

    #[test]
    fn zero_spend_is_allowed() {
        let mut form = doe_law();
        form.monthly_spend = "0".into();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn duplicate_practice_areas_collapse() {
        let mut form = doe_law();
        form.practice_areas = vec!["Family Law".into(), "FAMILY LAW".into(), "Tax Law".into()];
        let client = form.validate().unwrap();
        assert_eq!(client.practice_areas, vec!["Family Law", "Tax Law"]);
    }
}
