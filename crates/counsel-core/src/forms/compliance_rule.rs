use serde::{Deserialize, Serialize};

use super::{Checker, FormErrors};
use crate::entities::NewComplianceRule;
use crate::enums::{RuleCategory, Severity};

/// The "Add Compliance Rule" form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ComplianceRuleForm {
    pub name: String,
    pub category: String,
    pub description: String,
    pub states: Option<String>,
    pub severity: String,
}

impl ComplianceRuleForm {
    /// # Errors
    ///
    /// Returns `FormErrors` listing every rejected field.
    pub fn validate(&self) -> Result<NewComplianceRule, FormErrors> {
        let mut check = Checker::default();

        let name = check.required("name", &self.name, "Rule name is required");
        let category = check.label::<RuleCategory>("category", &self.category, "Category is required");
        let description =
            check.required("description", &self.description, "Description is required");
        let severity = check.label::<Severity>("severity", &self.severity, "Severity is required");

        match (name, category, description, severity) {
            (Some(name), Some(category), Some(description), Some(severity))
                if check.is_clean() =>
            {
                Ok(NewComplianceRule {
                    name,
                    category,
                    description,
                    states: Checker::optional(self.states.as_deref()),
                    severity,
                })
            }
            _ => Err(check.into_errors()),
        }
    }
}
