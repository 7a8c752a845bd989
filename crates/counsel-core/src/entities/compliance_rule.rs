use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{RuleCategory, RuleStatus, Severity};
use crate::ids::RuleId;

/// A bar-advertising rule displayed on the compliance page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRule {
    pub id: RuleId,
    pub name: String,
    pub description: String,
    pub category: RuleCategory,
    pub status: RuleStatus,
    pub last_updated: NaiveDate,
}

/// A validated add-rule submission.
///
/// The store has no add operation for rules yet, so this value is only
/// reported back to the user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewComplianceRule {
    pub name: String,
    pub category: RuleCategory,
    pub description: String,
    /// Free-form list of states the rule applies to.
    pub states: Option<String>,
    pub severity: Severity,
}
