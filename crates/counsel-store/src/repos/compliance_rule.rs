//! Compliance rule lookups. Rules are read-only in the store.

use std::sync::Arc;

use counsel_core::entities::ComplianceRule;
use counsel_core::ids::{ENTITY_RULE, RuleId};

use crate::error::StoreError;
use crate::store::CrmStore;

impl CrmStore {
    /// Look up a compliance rule by id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no rule has this id.
    pub fn rule(&self, id: RuleId) -> Result<Arc<ComplianceRule>, StoreError> {
        self.find_rule(id)
            .ok_or_else(|| StoreError::not_found(ENTITY_RULE, id))
    }

    #[must_use]
    pub fn find_rule(&self, id: RuleId) -> Option<Arc<ComplianceRule>> {
        self.rules.find(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_rules_resolve() {
        let store = CrmStore::seeded();
        assert_eq!(store.rule(2).unwrap().name, "Client Confidentiality");
        assert_eq!(
            store.rule(4).unwrap_err().to_string(),
            "compliance_rule 4 not found"
        );
    }
}
