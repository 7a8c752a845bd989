//! Dashboard panel sizes.

use serde::{Deserialize, Serialize};

const fn default_top_clients() -> usize {
    3
}

const fn default_follow_up_leads() -> usize {
    4
}

const fn default_recent_leads() -> usize {
    5
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Clients shown in "Top Performing Law Firms".
    #[serde(default = "default_top_clients")]
    pub top_clients: usize,

    /// New or qualified leads shown as needing follow-up.
    #[serde(default = "default_follow_up_leads")]
    pub follow_up_leads: usize,

    /// Leads shown in the recent interactions panel.
    #[serde(default = "default_recent_leads")]
    pub recent_leads: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            top_clients: default_top_clients(),
            follow_up_leads: default_follow_up_leads(),
            recent_leads: default_recent_leads(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_panels() {
        let config = DashboardConfig::default();
        assert_eq!(config.top_clients, 3);
        assert_eq!(config.follow_up_leads, 4);
        assert_eq!(config.recent_leads, 5);
    }
}
