//! Entity store startup configuration.

use serde::{Deserialize, Serialize};

const fn default_seed() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Start with the bundled sample clients, campaigns, leads and rules.
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed(),
        }
    }
}
