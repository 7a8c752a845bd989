//! General application configuration.

use serde::{Deserialize, Serialize};

/// Output formats accepted for `general.default_format`.
pub const OUTPUT_FORMATS: &[&str] = &["json", "table", "raw"];

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

fn default_format() -> String {
    String::from("json")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Output format used when `--format` is not given.
    #[serde(default = "default_format")]
    pub default_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            default_format: default_format(),
        }
    }
}
