//! Label enums for Counsel entities and views.
//!
//! Every enum serializes as its display label (e.g. `"Under Review"`,
//! `"Google Ads"`), matching the strings shown to users. Parsing via
//! [`FromStr`] is case-insensitive and treats `-`, `_` and spaces alike, so
//! `google-ads`, `GOOGLE_ADS` and `Google Ads` all resolve to the same value.
//!
//! Statuses here are flat: any value may replace any other. The store does not
//! guard transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// Lowercase a label and fold separators to single spaces.
fn normalize_label(raw: &str) -> String {
    raw.trim()
        .chars()
        .map(|ch| match ch {
            '-' | '_' => ' ',
            other => other.to_ascii_lowercase(),
        })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in display order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Return the display label.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let wanted = normalize_label(raw);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|value| normalize_label(value.as_str()) == wanted)
                    .ok_or_else(|| CoreError::InvalidLabel {
                        kind: $kind,
                        value: raw.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|value| value.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Engagement status of a law-firm client.
    ClientStatus, "client status" {
        Active => "Active",
        Inactive => "Inactive",
        Pending => "Pending",
    }
}

labeled_enum! {
    /// Bar-advertising compliance standing of a client.
    ComplianceStatus, "compliance status" {
        Compliant => "Compliant",
        NonCompliant => "Non-Compliant",
        UnderReview => "Under Review",
    }
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Marketing channel a campaign runs on.
    CampaignType, "campaign type" {
        GoogleAds => "Google Ads",
        Seo => "SEO",
        ContentMarketing => "Content Marketing",
        SocialMedia => "Social Media",
        EmailMarketing => "Email Marketing",
    }
}

labeled_enum! {
    /// Run state of a campaign.
    CampaignStatus, "campaign status" {
        Active => "Active",
        Paused => "Paused",
        Completed => "Completed",
    }
}

// ---------------------------------------------------------------------------
// Leads
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Channel a lead arrived through.
    LeadSource, "lead source" {
        GoogleAds => "Google Ads",
        Seo => "SEO",
        ContentMarketing => "Content Marketing",
        SocialMedia => "Social Media",
        Referral => "Referral",
        Direct => "Direct",
    }
}

labeled_enum! {
    /// Pipeline status of a lead.
    ///
    /// New leads always start as `New`; the status selector may then set any
    /// other value.
    LeadStatus, "lead status" {
        New => "New",
        Qualified => "Qualified",
        Converted => "Converted",
        Lost => "Lost",
    }
}

labeled_enum! {
    /// Follow-up priority of a lead.
    Priority, "priority" {
        High => "High",
        Medium => "Medium",
        Low => "Low",
    }
}

// ---------------------------------------------------------------------------
// Compliance
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Regulatory area a compliance rule belongs to.
    RuleCategory, "rule category" {
        Advertising => "Advertising",
        Privacy => "Privacy",
        Solicitation => "Solicitation",
        Ethics => "Ethics",
        Disclosure => "Disclosure",
    }
}

labeled_enum! {
    RuleStatus, "rule status" {
        Active => "Active",
        Inactive => "Inactive",
    }
}

labeled_enum! {
    /// Severity picked on the add-rule form.
    Severity, "severity" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

// ---------------------------------------------------------------------------
// Tabs
// ---------------------------------------------------------------------------

labeled_enum! {
    /// Tabs on the client detail page.
    ClientTab, "client tab" {
        Overview => "overview",
        Campaigns => "campaigns",
        Leads => "leads",
    }
}

labeled_enum! {
    /// Tabs on the campaign detail page.
    CampaignTab, "campaign tab" {
        Overview => "overview",
        Leads => "leads",
        Performance => "performance",
    }
}

labeled_enum! {
    /// Tabs on the compliance page.
    ComplianceTab, "compliance tab" {
        Overview => "overview",
        Rules => "rules",
        Reports => "reports",
    }
}

impl Default for ClientTab {
    fn default() -> Self {
        Self::Overview
    }
}

impl Default for CampaignTab {
    fn default() -> Self {
        Self::Overview
    }
}

impl Default for ComplianceTab {
    fn default() -> Self {
        Self::Overview
    }
}
