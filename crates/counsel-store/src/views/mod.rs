//! Derived view computations.
//!
//! Every function here is a pure function of a [`crate::Snapshot`] (plus an
//! explicit `now` where relative time is shown). Calling one twice on the same
//! snapshot gives the same answer.

pub mod detail;
pub mod filter;
pub mod format;
pub mod metrics;
pub mod pages;
pub mod ranking;
pub mod samples;

pub use detail::{campaign_detail, client_detail};
pub use filter::{CampaignFilter, ClientFilter, Facet, LeadFilter};
pub use pages::{DashboardLimits, analytics, campaign_rows, compliance_page, dashboard, lead_board};
