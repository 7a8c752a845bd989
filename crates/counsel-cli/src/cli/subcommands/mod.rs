pub mod campaign;
pub mod client;
pub mod lead;
pub mod rule;

pub use campaign::{CampaignAddArgs, CampaignCommands, CampaignUpdateArgs};
pub use client::{ClientAddArgs, ClientCommands, ClientUpdateArgs};
pub use lead::{LeadAddArgs, LeadCommands, LeadUpdateArgs};
pub use rule::{RuleAddArgs, RuleCommands};
