use clap::{Args, Subcommand};

/// Marketing campaign commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CampaignCommands {
    /// List campaigns with budget usage.
    List {
        /// Matches campaign name.
        #[arg(long)]
        search: Option<String>,
        /// Active, Paused, Completed or all.
        #[arg(long)]
        status: Option<String>,
        /// Campaign type label or all.
        #[arg(long = "type")]
        campaign_type: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a campaign with its client, leads and performance.
    Get {
        id: u32,
        /// overview, leads or performance
        #[arg(long, default_value = "overview")]
        tab: String,
    },
    /// Create a campaign.
    Add(CampaignAddArgs),
    /// Update a campaign.
    Update(CampaignUpdateArgs),
}

/// Raw "Create Campaign" form fields.
#[derive(Clone, Debug, Default, Args)]
pub struct CampaignAddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub client_id: Option<String>,
    #[arg(long = "type")]
    pub campaign_type: Option<String>,
    #[arg(long)]
    pub budget: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub start_date: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub end_date: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct CampaignUpdateArgs {
    pub id: u32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub client_id: Option<u32>,
    #[arg(long = "type")]
    pub campaign_type: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub budget: Option<f64>,
    #[arg(long)]
    pub spent: Option<f64>,
    #[arg(long)]
    pub start_date: Option<String>,
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long)]
    pub compliance_checked: Option<bool>,
}
