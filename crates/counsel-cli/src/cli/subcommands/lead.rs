use clap::{Args, Subcommand};

/// Lead pipeline commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LeadCommands {
    /// List leads with status counts.
    List {
        /// Matches lead name or email.
        #[arg(long)]
        search: Option<String>,
        /// New, Qualified, Converted, Lost or all.
        #[arg(long)]
        status: Option<String>,
        /// High, Medium, Low or all.
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        source: Option<String>,
        #[arg(long)]
        practice_area: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a lead by ID.
    Get { id: u32 },
    /// Add a lead.
    Add(LeadAddArgs),
    /// Update a lead.
    Update(LeadUpdateArgs),
    /// Move a lead to another pipeline status.
    Status { id: u32, status: String },
}

/// Raw "Add Lead" form fields.
#[derive(Clone, Debug, Default, Args)]
pub struct LeadAddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub practice_area: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub client_id: Option<String>,
    #[arg(long)]
    pub campaign_id: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub value: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct LeadUpdateArgs {
    pub id: u32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub source: Option<String>,
    #[arg(long)]
    pub campaign_id: Option<u32>,
    #[arg(long)]
    pub client_id: Option<u32>,
    #[arg(long)]
    pub practice_area: Option<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub value: Option<f64>,
    #[arg(long)]
    pub notes: Option<String>,
    /// Remove the notes.
    #[arg(long, conflicts_with = "notes")]
    pub clear_notes: bool,
    /// Stamp last contact with the current time.
    #[arg(long)]
    pub touch: bool,
}
