//! Page routes for `counsel open`.
//!
//! A route is a path plus an optional query string, e.g. `/leads?filter=new`
//! or `/clients?action=add`. Paths map onto the same views the dedicated
//! commands print; query parameters carry page state:
//!
//! - `action=add` marks the page's add form as open
//! - `filter=new|qualified` pre-selects the lead status filter; any other
//!   value resets it to all
//! - `tab=<name>` selects a detail or compliance tab
//!
//! A detail route whose id matches nothing renders the "not found"
//! placeholder rather than failing.

use anyhow::bail;
use chrono::Utc;
use serde::Serialize;

use counsel_config::CounselConfig;
use counsel_core::entities::Client;
use counsel_core::enums::{CampaignTab, ClientTab, ComplianceTab, LeadStatus};
use counsel_core::responses::{
    Analytics, CampaignDetail, CampaignRow, ClientDetail, CompliancePage, Dashboard, Detail,
    LeadBoard,
};
use counsel_store::views::detail::{CAMPAIGN_NOT_FOUND, CLIENT_NOT_FOUND};
use counsel_store::views::{
    CampaignFilter, ClientFilter, Facet, LeadFilter, analytics, campaign_detail, campaign_rows,
    client_detail, compliance_page, dashboard, lead_board,
};

use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Clients { add_form: bool },
    /// `id` is `None` when the path segment is not a number.
    Client { id: Option<u32>, tab: ClientTab },
    Campaigns { add_form: bool },
    Campaign { id: Option<u32>, tab: CampaignTab },
    Leads { add_form: bool, status: Facet<LeadStatus> },
    Analytics,
    Compliance { add_form: bool, tab: ComplianceTab },
    Settings,
}

/// Decoded query parameters the pages understand.
#[derive(Debug, Default)]
struct Query {
    action: Option<String>,
    filter: Option<String>,
    tab: Option<String>,
}

impl Query {
    fn parse(raw: &str) -> anyhow::Result<Self> {
        let mut query = Self::default();
        for pair in raw.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(key)?;
            let value = decode(value)?;
            match key.as_str() {
                "action" => query.action = Some(value),
                "filter" => query.filter = Some(value),
                "tab" => query.tab = Some(value),
                other => tracing::debug!(param = other, "ignoring unknown route parameter"),
            }
        }
        Ok(query)
    }

    fn add_form(&self) -> bool {
        self.action.as_deref() == Some("add")
    }

    fn lead_status(&self) -> Facet<LeadStatus> {
        match self.filter.as_deref() {
            Some("new") => Facet::Only(LeadStatus::New),
            Some("qualified") => Facet::Only(LeadStatus::Qualified),
            _ => Facet::All,
        }
    }

    fn tab<T>(&self) -> anyhow::Result<T>
    where
        T: Default + std::str::FromStr<Err = counsel_core::errors::CoreError>,
    {
        self.tab.as_deref().map_or_else(|| Ok(T::default()), parse_label)
    }
}

fn decode(raw: &str) -> anyhow::Result<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|error| anyhow::anyhow!("invalid percent-encoding in route '{raw}': {error}"))
}

impl Route {
    /// Parse `path[?query]`.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let raw = raw.trim();
        let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
        let query = Query::parse(query)?;

        let segments: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(decode)
            .collect::<anyhow::Result<_>>()?;
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        let route = match segments.as_slice() {
            [] => Self::Dashboard,
            ["clients"] => Self::Clients {
                add_form: query.add_form(),
            },
            ["clients", id] => Self::Client {
                id: id.parse().ok(),
                tab: query.tab()?,
            },
            ["campaigns"] => Self::Campaigns {
                add_form: query.add_form(),
            },
            ["campaigns", id] => Self::Campaign {
                id: id.parse().ok(),
                tab: query.tab()?,
            },
            ["leads"] => Self::Leads {
                add_form: query.add_form(),
                status: query.lead_status(),
            },
            ["analytics"] => Self::Analytics,
            ["compliance"] => Self::Compliance {
                add_form: query.add_form(),
                tab: query.tab()?,
            },
            ["settings"] => Self::Settings,
            _ => bail!("unknown route '{path}'"),
        };
        Ok(route)
    }

    /// Build the page this route shows from the current store state.
    pub fn render(&self, ctx: &AppContext) -> Page {
        let snapshot = ctx.store.snapshot();
        let (add_form_open, view) = match self {
            Self::Dashboard => (
                false,
                PageView::Dashboard(dashboard(&snapshot, ctx.dashboard_limits())),
            ),
            Self::Clients { add_form } => (
                *add_form,
                PageView::Clients(ClientFilter::default().apply(&snapshot)),
            ),
            Self::Client { id, tab } => (
                false,
                PageView::Client(id.map_or_else(
                    || Detail::NotFound {
                        message: CLIENT_NOT_FOUND.to_string(),
                    },
                    |id| client_detail(&snapshot, id, *tab),
                )),
            ),
            Self::Campaigns { add_form } => (
                *add_form,
                PageView::Campaigns(campaign_rows(&snapshot, &CampaignFilter::default())),
            ),
            Self::Campaign { id, tab } => (
                false,
                PageView::Campaign(id.map_or_else(
                    || Detail::NotFound {
                        message: CAMPAIGN_NOT_FOUND.to_string(),
                    },
                    |id| campaign_detail(&snapshot, id, *tab),
                )),
            ),
            Self::Leads { add_form, status } => {
                let filter = LeadFilter {
                    status: status.clone(),
                    ..LeadFilter::default()
                };
                (
                    *add_form,
                    PageView::Leads(lead_board(&snapshot, &filter, Utc::now())),
                )
            }
            Self::Analytics => (false, PageView::Analytics(analytics(&snapshot))),
            Self::Compliance { add_form, tab } => (
                *add_form,
                PageView::Compliance(compliance_page(&snapshot, *tab)),
            ),
            Self::Settings => (false, PageView::Settings(ctx.config.clone())),
        };
        Page {
            path: self.path(),
            add_form_open,
            view,
        }
    }

    /// Canonical path, without query.
    pub fn path(&self) -> String {
        match self {
            Self::Dashboard => "/".to_string(),
            Self::Clients { .. } => "/clients".to_string(),
            Self::Client { id, .. } => {
                format!("/clients/{}", id.map_or_else(String::new, |id| id.to_string()))
            }
            Self::Campaigns { .. } => "/campaigns".to_string(),
            Self::Campaign { id, .. } => {
                format!("/campaigns/{}", id.map_or_else(String::new, |id| id.to_string()))
            }
            Self::Leads { .. } => "/leads".to_string(),
            Self::Analytics => "/analytics".to_string(),
            Self::Compliance { .. } => "/compliance".to_string(),
            Self::Settings => "/settings".to_string(),
        }
    }
}

/// A rendered route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub path: String,
    pub add_form_open: bool,
    pub view: PageView,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum PageView {
    Dashboard(Dashboard),
    Clients(Vec<Client>),
    Client(Detail<ClientDetail>),
    Campaigns(Vec<CampaignRow>),
    Campaign(Detail<CampaignDetail>),
    Leads(LeadBoard),
    Analytics(Analytics),
    Compliance(CompliancePage),
    Settings(CounselConfig),
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ctx() -> AppContext {
        AppContext::init(CounselConfig::default(), false)
    }

    #[test]
    fn root_and_trailing_slashes() {
        assert_eq!(Route::parse("/").unwrap(), Route::Dashboard);
        assert_eq!(Route::parse("").unwrap(), Route::Dashboard);
        assert_eq!(
            Route::parse("/clients/").unwrap(),
            Route::Clients { add_form: false }
        );
    }

    #[test]
    fn action_add_opens_the_form() {
        assert_eq!(
            Route::parse("/campaigns?action=add").unwrap(),
            Route::Campaigns { add_form: true }
        );
        assert_eq!(
            Route::parse("/campaigns?action=edit").unwrap(),
            Route::Campaigns { add_form: false }
        );
    }

    #[test]
    fn lead_filter_only_knows_new_and_qualified() {
        let status = |raw: &str| match Route::parse(raw).unwrap() {
            Route::Leads { status, .. } => status,
            other => panic!("expected leads route, got {other:?}"),
        };
        assert_eq!(status("/leads?filter=new"), Facet::Only(LeadStatus::New));
        assert_eq!(
            status("/leads?filter=qualified&action=add"),
            Facet::Only(LeadStatus::Qualified)
        );
        assert_eq!(status("/leads?filter=converted"), Facet::All);
        assert_eq!(status("/leads"), Facet::All);
    }

    #[test]
    fn detail_routes_carry_id_and_tab() {
        assert_eq!(
            Route::parse("/clients/2?tab=leads").unwrap(),
            Route::Client {
                id: Some(2),
                tab: ClientTab::Leads
            }
        );
        assert_eq!(
            Route::parse("/campaigns/abc").unwrap(),
            Route::Campaign {
                id: None,
                tab: CampaignTab::Overview
            }
        );
        assert!(Route::parse("/compliance?tab=audits").is_err());
    }

    #[test]
    fn query_values_are_percent_decoded() {
        assert_eq!(
            Route::parse("/compliance?tab=%72ules").unwrap(),
            Route::Compliance {
                add_form: false,
                tab: ComplianceTab::Rules
            }
        );
    }

    #[test]
    fn unknown_paths_are_errors() {
        let err = Route::parse("/billing").unwrap_err();
        assert_eq!(err.to_string(), "unknown route '/billing'");
        assert!(Route::parse("/clients/1/notes").is_err());
    }

    #[test]
    fn missing_client_renders_placeholder() {
        let page = Route::parse("/clients/42").unwrap().render(&ctx());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["path"], "/clients/42");
        assert_eq!(json["view"]["state"], "not_found");
        assert_eq!(json["view"]["message"], "Client not found");
    }

    #[test]
    fn non_numeric_campaign_id_renders_placeholder() {
        let page = Route::parse("/campaigns/latest").unwrap().render(&ctx());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["view"]["message"], "Campaign not found");
    }

    #[test]
    fn filtered_lead_page_counts_only_matches() {
        let page = Route::parse("/leads?filter=new").unwrap().render(&ctx());
        let PageView::Leads(board) = page.view else {
            panic!("expected lead board");
        };
        assert_eq!(board.leads.len(), 1);
        assert_eq!(board.counts.qualified, 0);
    }

    #[test]
    fn settings_show_the_config() {
        let page = Route::parse("/settings").unwrap().render(&ctx());
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["view"]["general"]["default_limit"], 20);
        assert_eq!(json["addFormOpen"], false);
    }
}
