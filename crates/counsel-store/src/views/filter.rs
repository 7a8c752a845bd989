//! Text search and facet filters for the list pages.
//!
//! A record is shown when it matches the search term and every facet; output
//! keeps collection order.

use std::str::FromStr;

use counsel_core::entities::{Campaign, Client, Lead};
use counsel_core::enums::{
    CampaignStatus, CampaignType, ClientStatus, LeadSource, LeadStatus, Priority,
};

use crate::store::Snapshot;

/// One facet of a filter: unconstrained, or a single accepted value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    #[must_use]
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }
}

impl Facet<String> {
    /// Case-insensitive match for free-form labels such as practice areas.
    #[must_use]
    pub fn admits_label(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted.eq_ignore_ascii_case(value),
        }
    }
}

impl<T> From<Option<T>> for Facet<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

/// `"all"` (any case) means unconstrained; anything else parses as a value.
impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            raw.parse().map(Self::Only)
        }
    }
}

/// Case-insensitive substring match against any of `fields`.
///
/// An empty or blank term matches everything.
#[must_use]
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    let term = term.trim().to_lowercase();
    term.is_empty()
        || fields
            .iter()
            .any(|field| field.to_lowercase().contains(&term))
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub search: String,
    pub status: Facet<ClientStatus>,
}

impl ClientFilter {
    /// Search covers firm name and contact person.
    #[must_use]
    pub fn matches(&self, client: &Client) -> bool {
        matches_search(&self.search, &[&client.name, &client.contact_person])
            && self.status.admits(&client.status)
    }

    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot) -> Vec<Client> {
        snapshot
            .clients()
            .iter()
            .filter(|client| self.matches(client))
            .map(|client| Client::clone(client))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub search: String,
    pub status: Facet<CampaignStatus>,
    pub campaign_type: Facet<CampaignType>,
}

impl CampaignFilter {
    /// Search covers the campaign name only.
    #[must_use]
    pub fn matches(&self, campaign: &Campaign) -> bool {
        matches_search(&self.search, &[&campaign.name])
            && self.status.admits(&campaign.status)
            && self.campaign_type.admits(&campaign.campaign_type)
    }

    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot) -> Vec<Campaign> {
        snapshot
            .campaigns()
            .iter()
            .filter(|campaign| self.matches(campaign))
            .map(|campaign| Campaign::clone(campaign))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    pub search: String,
    pub status: Facet<LeadStatus>,
    pub priority: Facet<Priority>,
    pub source: Facet<LeadSource>,
    pub practice_area: Facet<String>,
}

impl LeadFilter {
    /// Search covers lead name and email.
    #[must_use]
    pub fn matches(&self, lead: &Lead) -> bool {
        matches_search(&self.search, &[&lead.name, &lead.email])
            && self.status.admits(&lead.status)
            && self.priority.admits(&lead.priority)
            && self.source.admits(&lead.source)
            && self.practice_area.admits_label(&lead.practice_area)
    }

    #[must_use]
    pub fn apply(&self, snapshot: &Snapshot) -> Vec<Lead> {
        snapshot
            .leads()
            .iter()
            .filter(|lead| self.matches(lead))
            .map(|lead| Lead::clone(lead))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::CrmStore;

    fn names<T>(records: &[T], name: impl Fn(&T) -> &str) -> Vec<String> {
        records.iter().map(|r| name(r).to_string()).collect()
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case("smith", true)]
    #[case("EMILY", false)]
    #[case("john s", true)]
    fn search_is_case_insensitive_substring(#[case] term: &str, #[case] expected: bool) {
        assert_eq!(
            matches_search(term, &["Smith & Associates Law Firm", "John Smith"]),
            expected
        );
    }

    #[test]
    fn facet_parses_all_or_value() {
        assert_eq!("ALL".parse::<Facet<LeadStatus>>().unwrap(), Facet::All);
        assert_eq!(
            "qualified".parse::<Facet<LeadStatus>>().unwrap(),
            Facet::Only(LeadStatus::Qualified)
        );
        assert!("sideways".parse::<Facet<LeadStatus>>().is_err());
    }

    #[test]
    fn default_filters_return_everything_in_order() {
        let snap = CrmStore::seeded().snapshot();
        let clients = ClientFilter::default().apply(&snap);
        let campaigns = CampaignFilter::default().apply(&snap);
        let leads = LeadFilter::default().apply(&snap);

        assert_eq!(clients.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(campaigns.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(leads.iter().map(|l| l.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn client_search_covers_contact_person() {
        let snap = CrmStore::seeded().snapshot();
        let filter = ClientFilter {
            search: "emily".into(),
            ..ClientFilter::default()
        };
        assert_eq!(
            names(&filter.apply(&snap), |c| &c.name),
            vec!["Johnson Legal Group"]
        );
    }

    #[test]
    fn campaign_facets_combine() {
        let snap = CrmStore::seeded().snapshot();
        let seo = CampaignFilter {
            campaign_type: Facet::Only(CampaignType::Seo),
            ..CampaignFilter::default()
        };
        assert_eq!(names(&seo.apply(&snap), |c| &c.name), vec!["Criminal Defense SEO"]);

        let paused_seo = CampaignFilter {
            status: Facet::Only(CampaignStatus::Paused),
            ..seo
        };
        assert!(paused_seo.apply(&snap).is_empty());
    }

    #[test]
    fn lead_filters_are_conjunctive() {
        let snap = CrmStore::seeded().snapshot();
        let filter = LeadFilter {
            search: "email.com".into(),
            priority: Facet::Only(Priority::Medium),
            practice_area: Facet::Only("criminal defense".into()),
            ..LeadFilter::default()
        };
        assert_eq!(names(&filter.apply(&snap), |l| &l.name), vec!["Lisa Thompson"]);

        let contradiction = LeadFilter {
            source: Facet::Only(LeadSource::GoogleAds),
            ..filter
        };
        assert!(contradiction.apply(&snap).is_empty());
    }
}
