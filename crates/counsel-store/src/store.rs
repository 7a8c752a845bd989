//! The entity store and its snapshots.
//!
//! `CrmStore` is the single owner of application state. Repo methods in
//! [`crate::repos`] are implemented as `impl CrmStore` blocks, one file per
//! entity, and all go through the [`Collection`] helpers below:
//! 1. Compute the replacement collection
//! 2. Install it only if something matched
//! 3. Bump the revision
//! 4. Emit a `debug!` event with entity, id and revision

use std::ops::Deref;
use std::sync::Arc;

use counsel_core::entities::{Campaign, Client, ComplianceRule, Lead};

use crate::seed;

/// A record that lives in a store collection.
pub trait Record: Clone {
    fn id(&self) -> u32;
}

impl Record for Client {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Campaign {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for Lead {
    fn id(&self) -> u32 {
        self.id
    }
}

impl Record for ComplianceRule {
    fn id(&self) -> u32 {
        self.id
    }
}

/// One ordered collection plus its id sequence.
#[derive(Debug, Clone)]
pub(crate) struct Collection<T> {
    records: Arc<Vec<Arc<T>>>,
    next_id: u32,
}

impl<T: Record> Collection<T> {
    /// Build a collection; the sequence starts after the largest existing id.
    pub(crate) fn from_records(records: Vec<T>) -> Self {
        let next_id = records.iter().map(Record::id).max().unwrap_or(0) + 1;
        Self {
            records: Arc::new(records.into_iter().map(Arc::new).collect()),
            next_id,
        }
    }

    pub(crate) fn shared(&self) -> Arc<Vec<Arc<T>>> {
        Arc::clone(&self.records)
    }

    /// Reserve the next id.
    pub(crate) const fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub(crate) fn find(&self, id: u32) -> Option<Arc<T>> {
        self.records.iter().find(|record| record.id() == id).cloned()
    }

    /// Install a new collection with `record` appended.
    pub(crate) fn append(&mut self, record: T) -> Arc<T> {
        let record = Arc::new(record);
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(Arc::clone(&record));
        self.records = Arc::new(next);
        record
    }

    /// Replace every record whose id matches with `merge(record)`.
    ///
    /// Returns the last merged record, or `None` when nothing matched; in that
    /// case the installed collection is left as it was.
    pub(crate) fn merge_where(&mut self, id: u32, merge: impl Fn(&T) -> T) -> Option<Arc<T>> {
        let mut merged = None;
        let next: Vec<Arc<T>> = self
            .records
            .iter()
            .map(|record| {
                if record.id() == id {
                    let replacement = Arc::new(merge(record));
                    merged = Some(Arc::clone(&replacement));
                    replacement
                } else {
                    Arc::clone(record)
                }
            })
            .collect();

        if merged.is_some() {
            self.records = Arc::new(next);
        }
        merged
    }
}

/// Application state: four ordered collections and a revision counter.
#[derive(Debug, Clone)]
pub struct CrmStore {
    pub(crate) clients: Collection<Client>,
    pub(crate) campaigns: Collection<Campaign>,
    pub(crate) leads: Collection<Lead>,
    pub(crate) rules: Collection<ComplianceRule>,
    revision: u64,
}

impl CrmStore {
    /// A store with no records.
    #[must_use]
    pub fn empty() -> Self {
        Self::from_parts(Vec::new(), Vec::new(), Vec::new(), Vec::new())
    }

    /// A store loaded with the built-in sample records.
    #[must_use]
    pub fn seeded() -> Self {
        Self::from_parts(
            seed::clients(),
            seed::campaigns(),
            seed::leads(),
            seed::compliance_rules(),
        )
    }

    /// A store starting from the given collections, in order.
    #[must_use]
    pub fn from_parts(
        clients: Vec<Client>,
        campaigns: Vec<Campaign>,
        leads: Vec<Lead>,
        rules: Vec<ComplianceRule>,
    ) -> Self {
        Self {
            clients: Collection::from_records(clients),
            campaigns: Collection::from_records(campaigns),
            leads: Collection::from_records(leads),
            rules: Collection::from_records(rules),
            revision: 0,
        }
    }

    /// Number of effective mutations applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    pub(crate) const fn bump_revision(&mut self) -> u64 {
        self.revision += 1;
        self.revision
    }

    /// An immutable view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            clients: self.clients.shared(),
            campaigns: self.campaigns.shared(),
            leads: self.leads.shared(),
            rules: self.rules.shared(),
            revision: self.revision,
        }
    }
}

impl Default for CrmStore {
    fn default() -> Self {
        Self::seeded()
    }
}

/// Immutable, cheaply clonable view of the store at one revision.
#[derive(Debug, Clone)]
pub struct Snapshot {
    clients: Arc<Vec<Arc<Client>>>,
    campaigns: Arc<Vec<Arc<Campaign>>>,
    leads: Arc<Vec<Arc<Lead>>>,
    rules: Arc<Vec<Arc<ComplianceRule>>>,
    revision: u64,
}

impl Snapshot {
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn clients(&self) -> &[Arc<Client>] {
        &self.clients
    }

    #[must_use]
    pub fn campaigns(&self) -> &[Arc<Campaign>] {
        &self.campaigns
    }

    #[must_use]
    pub fn leads(&self) -> &[Arc<Lead>] {
        &self.leads
    }

    #[must_use]
    pub fn rules(&self) -> &[Arc<ComplianceRule>] {
        &self.rules
    }

    /// Resolve a soft client reference by linear scan.
    #[must_use]
    pub fn find_client(&self, id: u32) -> Option<&Client> {
        self.clients.iter().map(Deref::deref).find(|c| c.id == id)
    }

    /// Resolve a soft campaign reference by linear scan.
    #[must_use]
    pub fn find_campaign(&self, id: u32) -> Option<&Campaign> {
        self.campaigns.iter().map(Deref::deref).find(|c| c.id == id)
    }

    #[must_use]
    pub fn find_lead(&self, id: u32) -> Option<&Lead> {
        self.leads.iter().map(Deref::deref).find(|l| l.id == id)
    }

    #[must_use]
    pub fn find_rule(&self, id: u32) -> Option<&ComplianceRule> {
        self.rules.iter().map(Deref::deref).find(|r| r.id == id)
    }

    /// Name of the client with `id`, `None` when the reference dangles.
    #[must_use]
    pub fn client_name(&self, id: u32) -> Option<String> {
        self.find_client(id).map(|c| c.name.clone())
    }

    /// Name of the campaign with `id`, `None` when the reference dangles.
    #[must_use]
    pub fn campaign_name(&self, id: u32) -> Option<String> {
        self.find_campaign(id).map(|c| c.name.clone())
    }
}
