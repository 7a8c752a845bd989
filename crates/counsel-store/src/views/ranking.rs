//! Sorting and top-N selections for the dashboard.

use counsel_core::entities::{Client, Lead};
use counsel_core::enums::LeadStatus;

/// The `n` clients with the most leads, ties kept in collection order.
#[must_use]
pub fn top_clients<'a>(clients: impl IntoIterator<Item = &'a Client>, n: usize) -> Vec<Client> {
    let mut ranked: Vec<&Client> = clients.into_iter().collect();
    ranked.sort_by(|a, b| b.leads.cmp(&a.leads));
    ranked.into_iter().take(n).cloned().collect()
}

/// Whether a lead still needs a call back.
#[must_use]
pub fn needs_follow_up(lead: &Lead) -> bool {
    matches!(lead.status, LeadStatus::New | LeadStatus::Qualified)
}

/// The first `n` leads that are `New` or `Qualified`.
#[must_use]
pub fn follow_up_leads<'a>(leads: impl IntoIterator<Item = &'a Lead>, n: usize) -> Vec<Lead> {
    leads
        .into_iter()
        .filter(|lead| needs_follow_up(lead))
        .take(n)
        .cloned()
        .collect()
}

/// The first `n` leads in collection order.
#[must_use]
pub fn recent_leads<'a>(leads: impl IntoIterator<Item = &'a Lead>, n: usize) -> Vec<Lead> {
    leads.into_iter().take(n).cloned().collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::seed;

    fn client(id: u32, leads: u32) -> Client {
        Client {
            id,
            leads,
            ..seed::clients().remove(0)
        }
    }

    #[test]
    fn top_clients_sorted_by_leads_descending() {
        let clients = vec![client(1, 5), client(2, 40), client(3, 12), client(4, 9)];
        let ids: Vec<u32> = top_clients(&clients, 3).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 3, 4]);
    }

    #[test]
    fn top_clients_sort_is_stable() {
        let clients = vec![client(1, 7), client(2, 9), client(3, 7), client(4, 7)];
        let ids: Vec<u32> = top_clients(&clients, 4).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![2, 1, 3, 4]);
    }

    #[test]
    fn follow_ups_skip_closed_leads() {
        let mut leads = seed::leads();
        leads[0].status = LeadStatus::Lost;
        let ids: Vec<u32> = follow_up_leads(&leads, 4).iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn recent_leads_truncate() {
        assert_eq!(recent_leads(&seed::leads(), 1).len(), 1);
        assert_eq!(recent_leads(&seed::leads(), 5).len(), 2);
    }
}
