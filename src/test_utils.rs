//! Test utilities for cinema-ticket
//!
//! Common fixtures shared by the unit tests across the crate.

#![cfg(test)]

use crate::core::{MovieId, UserId};
use crate::store::TicketingStore;

/// Store with two movies ("Dune", "Arrival") and two users ("Alice", "Bob")
pub fn store_with_catalog() -> TicketingStore {
    let mut store = TicketingStore::new();
    store.add_movie("Dune");
    store.add_movie("Arrival");
    store.add_user("Alice");
    store.add_user("Bob");
    store
}

/// Store from [`store_with_catalog`] plus `count` tickets for user 1 at movie 1
pub fn store_with_tickets(count: usize) -> TicketingStore {
    let mut store = store_with_catalog();
    for _ in 0..count {
        store
            .buy_ticket(UserId::new(1), MovieId::new(1))
            .expect("Failed to buy ticket");
    }
    store
}

/// Raw ids of the live tickets, in store order
pub fn ticket_ids(store: &TicketingStore) -> Vec<u64> {
    store.list_tickets().iter().map(|t| t.id.value()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_with_catalog() {
        let store = store_with_catalog();
        assert_eq!(store.list_movies().len(), 2);
        assert_eq!(store.list_users().len(), 2);
        assert!(store.list_tickets().is_empty());
    }

    #[test]
    fn test_store_with_tickets() {
        let store = store_with_tickets(3);
        assert_eq!(ticket_ids(&store), vec![1, 2, 3]);
    }
}
