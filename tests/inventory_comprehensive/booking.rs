//! Booking flows through the public facade

use boxoffice::{Error, EventId, Inventory};
use chrono::Utc;

#[test]
fn test_create_then_book_then_drain() {
    let inventory = Inventory::new();
    let event = inventory.create_event("Concert", Utc::now(), 5);

    let tickets = inventory.book_tickets(&event.id, 3).unwrap();
    assert_eq!(tickets.len(), 3);

    let err = inventory.book_tickets(&event.id, 3).unwrap_err();
    assert!(matches!(err, Error::InsufficientTickets { available: 2, .. }));

    let tickets = inventory.book_tickets(&event.id, 2).unwrap();
    assert_eq!(tickets.len(), 2);

    let snapshot = inventory.list_events().pop().unwrap();
    assert_eq!(snapshot.available_tickets, 0);
    assert_eq!(snapshot.total_tickets, 5);
}

#[test]
fn test_booking_never_partially_succeeds() {
    let inventory = Inventory::new();
    let event = inventory.create_event("Concert", Utc::now(), 1);

    // Over-ask: no tickets issued, pool untouched
    assert!(inventory.book_tickets(&event.id, 2).is_err());
    assert_eq!(inventory.list_events()[0].available_tickets, 1);

    // Unknown event: same, and the failure is typed
    let err = inventory.book_tickets(&EventId::new("777"), 1).unwrap_err();
    assert_eq!(err, Error::EventNotFound(EventId::new("777")));
}

#[test]
fn test_permissive_counts_are_honored() {
    let inventory = Inventory::new();
    let event = inventory.create_event("Concert", Utc::now(), 5);

    assert!(inventory.book_tickets(&event.id, 0).unwrap().is_empty());
    assert_eq!(inventory.list_events()[0].available_tickets, 5);

    assert!(inventory.book_tickets(&event.id, -2).unwrap().is_empty());
    assert_eq!(inventory.list_events()[0].available_tickets, 7);
}

#[test]
fn test_ticket_ids_continue_the_event_sequence() {
    let inventory = Inventory::new();
    let event = inventory.create_event("Concert", Utc::now(), 5);
    assert_eq!(event.id.as_str(), "1");

    let tickets = inventory.book_tickets(&event.id, 2).unwrap();
    let ids: Vec<&str> = tickets.iter().map(|t| t.as_str()).collect();
    assert_eq!(ids, vec!["2", "3"]);
}
