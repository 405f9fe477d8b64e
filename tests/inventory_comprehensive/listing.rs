//! Listing behavior through the public facade

use boxoffice::Inventory;
use chrono::Utc;

#[test]
fn test_round_trip_create_and_list() {
    let inventory = Inventory::new();
    inventory.create_event("Concert", Utc::now(), 100);

    let events = inventory.list_events();
    assert!(events
        .iter()
        .any(|e| e.total_tickets == 100 && e.available_tickets == 100));
}

#[test]
fn test_empty_inventory_lists_nothing() {
    let inventory = Inventory::new();
    assert!(inventory.list_events().is_empty());
}

#[test]
fn test_identifiers_support_numeric_ordering() {
    let inventory = Inventory::new();
    for i in 0..12 {
        inventory.create_event(format!("event-{i}"), Utc::now(), 1);
    }

    // The store imposes no order, but every identifier must be numerically
    // comparable so presentation layers can sort
    let mut ids: Vec<u64> = inventory
        .list_events()
        .iter()
        .map(|e| e.id.numeric().expect("sequence-issued ids parse"))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=12).collect::<Vec<u64>>());
}

#[test]
fn test_listing_reflects_bookings_immediately() {
    let inventory = Inventory::new();
    let event = inventory.create_event("Concert", Utc::now(), 10);

    inventory.book_tickets(&event.id, 4).unwrap();
    assert_eq!(inventory.list_events()[0].available_tickets, 6);
}
