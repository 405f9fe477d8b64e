//! Concurrency guarantees through the public facade
//!
//! The oversell-prevention property, and the admission gate wrapped around
//! operations the way a transport layer wraps them.

use boxoffice::{AdmissionGate, Error, Inventory};
use chrono::Utc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_exactly_the_pool_size_wins() {
    let inventory = Arc::new(Inventory::new());
    let event = inventory.create_event("Finals", Utc::now(), 3);

    let contenders = 10;
    let barrier = Arc::new(Barrier::new(contenders));
    let handles: Vec<_> = (0..contenders)
        .map(|_| {
            let inventory = Arc::clone(&inventory);
            let event_id = event.id.clone();
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                inventory.book_tickets(&event_id, 1)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let wins = results.iter().filter(|r| r.is_ok()).count();
    let losses = results
        .iter()
        .filter(|r| matches!(r, Err(Error::InsufficientTickets { .. })))
        .count();

    assert_eq!(wins, 3);
    assert_eq!(losses, contenders - 3);
    assert_eq!(inventory.list_events()[0].available_tickets, 0);
}

#[test]
fn test_gate_bounds_concurrent_operations() {
    // Wrap every operation in a permit, the way the transport does, and
    // watch the in-flight peak
    let inventory = Arc::new(Inventory::new());
    let gate = Arc::new(AdmissionGate::new(2));
    let event = inventory.create_event("Gated show", Utc::now(), 1_000);

    let concurrent = Arc::new(AtomicUsize::new(0));
    let peak = Arc::new(AtomicUsize::new(0));
    let barrier = Arc::new(Barrier::new(6));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let inventory = Arc::clone(&inventory);
            let gate = Arc::clone(&gate);
            let event_id = event.id.clone();
            let concurrent = Arc::clone(&concurrent);
            let peak = Arc::clone(&peak);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..20 {
                    let _permit = gate.acquire();
                    let now = concurrent.fetch_add(1, Ordering::SeqCst) + 1;
                    peak.fetch_max(now, Ordering::SeqCst);
                    inventory.book_tickets(&event_id, 1).unwrap();
                    concurrent.fetch_sub(1, Ordering::SeqCst);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(peak.load(Ordering::SeqCst) <= 2);
    assert_eq!(inventory.list_events()[0].available_tickets, 1_000 - 120);
}

#[test]
fn test_gate_frees_slots_when_operations_fail() {
    let inventory = Arc::new(Inventory::new());
    let gate = Arc::new(AdmissionGate::new(1));
    let event = inventory.create_event("Tiny show", Utc::now(), 0);

    // Failures drop the permit like successes do
    for _ in 0..5 {
        let _permit = gate.acquire();
        assert!(inventory.book_tickets(&event.id, 1).is_err());
    }
    assert_eq!(gate.in_flight(), 0);
}

#[test]
fn test_concurrent_identifier_issuance_is_distinct() {
    let inventory = Arc::new(Inventory::new());
    let barrier = Arc::new(Barrier::new(4));

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let inventory = Arc::clone(&inventory);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..25)
                    .map(|i| {
                        inventory
                            .create_event(format!("e-{t}-{i}"), Utc::now(), 1)
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = std::collections::HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(seen.insert(id.as_str().to_string()), "duplicate id {id}");
        }
    }
    assert_eq!(seen.len(), 100);
}
