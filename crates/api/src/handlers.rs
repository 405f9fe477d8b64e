//! HTTP handlers for the three inventory operations
//!
//! Each handler acquires an admission permit and runs the engine call on
//! the blocking pool; the permit is dropped when the call finishes, so the
//! slot frees on every exit path. Malformed payloads are rejected by the
//! extractors before the core is ever invoked.

use crate::error::ApiError;
use crate::state::AppState;
use axum::extract::{Path, Query, State};
use axum::Json;
use boxoffice_core::{Event, EventId, Ticket};
use boxoffice_engine::Inventory;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

/// Request body for event creation; field names are the public wire format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Human-readable event name.
    pub name: String,
    /// When the event takes place (RFC 3339).
    pub date: DateTime<Utc>,
    /// Size of the ticket pool.
    pub total_tickets: i64,
}

/// Query parameters of the booking endpoint.
#[derive(Debug, Deserialize)]
pub struct BookingQuery {
    /// Number of tickets to book; defaults to one.
    pub tickets: Option<i64>,
}

/// `POST /api/v1/events`
pub async fn create_event(
    State(state): State<AppState>,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, ApiError> {
    info!(name = %draft.name, total = draft.total_tickets, "create event request");
    let event = run_admitted(&state, move |inventory| {
        inventory.create_event(draft.name, draft.date, draft.total_tickets)
    })
    .await?;
    Ok(Json(event))
}

/// `GET /api/v1/events`
pub async fn list_events(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    let mut events = run_admitted(&state, |inventory| inventory.list_events()).await?;
    // Presentation order: ascending numeric identifier. Sequence-issued
    // identifiers always parse; anything else sorts first.
    events.sort_by_key(|event| event.id.numeric().unwrap_or(0));
    Ok(Json(events))
}

/// `POST /api/v1/events/:id/book?tickets=N`
pub async fn book_tickets(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<BookingQuery>,
) -> Result<Json<Vec<Ticket>>, ApiError> {
    let num_tickets = query.tickets.unwrap_or(1);
    let event_id = EventId::new(id);
    info!(event = %event_id, tickets = num_tickets, "booking request");

    let booked_for = event_id.clone();
    let ticket_ids = run_admitted(&state, move |inventory| {
        inventory.book_tickets(&event_id, num_tickets)
    })
    .await??;

    let tickets = ticket_ids
        .into_iter()
        .map(|ticket_id| Ticket::new(ticket_id, booked_for.clone()))
        .collect();
    Ok(Json(tickets))
}

/// Run an inventory operation on the blocking pool behind the admission
/// gate.
///
/// The gate may park the worker until a slot frees; that wait happens off
/// the async runtime so in-flight HTTP connections keep making progress.
async fn run_admitted<T, F>(state: &AppState, op: F) -> Result<T, ApiError>
where
    F: FnOnce(&Inventory) -> T + Send + 'static,
    T: Send + 'static,
{
    let inventory = Arc::clone(&state.inventory);
    let gate = Arc::clone(&state.gate);
    tokio::task::spawn_blocking(move || {
        let _permit = gate.acquire();
        op(&inventory)
    })
    .await
    .map_err(|err| ApiError::internal(format!("inventory worker failed: {err}")))
}
