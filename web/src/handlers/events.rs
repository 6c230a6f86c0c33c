//! Event management endpoints.
//!
//! - `GET /events` - list events with attendee counts
//! - `POST /events` - create an event
//! - `GET /events/:event_id` - event with embedded attendees
//! - `DELETE /events/:event_id` - delete an event (cascades)
//! - `GET /events/:event_id/attendees/export` - attendee list as CSV

use crate::error::AppError;
use crate::extractors::CorrelationId;
use crate::handlers::MessageResponse;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use eventdash_core::store::EventStore;
use eventdash_core::types::{Event, EventDetail, EventDraft, EventId, EventWithCount};

/// List all events, newest first, each with its attendee count.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/events
/// ```
pub async fn list_events<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<EventWithCount>>, AppError> {
    let events = state.service.list_events().await?;
    Ok(Json(events))
}

/// Create a new event.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/events \
///   -H "Content-Type: application/json" \
///   -d '{
///     "title": "Launch",
///     "description": "Product launch",
///     "date": "2026-09-01T18:00:00Z",
///     "capacity": 50
///   }'
/// ```
pub async fn create_event<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
    correlation_id: CorrelationId,
    Json(draft): Json<EventDraft>,
) -> Result<Json<Event>, AppError> {
    tracing::debug!(correlation_id = %correlation_id.0, "create event request");
    let event = state.service.create_event(&draft).await?;
    Ok(Json(event))
}

/// Fetch one event with its attendee list embedded.
pub async fn get_event<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
    Path(event_id): Path<EventId>,
) -> Result<Json<EventDetail>, AppError> {
    let detail = state.service.get_event(event_id).await?;
    Ok(Json(detail))
}

/// Delete an event. All of its attendees go with it, atomically,
/// via the storage layer's cascade.
pub async fn delete_event<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
    correlation_id: CorrelationId,
    Path(event_id): Path<EventId>,
) -> Result<Json<MessageResponse>, AppError> {
    tracing::debug!(correlation_id = %correlation_id.0, event_id = %event_id, "delete event request");
    state.service.delete_event(event_id).await?;
    Ok(Json(MessageResponse {
        message: "Event deleted",
    }))
}

/// Download an event's attendee list as a CSV attachment.
pub async fn export_attendees<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
    Path(event_id): Path<EventId>,
) -> Result<impl IntoResponse, AppError> {
    let csv = state.service.export_attendees_csv(event_id).await?;

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", csv.filename),
        ),
    ];
    Ok((headers, csv.content))
}
