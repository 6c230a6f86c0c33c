//! Attendee registration endpoints.
//!
//! - `POST /attendees` - register an attendee for an event
//! - `DELETE /attendees/:attendee_id` - remove an attendee
//! - `GET /attendees/all` - directory of all attendees

use crate::error::AppError;
use crate::extractors::CorrelationId;
use crate::state::AppState;
use axum::{
    Json,
    extract::{Path, State},
};
use eventdash_core::store::EventStore;
use eventdash_core::types::{Attendee, AttendeeDraft, AttendeeId, AttendeeWithEvent};
use serde::Serialize;

/// Response after removing an attendee.
#[derive(Debug, Serialize)]
pub struct DeleteAttendeeResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
    /// The removed record.
    pub deleted: Attendee,
}

/// Register an attendee for an event.
///
/// One registration per email per event; a second attempt returns
/// 400 with a duplicate-registration message.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:8080/attendees \
///   -H "Content-Type: application/json" \
///   -d '{
///     "name": "Ada Lovelace",
///     "email": "ada@example.com",
///     "eventId": "6b8f..."
///   }'
/// ```
pub async fn register_attendee<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
    correlation_id: CorrelationId,
    Json(draft): Json<AttendeeDraft>,
) -> Result<Json<Attendee>, AppError> {
    tracing::debug!(correlation_id = %correlation_id.0, "register attendee request");
    let attendee = state.service.register_attendee(&draft).await?;
    Ok(Json(attendee))
}

/// Remove one attendee, returning the deleted record.
pub async fn delete_attendee<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
    correlation_id: CorrelationId,
    Path(attendee_id): Path<AttendeeId>,
) -> Result<Json<DeleteAttendeeResponse>, AppError> {
    tracing::debug!(
        correlation_id = %correlation_id.0,
        attendee_id = %attendee_id,
        "delete attendee request"
    );
    let deleted = state.service.delete_attendee(attendee_id).await?;
    Ok(Json(DeleteAttendeeResponse {
        message: "Attendee removed",
        deleted,
    }))
}

/// Directory of all attendees across events, newest registration
/// first, each with its owning event summary. Also backs the
/// polling-based recent-activity feed.
pub async fn list_all_attendees<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<AttendeeWithEvent>>, AppError> {
    let attendees = state.service.list_attendees().await?;
    Ok(Json(attendees))
}
