//! Router composition.
//!
//! Maps each domain operation onto one route/verb pair. The router
//! is generic over the storage seam so integration tests can run the
//! full HTTP surface against the in-memory store.

use crate::handlers::{attendees, events, health, stats};
use crate::middleware::correlation_id_layer;
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use eventdash_core::store::EventStore;
use tower_http::trace::TraceLayer;

/// Build the complete Axum router.
///
/// # Routes
///
/// - `GET /health`, `GET /ready` - probes
/// - `GET|POST /events`, `GET|DELETE /events/:event_id` - events
/// - `GET /events/:event_id/attendees/export` - CSV download
/// - `POST /attendees`, `DELETE /attendees/:attendee_id` - registration
/// - `GET /attendees/all` - directory
/// - `GET /stats` - dashboard counters
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: EventStore + 'static,
{
    Router::new()
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check::<S>))
        .route(
            "/events",
            get(events::list_events::<S>).post(events::create_event::<S>),
        )
        .route(
            "/events/:event_id",
            get(events::get_event::<S>).delete(events::delete_event::<S>),
        )
        .route(
            "/events/:event_id/attendees/export",
            get(events::export_attendees::<S>),
        )
        .route("/attendees", post(attendees::register_attendee::<S>))
        .route("/attendees/all", get(attendees::list_all_attendees::<S>))
        .route(
            "/attendees/:attendee_id",
            delete(attendees::delete_attendee::<S>),
        )
        .route("/stats", get(stats::dashboard_stats::<S>))
        .layer(TraceLayer::new_for_http())
        .layer(correlation_id_layer())
        .with_state(state)
}
