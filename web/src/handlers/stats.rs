//! Dashboard statistics endpoint.

use crate::error::AppError;
use crate::state::AppState;
use axum::{Json, extract::State};
use eventdash_core::store::EventStore;
use eventdash_core::types::DashboardStats;

/// Aggregate counters for the dashboard header: total events, total
/// registrations, and events upcoming within the next seven days.
///
/// # Example
///
/// ```bash
/// curl http://localhost:8080/stats
/// # {"totalEvents":3,"totalRegistrations":12,"upcomingThisWeek":1}
/// ```
pub async fn dashboard_stats<S: EventStore + 'static>(
    State(state): State<AppState<S>>,
) -> Result<Json<DashboardStats>, AppError> {
    let stats = state.service.dashboard_stats().await?;
    Ok(Json(stats))
}
