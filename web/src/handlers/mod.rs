//! HTTP handlers, one module per resource.

pub mod attendees;
pub mod events;
pub mod health;
pub mod stats;

use serde::Serialize;

/// Generic confirmation body for delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    /// Human-readable confirmation.
    pub message: &'static str,
}
