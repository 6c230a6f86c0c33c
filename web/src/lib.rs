//! Axum HTTP boundary for the event dashboard.
//!
//! A straight translation layer: decode request bodies and path
//! parameters, invoke [`eventdash_core::EventService`], translate
//! domain failures to status codes, encode results as JSON. No
//! business logic lives here.
//!
//! # Example
//!
//! ```
//! use eventdash_core::{memory::InMemoryStore, service::EventService};
//! use eventdash_web::{router::build_router, state::AppState};
//!
//! let state = AppState::new(EventService::new(InMemoryStore::new()));
//! let app = build_router(state);
//! ```

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::build_router;
pub use state::AppState;
