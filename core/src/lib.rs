//! Domain model and service for the event dashboard.
//!
//! Two entities, `Event` and `Attendee`, accessed through
//! [`EventService`], which validates input and delegates persistence
//! to an [`EventStore`] implementation. Attendees are unique per
//! (email, event) pair; deleting an event cascades to its attendees.
//!
//! # Architecture
//!
//! - [`types`] — domain types and the raw request drafts.
//! - [`validate`] — field-level input validation.
//! - [`store`] — the storage seam (implemented by
//!   `eventdash-postgres` in production, [`memory::InMemoryStore`]
//!   in tests).
//! - [`service`] — the operations exposed to the HTTP boundary.
//!
//! # Example
//!
//! ```
//! use eventdash_core::memory::InMemoryStore;
//! use eventdash_core::service::EventService;
//! use eventdash_core::types::{CapacityValue, EventDraft};
//!
//! # async fn example() -> eventdash_core::error::Result<()> {
//! let service = EventService::new(InMemoryStore::new());
//! let event = service
//!     .create_event(&EventDraft {
//!         title: "Launch".to_string(),
//!         description: "Product launch".to_string(),
//!         date: "2026-09-01T18:00:00Z".to_string(),
//!         capacity: CapacityValue::Number(50),
//!     })
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
#[cfg(feature = "test-utils")]
pub mod memory;
pub mod service;
pub mod store;
pub mod types;
pub mod validate;

pub use error::{DashboardError, FieldError, Result};
pub use service::EventService;
pub use store::EventStore;
