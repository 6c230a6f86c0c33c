//! Storage seam for events and attendees.
//!
//! The trait abstracts over the persistence layer so the service and
//! the HTTP boundary can run against PostgreSQL in production and an
//! in-memory store in tests. Implementations own the referential
//! integrity rules: the composite (email, event) uniqueness
//! constraint and the cascade from an event to its attendees.

use crate::error::Result;
use crate::types::{
    Attendee, AttendeeId, AttendeeWithEvent, Event, EventDetail, EventId, EventWithCount,
};
use std::future::Future;

/// Event and attendee storage.
///
/// Methods return `Send` futures so generic HTTP handlers stay
/// spawnable on a multi-threaded runtime.
pub trait EventStore: Send + Sync {
    /// Persist a new event.
    ///
    /// # Errors
    ///
    /// Returns error if the database write fails.
    fn insert_event(&self, event: Event) -> impl Future<Output = Result<Event>> + Send;

    /// List all events with their attendee counts, newest first
    /// (creation timestamp descending).
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn list_events(&self) -> impl Future<Output = Result<Vec<EventWithCount>>> + Send;

    /// Fetch one event with its attendees embedded.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Database query fails
    /// - Event not found → `DashboardError::NotFound("event")`
    fn get_event(&self, id: EventId) -> impl Future<Output = Result<EventDetail>> + Send;

    /// Delete an event and, atomically, every attendee registered to
    /// it. The cascade is the implementation's responsibility (a
    /// foreign key with `ON DELETE CASCADE` in PostgreSQL); no
    /// partial deletion may ever be observable.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Database write fails
    /// - Event not found → `DashboardError::NotFound("event")`
    fn delete_event(&self, id: EventId) -> impl Future<Output = Result<()>> + Send;

    /// Look up an attendee by the composite (email, event) key.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn find_attendee(
        &self,
        email: &str,
        event_id: EventId,
    ) -> impl Future<Output = Result<Option<Attendee>>> + Send;

    /// Persist a new attendee.
    ///
    /// The store's uniqueness constraint is the source of truth for
    /// duplicate registration; callers may pre-check, but only as an
    /// optimization.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Database write fails
    /// - (email, event) already registered →
    ///   `DashboardError::DuplicateRegistration`
    /// - Referenced event does not exist →
    ///   `DashboardError::NotFound("event")`
    fn insert_attendee(&self, attendee: Attendee) -> impl Future<Output = Result<Attendee>> + Send;

    /// Delete one attendee, returning the removed record.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Database write fails
    /// - Attendee not found → `DashboardError::NotFound("attendee")`
    fn delete_attendee(
        &self,
        id: AttendeeId,
    ) -> impl Future<Output = Result<Attendee>> + Send;

    /// List all attendees with their owning event summaries, newest
    /// registration first.
    ///
    /// # Errors
    ///
    /// Returns error if the database query fails.
    fn list_attendees(&self) -> impl Future<Output = Result<Vec<AttendeeWithEvent>>> + Send;

    /// Cheap connectivity probe for readiness checks.
    ///
    /// # Errors
    ///
    /// Returns error if the store is unreachable.
    fn ping(&self) -> impl Future<Output = Result<()>> + Send;
}
