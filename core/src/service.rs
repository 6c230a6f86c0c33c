//! Domain service: validation plus persistence orchestration.
//!
//! All business rules live here or in [`crate::validate`]; the HTTP
//! boundary is a straight translation layer on top of this type.

use crate::error::{DashboardError, Result};
use crate::store::EventStore;
use crate::types::{
    Attendee, AttendeeDraft, AttendeeId, AttendeeWithEvent, DashboardStats, Event, EventDetail,
    EventDraft, EventId, EventWithCount,
};
use chrono::{Duration, Utc};

/// A CSV export of one event's attendee list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendeeCsv {
    /// Suggested download filename, derived from the event title.
    pub filename: String,
    /// CSV content, header row included.
    pub content: String,
}

/// The domain service.
///
/// Generic over the storage seam so production (PostgreSQL) and
/// tests (in-memory) share every code path above the store.
#[derive(Debug, Clone)]
pub struct EventService<S> {
    store: S,
}

impl<S: EventStore> EventService<S> {
    /// Create a service over the given store.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the underlying store (readiness probes).
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Create an event from a raw draft.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for empty title or
    /// description, an unparseable date, or capacity < 1; otherwise
    /// any store failure.
    pub async fn create_event(&self, draft: &EventDraft) -> Result<Event> {
        let new_event = crate::validate::event_draft(draft)?;

        let event = Event {
            id: EventId::generate(),
            title: new_event.title,
            description: new_event.description,
            date: new_event.date,
            capacity: new_event.capacity,
            created_at: Utc::now(),
        };

        let event = self.store.insert_event(event).await?;
        tracing::info!(event_id = %event.id, title = %event.title, "event created");
        Ok(event)
    }

    /// List all events with attendee counts, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the store query fails.
    pub async fn list_events(&self) -> Result<Vec<EventWithCount>> {
        self.store.list_events().await
    }

    /// Fetch one event with its attendees.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] if no event matches.
    pub async fn get_event(&self, id: EventId) -> Result<EventDetail> {
        self.store.get_event(id).await
    }

    /// Delete an event; the store cascades to its attendees
    /// atomically.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] if no event matches.
    pub async fn delete_event(&self, id: EventId) -> Result<()> {
        self.store.delete_event(id).await?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(())
    }

    /// Register an attendee for an event.
    ///
    /// The existence pre-check is an optimization only: two
    /// concurrent registrations can both pass it, and the store's
    /// composite uniqueness constraint decides the winner. Either
    /// path surfaces [`DashboardError::DuplicateRegistration`].
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::Validation`] for bad input,
    /// [`DashboardError::DuplicateRegistration`] when the (email,
    /// event) pair already exists, and
    /// [`DashboardError::NotFound`] when the event id dangles.
    pub async fn register_attendee(&self, draft: &AttendeeDraft) -> Result<Attendee> {
        let new_attendee = crate::validate::attendee_draft(draft)?;

        if self
            .store
            .find_attendee(&new_attendee.email, new_attendee.event_id)
            .await?
            .is_some()
        {
            return Err(DashboardError::DuplicateRegistration);
        }

        let attendee = Attendee {
            id: AttendeeId::generate(),
            name: new_attendee.name,
            email: new_attendee.email,
            event_id: new_attendee.event_id,
            registered_at: Utc::now(),
        };

        let attendee = self.store.insert_attendee(attendee).await?;
        tracing::info!(
            attendee_id = %attendee.id,
            event_id = %attendee.event_id,
            "attendee registered"
        );
        Ok(attendee)
    }

    /// Remove one attendee, returning the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] if no attendee matches.
    pub async fn delete_attendee(&self, id: AttendeeId) -> Result<Attendee> {
        let attendee = self.store.delete_attendee(id).await?;
        tracing::info!(attendee_id = %id, "attendee removed");
        Ok(attendee)
    }

    /// List all attendees with their event summaries, newest
    /// registration first.
    ///
    /// # Errors
    ///
    /// Returns error if the store query fails.
    pub async fn list_attendees(&self) -> Result<Vec<AttendeeWithEvent>> {
        self.store.list_attendees().await
    }

    /// Aggregate counters for the dashboard header cards.
    ///
    /// # Errors
    ///
    /// Returns error if the store query fails.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        let events = self.store.list_events().await?;

        let now = Utc::now();
        let week_ahead = now + Duration::days(7);
        let upcoming_this_week = events
            .iter()
            .filter(|e| e.event.date >= now && e.event.date <= week_ahead)
            .count() as i64;

        Ok(DashboardStats {
            total_events: events.len() as i64,
            total_registrations: events.iter().map(|e| e.attendee_count).sum(),
            upcoming_this_week,
        })
    }

    /// Export one event's attendees as CSV.
    ///
    /// The filename follows the dashboard convention: event title
    /// with whitespace runs collapsed to underscores, suffixed
    /// `_Attendees.csv`.
    ///
    /// # Errors
    ///
    /// Returns [`DashboardError::NotFound`] if no event matches.
    pub async fn export_attendees_csv(&self, id: EventId) -> Result<AttendeeCsv> {
        let detail = self.store.get_event(id).await?;

        let mut content = String::from("Name,Email,Registered At\n");
        for attendee in &detail.attendees {
            content.push_str(&csv_field(&attendee.name));
            content.push(',');
            content.push_str(&csv_field(&attendee.email));
            content.push(',');
            content.push_str(&attendee.registered_at.to_rfc3339());
            content.push('\n');
        }

        let stem: String = detail.event.title.split_whitespace().collect::<Vec<_>>().join("_");
        Ok(AttendeeCsv {
            filename: format!("{stem}_Attendees.csv"),
            content,
        })
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
