//! In-memory store for testing.
//!
//! Mirrors the PostgreSQL schema's integrity rules under a single
//! lock: composite (email, event) uniqueness, a required owning
//! event, and cascade on event deletion. Both cascades and the
//! duplicate check happen while the lock is held, so the store never
//! exposes a partially-applied mutation.

use crate::error::{DashboardError, Result};
use crate::store::EventStore;
use crate::types::{
    Attendee, AttendeeId, AttendeeWithEvent, Event, EventDetail, EventId, EventSummary,
    EventWithCount,
};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct Inner {
    events: HashMap<EventId, Event>,
    attendees: HashMap<AttendeeId, Attendee>,
}

/// In-memory event store.
///
/// Cloning shares the underlying maps, matching the pool-handle
/// semantics of the PostgreSQL store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryStore {
    /// Create a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| DashboardError::Database("store lock poisoned".to_string()))
    }
}

impl EventStore for InMemoryStore {
    fn insert_event(&self, event: Event) -> impl Future<Output = Result<Event>> + Send {
        let result = self.lock().map(|mut inner| {
            inner.events.insert(event.id, event.clone());
            event
        });
        async move { result }
    }

    fn list_events(&self) -> impl Future<Output = Result<Vec<EventWithCount>>> + Send {
        let result = self.lock().map(|inner| {
            let mut rows: Vec<EventWithCount> = inner
                .events
                .values()
                .map(|event| EventWithCount {
                    event: event.clone(),
                    attendee_count: inner
                        .attendees
                        .values()
                        .filter(|a| a.event_id == event.id)
                        .count() as i64,
                })
                .collect();
            rows.sort_by(|a, b| b.event.created_at.cmp(&a.event.created_at));
            rows
        });
        async move { result }
    }

    fn get_event(&self, id: EventId) -> impl Future<Output = Result<EventDetail>> + Send {
        let result = self.lock().and_then(|inner| {
            let event = inner
                .events
                .get(&id)
                .cloned()
                .ok_or(DashboardError::NotFound("event"))?;
            let mut attendees: Vec<Attendee> = inner
                .attendees
                .values()
                .filter(|a| a.event_id == id)
                .cloned()
                .collect();
            attendees.sort_by(|a, b| b.registered_at.cmp(&a.registered_at));
            Ok(EventDetail { event, attendees })
        });
        async move { result }
    }

    fn delete_event(&self, id: EventId) -> impl Future<Output = Result<()>> + Send {
        let result = self.lock().and_then(|mut inner| {
            if inner.events.remove(&id).is_none() {
                return Err(DashboardError::NotFound("event"));
            }
            // Cascade under the same lock
            inner.attendees.retain(|_, a| a.event_id != id);
            Ok(())
        });
        async move { result }
    }

    fn find_attendee(
        &self,
        email: &str,
        event_id: EventId,
    ) -> impl Future<Output = Result<Option<Attendee>>> + Send {
        let result = self.lock().map(|inner| {
            inner
                .attendees
                .values()
                .find(|a| a.event_id == event_id && a.email == email)
                .cloned()
        });
        async move { result }
    }

    fn insert_attendee(&self, attendee: Attendee) -> impl Future<Output = Result<Attendee>> + Send {
        let result = self.lock().and_then(|mut inner| {
            if !inner.events.contains_key(&attendee.event_id) {
                return Err(DashboardError::NotFound("event"));
            }
            let duplicate = inner
                .attendees
                .values()
                .any(|a| a.event_id == attendee.event_id && a.email == attendee.email);
            if duplicate {
                return Err(DashboardError::DuplicateRegistration);
            }
            inner.attendees.insert(attendee.id, attendee.clone());
            Ok(attendee)
        });
        async move { result }
    }

    fn delete_attendee(
        &self,
        id: AttendeeId,
    ) -> impl Future<Output = Result<Attendee>> + Send {
        let result = self.lock().and_then(|mut inner| {
            inner
                .attendees
                .remove(&id)
                .ok_or(DashboardError::NotFound("attendee"))
        });
        async move { result }
    }

    fn list_attendees(&self) -> impl Future<Output = Result<Vec<AttendeeWithEvent>>> + Send {
        let result = self.lock().map(|inner| {
            let mut rows: Vec<AttendeeWithEvent> = inner
                .attendees
                .values()
                .filter_map(|attendee| {
                    let event = inner.events.get(&attendee.event_id)?;
                    Some(AttendeeWithEvent {
                        attendee: attendee.clone(),
                        event: EventSummary {
                            id: event.id,
                            title: event.title.clone(),
                        },
                    })
                })
                .collect();
            rows.sort_by(|a, b| b.attendee.registered_at.cmp(&a.attendee.registered_at));
            rows
        });
        async move { result }
    }

    fn ping(&self) -> impl Future<Output = Result<()>> + Send {
        let result = self.lock().map(|_| ());
        async move { result }
    }
}
