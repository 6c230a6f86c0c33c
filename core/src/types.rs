//! Domain types for events and attendees.
//!
//! Wire representations use camelCase field names (`createdAt`,
//! `eventId`, `registeredAt`) to match the dashboard client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique event identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub Uuid);

impl EventId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique attendee identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttendeeId(pub Uuid);

impl AttendeeId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for AttendeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An organizer-created gathering with a capacity and schedule date.
///
/// Capacity is validated at creation (>= 1) but is not enforced as a
/// registration ceiling; it feeds a display-only fill ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier.
    pub id: EventId,
    /// Event title (not unique).
    pub title: String,
    /// Event description.
    pub description: String,
    /// Scheduled date.
    pub date: DateTime<Utc>,
    /// Maximum intended attendance, >= 1.
    pub capacity: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A person registered for exactly one event.
///
/// The (email, event) pair is unique: the same email may register
/// for different events but not twice for the same one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    /// Unique identifier.
    pub id: AttendeeId,
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// Owning event.
    pub event_id: EventId,
    /// Registration timestamp.
    pub registered_at: DateTime<Utc>,
}

/// An event annotated with its current attendee count, as returned
/// by the list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventWithCount {
    /// The event itself.
    #[serde(flatten)]
    pub event: Event,
    /// Number of attendees currently registered.
    pub attendee_count: i64,
}

/// An event with its full attendee list embedded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    /// The event itself.
    #[serde(flatten)]
    pub event: Event,
    /// Registered attendees, newest first.
    pub attendees: Vec<Attendee>,
}

/// Minimal event reference embedded in attendee directory rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    /// Event identifier.
    pub id: EventId,
    /// Event title.
    pub title: String,
}

/// A directory row: an attendee with its owning event summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeWithEvent {
    /// The attendee itself.
    #[serde(flatten)]
    pub attendee: Attendee,
    /// Owning event summary.
    pub event: EventSummary,
}

/// Aggregate dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Total number of events.
    pub total_events: i64,
    /// Total registrations across all events.
    pub total_registrations: i64,
    /// Events scheduled within the next seven days.
    pub upcoming_this_week: i64,
}

/// Capacity as submitted by the client: a number or a numeric string.
///
/// The dashboard form posts whatever the input element holds, so both
/// `{"capacity": 50}` and `{"capacity": "50"}` must coerce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CapacityValue {
    /// Already numeric.
    Number(i64),
    /// String to be coerced.
    Text(String),
}

/// Raw event-creation request body, validated by
/// [`crate::validate::event_draft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Scheduled date as an ISO date string.
    pub date: String,
    /// Capacity, number or string-coercible.
    pub capacity: CapacityValue,
}

/// Validated event-creation input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    /// Event title.
    pub title: String,
    /// Event description.
    pub description: String,
    /// Parsed schedule date.
    pub date: DateTime<Utc>,
    /// Coerced capacity, >= 1.
    pub capacity: i32,
}

/// Raw attendee-registration request body, validated by
/// [`crate::validate::attendee_draft`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendeeDraft {
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// Owning event identifier.
    pub event_id: String,
}

/// Validated attendee-registration input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendee {
    /// Attendee name.
    pub name: String,
    /// Attendee email.
    pub email: String,
    /// Owning event identifier.
    pub event_id: EventId,
}
