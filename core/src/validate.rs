//! Field-level input validation.
//!
//! Request bodies arrive as loosely-typed drafts; these functions
//! apply the schema rules and produce either a typed value or a
//! [`DashboardError::Validation`] carrying one message per failed
//! field. Validation runs before any persistence work, so a failed
//! draft never reaches the store.

use crate::error::{DashboardError, FieldError, Result};
use crate::types::{AttendeeDraft, CapacityValue, EventDraft, EventId, NewAttendee, NewEvent};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use uuid::Uuid;

/// Validate email address format.
///
/// Basic RFC 5322 shape: exactly one `@`, non-empty local and domain
/// parts, a dotted domain, and a sane length. Intentionally loose;
/// deliverability is the mail server's problem.
///
/// # Examples
///
/// ```
/// use eventdash_core::validate::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(is_valid_email("user+tag@subdomain.example.com"));
/// assert!(!is_valid_email("invalid"));
/// assert!(!is_valid_email("@example.com"));
/// assert!(!is_valid_email("user@example..com"));
/// ```
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    if email.len() < 5 || email.len() > 255 {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }

    let local_ok = local
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-' | '+' | '_'));
    let domain_ok = domain
        .chars()
        .all(|c| c.is_alphanumeric() || matches!(c, '.' | '-'));
    if !local_ok || !domain_ok {
        return false;
    }

    // Domain must be dotted, with no empty labels
    domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
}

/// Parse a client-submitted date string.
///
/// Accepts RFC 3339 (`2026-09-01T18:00:00Z`), the HTML
/// `datetime-local` shape (`2026-09-01T18:00`), and a bare date
/// (`2026-09-01`, taken as midnight UTC).
#[must_use]
pub fn parse_event_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M") {
        return Some(parsed.and_utc());
    }
    if let Ok(parsed) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(parsed.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Coerce a capacity value to an integer.
///
/// Returns `None` when the value is not numeric or does not fit an
/// `i32`; range validation (>= 1) happens at the call site so the
/// message can name the rule.
fn coerce_capacity(value: &CapacityValue) -> Option<i32> {
    let raw = match value {
        CapacityValue::Number(n) => *n,
        CapacityValue::Text(s) => s.trim().parse::<i64>().ok()?,
    };
    i32::try_from(raw).ok()
}

/// Validate an event-creation draft.
///
/// # Errors
///
/// Returns [`DashboardError::Validation`] with one entry per failed
/// field: empty title or description, unparseable date, or a
/// capacity that does not coerce to an integer >= 1.
pub fn event_draft(draft: &EventDraft) -> Result<NewEvent> {
    let mut errors = Vec::new();

    if draft.title.trim().is_empty() {
        errors.push(FieldError::new("title", "Title is required"));
    }
    if draft.description.trim().is_empty() {
        errors.push(FieldError::new("description", "Description is required"));
    }

    let date = parse_event_date(&draft.date);
    if date.is_none() {
        errors.push(FieldError::new("date", "Invalid date"));
    }

    let capacity = coerce_capacity(&draft.capacity).filter(|&value| value >= 1);
    if capacity.is_none() {
        errors.push(FieldError::new("capacity", "Capacity must be at least 1"));
    }

    match (date, capacity) {
        (Some(date), Some(capacity)) if errors.is_empty() => Ok(NewEvent {
            title: draft.title.clone(),
            description: draft.description.clone(),
            date,
            capacity,
        }),
        _ => Err(DashboardError::Validation(errors)),
    }
}

/// Validate an attendee-registration draft.
///
/// # Errors
///
/// Returns [`DashboardError::Validation`] with one entry per failed
/// field: empty name, malformed email, or an event id that is not a
/// UUID.
pub fn attendee_draft(draft: &AttendeeDraft) -> Result<NewAttendee> {
    let mut errors = Vec::new();

    if draft.name.trim().is_empty() {
        errors.push(FieldError::new("name", "Name is required"));
    }
    if !is_valid_email(&draft.email) {
        errors.push(FieldError::new("email", "Invalid email address"));
    }

    let event_id = Uuid::parse_str(draft.event_id.trim());
    if event_id.is_err() {
        errors.push(FieldError::new("eventId", "Event ID is required"));
    }

    match event_id {
        Ok(event_id) if errors.is_empty() => Ok(NewAttendee {
            name: draft.name.clone(),
            email: draft.email.clone(),
            event_id: EventId(event_id),
        }),
        _ => Err(DashboardError::Validation(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str, date: &str, capacity: CapacityValue) -> EventDraft {
        EventDraft {
            title: title.to_string(),
            description: description.to_string(),
            date: date.to_string(),
            capacity,
        }
    }

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("user.name@example.com"));
        assert!(is_valid_email("user+tag@example.com"));
        assert!(is_valid_email("user_name@subdomain.example.com"));
        assert!(is_valid_email("user-name@example.co.uk"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email("invalid"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@example..com"));
        assert!(!is_valid_email("user name@example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("a@b")); // no dot in domain
    }

    #[test]
    fn test_email_length_limits() {
        assert!(is_valid_email("a@b.c"));
        let long_email = format!("{}@example.com", "a".repeat(250));
        assert!(!is_valid_email(&long_email));
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_parse_event_date_formats() {
        assert!(parse_event_date("2026-09-01T18:00:00Z").is_some());
        assert!(parse_event_date("2026-09-01T18:00:00+02:00").is_some());
        assert!(parse_event_date("2026-09-01T18:00").is_some());

        let midnight = parse_event_date("2026-09-01").unwrap();
        assert_eq!(midnight.to_rfc3339(), "2026-09-01T00:00:00+00:00");

        assert!(parse_event_date("not a date").is_none());
        assert!(parse_event_date("").is_none());
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_event_draft_happy_path() {
        let new_event = event_draft(&draft(
            "Launch",
            "Product launch",
            "2026-09-01T18:00:00Z",
            CapacityValue::Number(50),
        ))
        .unwrap();
        assert_eq!(new_event.title, "Launch");
        assert_eq!(new_event.capacity, 50);
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_event_draft_coerces_string_capacity() {
        let new_event = event_draft(&draft(
            "Launch",
            "Product launch",
            "2026-09-01",
            CapacityValue::Text("25".to_string()),
        ))
        .unwrap();
        assert_eq!(new_event.capacity, 25);
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_event_draft_collects_all_field_errors() {
        let err = event_draft(&draft("", "", "nope", CapacityValue::Number(0)));
        let Err(DashboardError::Validation(errors)) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["title", "description", "date", "capacity"]);
    }

    #[test]
    fn test_event_draft_rejects_zero_and_negative_capacity() {
        for capacity in [
            CapacityValue::Number(0),
            CapacityValue::Number(-3),
            CapacityValue::Text("0".to_string()),
            CapacityValue::Text("abc".to_string()),
        ] {
            let result = event_draft(&draft("T", "D", "2026-09-01", capacity));
            assert!(matches!(result, Err(DashboardError::Validation(_))));
        }
    }

    #[test]
    #[allow(clippy::unwrap_used)]
    fn test_attendee_draft_happy_path() {
        let event_id = Uuid::new_v4();
        let new_attendee = attendee_draft(&AttendeeDraft {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            event_id: event_id.to_string(),
        })
        .unwrap();
        assert_eq!(new_attendee.event_id.0, event_id);
    }

    #[test]
    #[allow(clippy::panic)]
    fn test_attendee_draft_rejects_bad_fields() {
        let err = attendee_draft(&AttendeeDraft {
            name: " ".to_string(),
            email: "not-an-email".to_string(),
            event_id: "not-a-uuid".to_string(),
        });
        let Err(DashboardError::Validation(errors)) = err else {
            panic!("expected validation error");
        };
        let fields: Vec<&str> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["name", "email", "eventId"]);
    }
}
