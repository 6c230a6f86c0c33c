//! PostgreSQL store for the event dashboard.
//!
//! Implements [`EventStore`] over a [`PgPool`]. Referential
//! integrity lives in the schema: the attendee foreign key cascades
//! on event deletion, and the composite (email, `event_id`) unique
//! constraint backstops concurrent registrations. Constraint
//! violations are translated into the domain error taxonomy here so
//! no `sqlx` type crosses the crate boundary.
//!
//! Queries use the runtime API rather than the `query!` macros so
//! the workspace builds without a live database.
//!
//! # Example
//!
//! ```no_run
//! use eventdash_postgres::PostgresStore;
//! use sqlx::PgPool;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = PgPool::connect("postgresql://localhost/eventdash").await?;
//! let store = PostgresStore::new(pool);
//! store.migrate().await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use eventdash_core::error::{DashboardError, Result};
use eventdash_core::store::EventStore;
use eventdash_core::types::{
    Attendee, AttendeeId, AttendeeWithEvent, Event, EventDetail, EventId, EventSummary,
    EventWithCount,
};
use sqlx::PgPool;
use std::future::Future;
use uuid::Uuid;

/// PostgreSQL-backed event store.
///
/// Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

#[derive(sqlx::FromRow)]
struct EventRow {
    id: Uuid,
    title: String,
    description: String,
    date: DateTime<Utc>,
    capacity: i32,
    created_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Self {
            id: EventId(row.id),
            title: row.title,
            description: row.description,
            date: row.date,
            capacity: row.capacity,
            created_at: row.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct EventCountRow {
    #[sqlx(flatten)]
    event: EventRow,
    attendee_count: i64,
}

#[derive(sqlx::FromRow)]
struct AttendeeRow {
    id: Uuid,
    name: String,
    email: String,
    event_id: Uuid,
    registered_at: DateTime<Utc>,
}

impl From<AttendeeRow> for Attendee {
    fn from(row: AttendeeRow) -> Self {
        Self {
            id: AttendeeId(row.id),
            name: row.name,
            email: row.email,
            event_id: EventId(row.event_id),
            registered_at: row.registered_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AttendeeEventRow {
    #[sqlx(flatten)]
    attendee: AttendeeRow,
    event_title: String,
}

/// Wrap a `sqlx` failure with context.
fn db_err(context: &str, err: &sqlx::Error) -> DashboardError {
    DashboardError::Database(format!("{context}: {err}"))
}

impl PostgresStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run database migrations.
    ///
    /// # Errors
    ///
    /// Returns error if migrations fail.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|e| DashboardError::Database(format!("Migration failed: {e}")))?;
        tracing::info!("database migrations applied");
        Ok(())
    }
}

impl EventStore for PostgresStore {
    fn insert_event(&self, event: Event) -> impl Future<Output = Result<Event>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(
                r"
                INSERT INTO events (id, title, description, date, capacity, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(event.id.0)
            .bind(&event.title)
            .bind(&event.description)
            .bind(event.date)
            .bind(event.capacity)
            .bind(event.created_at)
            .execute(&pool)
            .await
            .map_err(|e| db_err("Failed to insert event", &e))?;

            Ok(event)
        }
    }

    fn list_events(&self) -> impl Future<Output = Result<Vec<EventWithCount>>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<EventCountRow> = sqlx::query_as(
                r"
                SELECT e.id, e.title, e.description, e.date, e.capacity, e.created_at,
                       COUNT(a.id) AS attendee_count
                FROM events e
                LEFT JOIN attendees a ON a.event_id = e.id
                GROUP BY e.id
                ORDER BY e.created_at DESC
                ",
            )
            .fetch_all(&pool)
            .await
            .map_err(|e| db_err("Failed to list events", &e))?;

            Ok(rows
                .into_iter()
                .map(|row| EventWithCount {
                    event: row.event.into(),
                    attendee_count: row.attendee_count,
                })
                .collect())
        }
    }

    fn get_event(&self, id: EventId) -> impl Future<Output = Result<EventDetail>> + Send {
        let pool = self.pool.clone();
        async move {
            let event: EventRow = sqlx::query_as(
                r"
                SELECT id, title, description, date, capacity, created_at
                FROM events
                WHERE id = $1
                ",
            )
            .bind(id.0)
            .fetch_optional(&pool)
            .await
            .map_err(|e| db_err("Failed to get event", &e))?
            .ok_or(DashboardError::NotFound("event"))?;

            let attendees: Vec<AttendeeRow> = sqlx::query_as(
                r"
                SELECT id, name, email, event_id, registered_at
                FROM attendees
                WHERE event_id = $1
                ORDER BY registered_at DESC
                ",
            )
            .bind(id.0)
            .fetch_all(&pool)
            .await
            .map_err(|e| db_err("Failed to load attendees", &e))?;

            Ok(EventDetail {
                event: event.into(),
                attendees: attendees.into_iter().map(Into::into).collect(),
            })
        }
    }

    fn delete_event(&self, id: EventId) -> impl Future<Output = Result<()>> + Send {
        let pool = self.pool.clone();
        async move {
            // Attendee rows go with the event via ON DELETE CASCADE
            let result = sqlx::query("DELETE FROM events WHERE id = $1")
                .bind(id.0)
                .execute(&pool)
                .await
                .map_err(|e| db_err("Failed to delete event", &e))?;

            if result.rows_affected() == 0 {
                return Err(DashboardError::NotFound("event"));
            }
            Ok(())
        }
    }

    fn find_attendee(
        &self,
        email: &str,
        event_id: EventId,
    ) -> impl Future<Output = Result<Option<Attendee>>> + Send {
        let pool = self.pool.clone();
        let email = email.to_string();
        async move {
            let row: Option<AttendeeRow> = sqlx::query_as(
                r"
                SELECT id, name, email, event_id, registered_at
                FROM attendees
                WHERE email = $1 AND event_id = $2
                ",
            )
            .bind(&email)
            .bind(event_id.0)
            .fetch_optional(&pool)
            .await
            .map_err(|e| db_err("Failed to look up attendee", &e))?;

            Ok(row.map(Into::into))
        }
    }

    fn insert_attendee(&self, attendee: Attendee) -> impl Future<Output = Result<Attendee>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(
                r"
                INSERT INTO attendees (id, name, email, event_id, registered_at)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(attendee.id.0)
            .bind(&attendee.name)
            .bind(&attendee.email)
            .bind(attendee.event_id.0)
            .bind(attendee.registered_at)
            .execute(&pool)
            .await
            .map_err(|e| {
                // The constraints decide: a unique violation is the
                // concurrent-duplicate case, a FK violation is a
                // dangling event id.
                if let sqlx::Error::Database(db) = &e {
                    if db.is_unique_violation() {
                        return DashboardError::DuplicateRegistration;
                    }
                    if db.is_foreign_key_violation() {
                        return DashboardError::NotFound("event");
                    }
                }
                db_err("Failed to insert attendee", &e)
            })?;

            Ok(attendee)
        }
    }

    fn delete_attendee(
        &self,
        id: AttendeeId,
    ) -> impl Future<Output = Result<Attendee>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<AttendeeRow> = sqlx::query_as(
                r"
                DELETE FROM attendees
                WHERE id = $1
                RETURNING id, name, email, event_id, registered_at
                ",
            )
            .bind(id.0)
            .fetch_optional(&pool)
            .await
            .map_err(|e| db_err("Failed to delete attendee", &e))?;

            row.map(Into::into)
                .ok_or(DashboardError::NotFound("attendee"))
        }
    }

    fn list_attendees(&self) -> impl Future<Output = Result<Vec<AttendeeWithEvent>>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<AttendeeEventRow> = sqlx::query_as(
                r"
                SELECT a.id, a.name, a.email, a.event_id, a.registered_at,
                       e.title AS event_title
                FROM attendees a
                JOIN events e ON e.id = a.event_id
                ORDER BY a.registered_at DESC
                ",
            )
            .fetch_all(&pool)
            .await
            .map_err(|e| db_err("Failed to list attendees", &e))?;

            Ok(rows
                .into_iter()
                .map(|row| {
                    let event_id = EventId(row.attendee.event_id);
                    AttendeeWithEvent {
                        attendee: row.attendee.into(),
                        event: EventSummary {
                            id: event_id,
                            title: row.event_title,
                        },
                    }
                })
                .collect())
        }
    }

    fn ping(&self) -> impl Future<Output = Result<()>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query("SELECT 1")
                .execute(&pool)
                .await
                .map_err(|e| db_err("Database ping failed", &e))?;
            Ok(())
        }
    }
}
