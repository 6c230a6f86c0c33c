//! Application state shared across HTTP handlers.

use eventdash_core::service::EventService;
use eventdash_core::store::EventStore;
use std::sync::Arc;

/// Application state: the domain service behind an `Arc`, cloned
/// cheaply per request.
#[derive(Debug)]
pub struct AppState<S> {
    /// The domain service all handlers delegate to.
    pub service: Arc<EventService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<S: EventStore> AppState<S> {
    /// Create state over the given service.
    #[must_use]
    pub fn new(service: EventService<S>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
