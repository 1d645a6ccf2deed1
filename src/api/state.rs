//! Application state for the Tip Pool API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::service::TipService;

/// Shared application state.
///
/// Every store-touching operation goes through one lock, so the history
/// file has a single writer per process and concurrent appends cannot
/// overwrite each other.
#[derive(Clone)]
pub struct AppState {
    service: Arc<Mutex<TipService>>,
}

impl AppState {
    /// Creates a new application state around the given service.
    pub fn new(service: TipService) -> Self {
        Self {
            service: Arc::new(Mutex::new(service)),
        }
    }

    /// Returns the locked service handle.
    pub fn service(&self) -> &Mutex<TipService> {
        &self.service
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_app_state_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AppState>();
    }
}
