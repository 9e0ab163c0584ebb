use crate::{derived, factory};
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub factory: Arc<factory::Controller>,
    pub derived: Arc<derived::Controller>,
}

impl AppState {
    /// Wires each controller to its own service
    pub fn new() -> Self {
        Self {
            factory: Arc::new(factory::Controller::new(factory::Service::new())),
            derived: Arc::new(derived::Controller::new(derived::Service::new())),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
