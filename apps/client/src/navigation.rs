//! # Navigation Surface
//!
//! Seam between the pages and whatever performs actual route changes.
//!
//! The pages only ever redirect to the login route: from the unauthenticated
//! call-to-action, and after a successful signup. The embedding UI supplies
//! the real implementation; the demo binary logs instead.

use tracing::info;

/// Performs whole-page navigation to a route.
pub trait Navigator: Send + Sync + 'static {
    /// Navigates to the given route (e.g. `/login`).
    fn navigate(&self, route: &str);
}

/// Navigator that records the request in the log stream.
///
/// Used by the demo binary, where there is no router to drive.
#[derive(Debug, Default)]
pub struct TracingNavigator;

impl Navigator for TracingNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "navigation requested");
    }
}

/// Navigator that records routes for assertions.
#[cfg(test)]
pub(crate) struct RecordingNavigator {
    routes: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNavigator {
    pub(crate) fn new() -> std::sync::Arc<Self> {
        std::sync::Arc::new(RecordingNavigator {
            routes: std::sync::Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl Navigator for RecordingNavigator {
    fn navigate(&self, route: &str) {
        self.routes.lock().unwrap().push(route.to_string());
    }
}
