//! Mock Notifier Implementation
//!
//! Records notifications in memory for test assertions.
//! Thread-safe via `Arc<Mutex<>>`.

use std::sync::{Arc, Mutex};

use crate::{Notification, Notifier, Severity};

/// Mock notifier that records notifications for test assertions.
#[derive(Debug, Clone, Default)]
pub struct MockNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all recorded notifications.
    pub fn recorded(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notifications lock poisoned, prior test panicked")
            .clone()
    }

    /// Messages recorded with the given severity, in order.
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.recorded()
            .into_iter()
            .filter(|n| n.severity == severity)
            .map(|n| n.message)
            .collect()
    }

    /// Clear all recorded notifications.
    pub fn reset(&self) {
        self.notifications
            .lock()
            .expect("notifications lock poisoned, prior test panicked")
            .clear();
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, notification: Notification) {
        tracing::debug!(severity = %notification.severity, "Mock notifier: recording notification");
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
