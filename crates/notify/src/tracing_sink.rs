//! Notifier that emits `tracing` events

use crate::{Notification, Notifier, Severity};

/// Maps error to `error!`, warning to `warn!`, success and info to `info!`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        let severity = notification.severity;
        let description = notification.description.as_deref().unwrap_or("");
        let duration_ms = notification.duration.map(|d| d.as_millis() as u64);

        match severity {
            Severity::Error => {
                tracing::error!(%severity, description, duration_ms, "{}", notification.message)
            }
            Severity::Warning => {
                tracing::warn!(%severity, description, duration_ms, "{}", notification.message)
            }
            Severity::Success | Severity::Info => {
                tracing::info!(%severity, description, duration_ms, "{}", notification.message)
            }
        }
    }
}
