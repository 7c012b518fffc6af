//! Console notifier
//!
//! One line per notification. Errors and warnings go to stderr, everything
//! else to stdout.

use std::io::Write;

use crate::{Notification, Notifier, Severity};

/// Notifier that prints to the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self
    }
}

/// Render a notification as a single line
pub fn format_line(notification: &Notification) -> String {
    let label = match notification.severity {
        Severity::Success => "ok",
        Severity::Error => "error",
        Severity::Warning => "warning",
        Severity::Info => "info",
    };

    match &notification.description {
        Some(description) => format!("{}: {} ({})", label, notification.message, description),
        None => format!("{}: {}", label, notification.message),
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let line = format_line(&notification);

        // A closed pipe is not worth failing the caller over
        let _ = match notification.severity {
            Severity::Error | Severity::Warning => writeln!(std::io::stderr().lock(), "{}", line),
            Severity::Success | Severity::Info => writeln!(std::io::stdout().lock(), "{}", line),
        };
    }
}
