//! SYSMEDIC Notification Service
//!
//! Maps the four user-facing severities onto an output sink:
//! - Console output for the command-line front end
//! - `tracing` events for headless use
//! - Mock notifier that records notifications for test assertions

pub mod console;
pub mod mock;
pub mod tracing_sink;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Notifier configuration error: {0}")]
    Configuration(String),
}

/// Notification severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// A message shown to the end user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
    pub description: Option<String>,
    /// How long the sink should keep the message visible, where that applies
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
            description: None,
            duration: None,
        }
    }

    /// Add secondary text shown under the message
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Override the display duration
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

/// Notification sink
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);

    fn success(&self, message: &str) {
        self.notify(Notification::new(Severity::Success, message));
    }

    fn error(&self, message: &str) {
        self.notify(Notification::new(Severity::Error, message));
    }

    fn warning(&self, message: &str) {
        self.notify(Notification::new(Severity::Warning, message));
    }

    fn info(&self, message: &str) {
        self.notify(Notification::new(Severity::Info, message));
    }
}

/// Factory for creating Notifier implementations
pub struct NotifierFactory;

impl NotifierFactory {
    /// Create a Notifier by name (console, tracing, mock)
    pub fn create(kind: &str) -> Result<Box<dyn Notifier>, NotifyError> {
        match kind {
            "console" => Ok(Box::new(console::ConsoleNotifier::new())),
            "tracing" => Ok(Box::new(tracing_sink::TracingNotifier::new())),
            "mock" => {
                tracing::info!("Creating mock notifier");
                Ok(Box::new(mock::MockNotifier::new()))
            }
            other => Err(NotifyError::Configuration(format!(
                "Unknown notifier: {}. Supported notifiers: console, tracing, mock",
                other
            ))),
        }
    }
}
