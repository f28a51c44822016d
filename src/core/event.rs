//! Log event captured at format time

use super::context::Context;
use super::severity::Severity;
use chrono::{DateTime, Local};

/// Everything one record is rendered from. Built per call and never stored.
#[derive(Debug, Clone)]
pub struct LogEvent<'a> {
    pub channel: &'a str,
    pub level: Severity,
    pub message: &'a str,
    pub context: Option<&'a Context>,
    pub pid: u32,
    pub timestamp: DateTime<Local>,
}

impl<'a> LogEvent<'a> {
    /// Capture an event stamped with the current process id and wall clock.
    pub fn capture(
        channel: &'a str,
        level: Severity,
        message: &'a str,
        context: Option<&'a Context>,
    ) -> Self {
        Self {
            channel,
            level,
            message,
            context,
            pid: std::process::id(),
            timestamp: Local::now(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    #[must_use]
    pub fn with_pid(mut self, pid: u32) -> Self {
        self.pid = pid;
        self
    }
}
