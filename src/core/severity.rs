//! Severity table
//!
//! The eight canonical levels, ordered by numeric priority. Comparison is
//! always by priority, never by name.

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Severity {
    #[default]
    Debug = 1,
    Info = 2,
    Notice = 3,
    Warning = 4,
    Error = 5,
    Critical = 6,
    Alert = 7,
    Emergency = 8,
}

/// Name to priority mapping, lowest priority first.
pub const LEVEL_PRIORITY: [(&str, u8); 8] = [
    ("debug", 1),
    ("info", 2),
    ("notice", 3),
    ("warning", 4),
    ("error", 5),
    ("critical", 6),
    ("alert", 7),
    ("emergency", 8),
];

impl Severity {
    /// Every level in priority order.
    pub const ALL: [Severity; 8] = [
        Severity::Debug,
        Severity::Info,
        Severity::Notice,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
        Severity::Alert,
        Severity::Emergency,
    ];

    #[inline]
    pub const fn priority(self) -> u8 {
        self as u8
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Notice => "notice",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
            Severity::Alert => "alert",
            Severity::Emergency => "emergency",
        }
    }

    /// Levels at or above `error` go to stderr on the console handler.
    #[inline]
    pub const fn is_error_or_above(self) -> bool {
        self.priority() >= Severity::Error.priority()
    }
}

/// The ordered `(name, priority)` table, for introspection.
pub fn all_levels() -> &'static [(&'static str, u8)] {
    &LEVEL_PRIORITY
}

/// Look up the priority of a level by name.
pub fn priority_of(name: &str) -> Result<u8> {
    name.parse::<Severity>().map(Severity::priority)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .iter()
            .copied()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| LoggerError::unknown_level(s))
    }
}
