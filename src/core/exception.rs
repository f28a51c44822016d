//! Structured error info attached to a log call
//!
//! An [`ExceptionInfo`] rides in its own slot on [`Context`] instead of being
//! discovered under a magic key, and is serialized separately into the last
//! field of the record.

use super::context::Context;
use super::json;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::Write as _;
use std::panic::Location;

const EMPTY_OBJECT: &str = "{}";

/// Error details rendered as `{"message","code","file","line","trace"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExceptionInfo {
    pub message: String,
    pub code: i64,
    pub file: String,
    pub line: u32,
    pub trace: String,
}

impl ExceptionInfo {
    /// Create error info located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = Location::caller();
        Self {
            message: message.into(),
            code: 0,
            file: location.file().to_string(),
            line: location.line(),
            trace: "#0 {main}".to_string(),
        }
    }

    /// Capture an error value; its `source()` chain becomes the trace.
    ///
    /// ```
    /// use rust_channel_logger::ExceptionInfo;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    /// let info = ExceptionInfo::from_error(&io);
    /// assert_eq!(info.message, "config.toml missing");
    /// assert!(info.trace.ends_with("{main}"));
    /// ```
    #[track_caller]
    pub fn from_error(error: &(dyn Error + 'static)) -> Self {
        let mut trace = String::new();
        let mut depth = 0;
        let mut cause = error.source();
        while let Some(err) = cause {
            let _ = writeln!(trace, "#{} {}", depth, err);
            depth += 1;
            cause = err.source();
        }
        let _ = write!(trace, "#{} {{main}}", depth);

        Self {
            trace,
            ..Self::new(error.to_string())
        }
    }

    #[must_use]
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    #[must_use]
    pub fn with_location(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = file.into();
        self.line = line;
        self
    }

    #[must_use]
    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = trace.into();
        self
    }

    /// Serialize with keys in record order; slashes stay unescaped, non-ASCII is `\uXXXX`.
    pub fn to_json(&self) -> String {
        json::to_string(self).unwrap_or_else(|_| EMPTY_OBJECT.to_string())
    }
}

/// Split a call's context into `(contextJSON, exceptionJSON)`.
///
/// Either half is `{}` when absent; the exception never appears in the
/// context half.
pub fn extract_exception(context: Option<&Context>) -> (String, String) {
    match context {
        Some(context) => (
            context.to_json(),
            context
                .exception()
                .map(ExceptionInfo::to_json)
                .unwrap_or_else(|| EMPTY_OBJECT.to_string()),
        ),
        None => (EMPTY_OBJECT.to_string(), EMPTY_OBJECT.to_string()),
    }
}
