//! Line formatter
//!
//! Renders one event as a single tab-delimited record:
//!
//! ```text
//! <timestamp>\t[<level>]\t[<channel>]\t[pid:<pid>]\t<message>\t<contextJSON>\t<exceptionJSON>\n
//! ```
//!
//! Line breaks in the message and in both JSON fields become the two
//! characters `\n`, so a record always occupies exactly one physical line.

use super::context::Context;
use super::error::{LoggerError, Result};
use super::event::LogEvent;
use super::exception::extract_exception;
use super::severity::Severity;
use chrono::NaiveDateTime;

/// `YYYY-MM-DD HH:MM:SS.ffffff`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Number of tab-separated fields in a record.
pub const FIELD_COUNT: usize = 7;

/// Characters stripped from both ends of a message.
const TRIMMED: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Shared formatting capability used by every handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl LineFormatter {
    pub const fn new() -> Self {
        LineFormatter
    }

    /// Capture an event now and render it.
    pub fn format(
        &self,
        channel: &str,
        level: Severity,
        message: &str,
        context: Option<&Context>,
    ) -> String {
        self.render(&LogEvent::capture(channel, level, message, context))
    }

    /// Render a captured event. Pure: the same event always yields the same line.
    pub fn render(&self, event: &LogEvent<'_>) -> String {
        let (data, exception) = extract_exception(event.context);
        let timestamp = event.timestamp.format(TIMESTAMP_FORMAT);

        format!(
            "{}\t[{}]\t[{}]\t[pid:{}]\t{}\t{}\t{}\n",
            timestamp,
            event.level,
            escape_field(event.channel),
            event.pid,
            sanitize_message(event.message),
            normalize_newlines(&data),
            normalize_newlines(&exception),
        )
    }
}

/// Replace `\r\n`, `\n` and `\r` with a literal backslash-n.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\\n")
        .replace('\n', "\\n")
        .replace('\r', "\\n")
}

/// Fold line breaks and escape tabs so the field split stays intact.
fn escape_field(text: &str) -> String {
    normalize_newlines(text).replace('\t', "\\t")
}

fn sanitize_message(message: &str) -> String {
    escape_field(message.trim_matches(TRIMMED))
}

/// A record split back into its seven fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub timestamp: NaiveDateTime,
    pub level: Severity,
    pub channel: String,
    pub pid: u32,
    pub message: String,
    pub context: String,
    pub exception: String,
}

impl ParsedLine {
    /// Parse one record; a trailing line terminator is ignored.
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != FIELD_COUNT {
            return Err(LoggerError::malformed(format!(
                "expected {} fields, found {}",
                FIELD_COUNT,
                fields.len()
            )));
        }

        let timestamp = NaiveDateTime::parse_from_str(fields[0], TIMESTAMP_FORMAT)
            .map_err(|e| LoggerError::malformed(format!("bad timestamp '{}': {}", fields[0], e)))?;
        let level = bracketed(fields[1], "[", "]")?.parse::<Severity>()?;
        let channel = bracketed(fields[2], "[", "]")?.to_string();
        let pid = bracketed(fields[3], "[pid:", "]")?
            .parse::<u32>()
            .map_err(|e| LoggerError::malformed(format!("bad pid '{}': {}", fields[3], e)))?;

        Ok(Self {
            timestamp,
            level,
            channel,
            pid,
            message: fields[4].to_string(),
            context: fields[5].to_string(),
            exception: fields[6].to_string(),
        })
    }
}

fn bracketed<'a>(field: &'a str, open: &str, close: &str) -> Result<&'a str> {
    field
        .strip_prefix(open)
        .and_then(|rest| rest.strip_suffix(close))
        .ok_or_else(|| LoggerError::malformed(format!("expected {}...{} in '{}'", open, close, field)))
}
