//! Core logger types and traits

pub mod context;
pub mod error;
pub mod event;
pub mod exception;
pub mod formatter;
pub mod handler;
pub mod json;
pub mod logger;
pub mod registry;
pub mod severity;

pub use context::{Context, UNSERIALIZABLE};
pub use error::{LoggerError, Result};
pub use event::LogEvent;
pub use exception::{extract_exception, ExceptionInfo};
pub use formatter::{normalize_newlines, LineFormatter, ParsedLine, FIELD_COUNT, TIMESTAMP_FORMAT};
pub use handler::Handler;
pub use logger::{Logger, LoggerBuilder, DEFAULT_CHANNEL};
pub use registry::{HandlerFactory, HandlerRegistry};
pub use severity::{all_levels, priority_of, Severity, LEVEL_PRIORITY};
