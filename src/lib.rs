//! # Rust Channel Logger
//!
//! A small structured logger. Each accepted event becomes one tab-delimited
//! line:
//!
//! ```text
//! 2025-01-08 10:30:45.123456	[info]	[svc]	[pid:4242]	started	{"port":8080}	{}
//! ```
//!
//! ## Features
//!
//! - **Eight severities**: `debug` through `emergency`, filtered by a minimum level
//! - **Pluggable handlers**: file append with locking, stdout/stderr split by severity
//! - **Structured context**: ordered JSON fields plus a dedicated error slot
//! - **`log` facade**: install a logger as the global `log` backend (feature `facade`)

pub mod core;
#[cfg(feature = "facade")]
pub mod facade;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        Context, ExceptionInfo, Handler, HandlerRegistry, LineFormatter, Logger, LoggerBuilder,
        LoggerError, ParsedLine, Result, Severity,
    };
    #[cfg(feature = "facade")]
    pub use crate::facade::SharedLogger;
    pub use crate::handlers::{FileHandler, StdoutHandler};
}

pub use crate::core::{
    all_levels, priority_of, Context, ExceptionInfo, Handler, HandlerRegistry, LineFormatter,
    LogEvent, Logger, LoggerBuilder, LoggerError, ParsedLine, Result, Severity,
};
#[cfg(feature = "facade")]
pub use facade::SharedLogger;
pub use handlers::{FileHandler, StdoutHandler, Stream};
