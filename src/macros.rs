//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to a
//! call on the logger and evaluates to its `Result<()>`.
//!
//! # Examples
//!
//! ```
//! use rust_channel_logger::prelude::*;
//! use rust_channel_logger::{info, log};
//!
//! let mut logger = Logger::new("svc");
//!
//! info!(logger, "Server started")?;
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//!
//! let ctx = Context::new().with_field("port", port);
//! log!(logger, Severity::Notice, ctx = &ctx, "Bound {}", "0.0.0.0")?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at an explicit level, optionally with a context.
///
/// The format arguments are only evaluated when the level passes the
/// logger's minimum.
///
/// # Examples
///
/// ```
/// # use rust_channel_logger::prelude::*;
/// # let mut logger = Logger::new("svc");
/// use rust_channel_logger::log;
/// log!(logger, Severity::Info, "Simple message").unwrap();
/// log!(logger, Severity::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, ctx = $ctx:expr, $($arg:tt)+) => {
        match $level {
            level if $logger.log_at_this_level(level) => {
                $logger.log(level, format!($($arg)+), Some($ctx))
            }
            _ => ::core::result::Result::Ok(()),
        }
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        match $level {
            level if $logger.log_at_this_level(level) => {
                $logger.log(level, format!($($arg)+), None)
            }
            _ => ::core::result::Result::Ok(()),
        }
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_channel_logger::prelude::*;
/// # let mut logger = Logger::new("svc");
/// use rust_channel_logger::info;
/// info!(logger, "User {} logged in", 42).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_channel_logger::prelude::*;
/// # let mut logger = Logger::with_level("svc", Severity::Critical);
/// use rust_channel_logger::error;
/// error!(logger, "Failed to connect: {}", "timeout").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Critical, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
#[macro_export]
macro_rules! emergency {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Emergency, $($arg)+)
    };
}
