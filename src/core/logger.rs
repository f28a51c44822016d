//! Main logger implementation

use super::{
    context::Context,
    error::Result,
    handler::Handler,
    registry::HandlerRegistry,
    severity::Severity,
};
use crate::handlers::StdoutHandler;

pub const DEFAULT_CHANNEL: &str = "default";

/// Filters events by minimum severity and fans them out to handlers.
///
/// Dispatch is synchronous and in registration order. The logger does no
/// locking of its own; share it across threads behind a mutex
/// (see [`SharedLogger`](crate::SharedLogger)) or keep one per thread.
pub struct Logger {
    channel: String,
    min_level: Severity,
    handlers: Vec<Box<dyn Handler>>,
}

impl Logger {
    /// Create a logger logging everything from `debug` up.
    ///
    /// An empty channel falls back to `"default"`.
    pub fn new(channel: impl Into<String>) -> Self {
        Self::with_level(channel, Severity::Debug)
    }

    pub fn with_level(channel: impl Into<String>, min_level: Severity) -> Self {
        Self {
            channel: normalize_channel(channel.into()),
            min_level,
            handlers: Vec::new(),
        }
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use rust_channel_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .channel("billing")
    ///     .min_level(Severity::Warning)
    ///     .handler(StdoutHandler::new())
    ///     .build();
    /// assert_eq!(logger.channel(), "billing");
    /// assert_eq!(logger.handler_count(), 1);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Empty names fall back to `"default"`. Tabs and line breaks are
    /// written escaped, so a record stays on one line.
    pub fn set_channel(&mut self, channel: impl Into<String>) -> &mut Self {
        self.channel = normalize_channel(channel.into());
        self
    }

    pub fn level(&self) -> Severity {
        self.min_level
    }

    pub fn set_level(&mut self, level: Severity) -> &mut Self {
        self.min_level = level;
        self
    }

    /// Set the minimum level by name; an unknown name leaves the level as it was.
    pub fn set_level_str(&mut self, level: &str) -> Result<()> {
        self.min_level = level.parse()?;
        Ok(())
    }

    /// Append a handler; every registered handler receives every accepted event.
    pub fn add_handler(&mut self, handler: Box<dyn Handler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Replace all registered handlers with this one.
    pub fn set_handler(&mut self, handler: Box<dyn Handler>) -> &mut Self {
        self.handlers.clear();
        self.add_handler(handler)
    }

    pub fn add_handler_named(&mut self, registry: &HandlerRegistry, name: &str) -> Result<&mut Self> {
        let handler = registry.create(name)?;
        Ok(self.add_handler(handler))
    }

    pub fn set_handler_named(&mut self, registry: &HandlerRegistry, name: &str) -> Result<&mut Self> {
        let handler = registry.create(name)?;
        Ok(self.set_handler(handler))
    }

    pub fn handlers(&self) -> &[Box<dyn Handler>] {
        &self.handlers
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn clear_handlers(&mut self) {
        self.handlers.clear();
    }

    /// Whether an event at `level` would pass the filter.
    #[inline]
    pub fn log_at_this_level(&self, level: Severity) -> bool {
        level.priority() >= self.min_level.priority()
    }

    /// Generic entry point.
    ///
    /// Rejected levels return before any formatting. With no handlers
    /// registered the event goes to a one-off [`StdoutHandler`]. The first
    /// handler error is returned and later handlers are skipped.
    pub fn log(
        &mut self,
        level: Severity,
        message: impl AsRef<str>,
        context: Option<&Context>,
    ) -> Result<()> {
        if !self.log_at_this_level(level) {
            return Ok(());
        }

        let message = message.as_ref();
        if self.handlers.is_empty() {
            return StdoutHandler::new().handle(&self.channel, level, message, context);
        }

        for handler in self.handlers.iter_mut() {
            handler.handle(&self.channel, level, message, context)?;
        }
        Ok(())
    }

    /// Log with a level given by name.
    pub fn log_str(
        &mut self,
        level: &str,
        message: impl AsRef<str>,
        context: Option<&Context>,
    ) -> Result<()> {
        let level: Severity = level.parse()?;
        self.log(level, message, context)
    }

    pub fn log_with_context(
        &mut self,
        level: Severity,
        message: impl AsRef<str>,
        context: &Context,
    ) -> Result<()> {
        self.log(level, message, Some(context))
    }

    pub fn debug(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Debug, message, None)
    }

    pub fn info(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Info, message, None)
    }

    pub fn notice(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Notice, message, None)
    }

    pub fn warning(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Warning, message, None)
    }

    pub fn error(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Error, message, None)
    }

    pub fn critical(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Critical, message, None)
    }

    pub fn alert(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Alert, message, None)
    }

    pub fn emergency(&mut self, message: impl AsRef<str>) -> Result<()> {
        self.log(Severity::Emergency, message, None)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.handlers.iter().map(|h| h.name()).collect();
        f.debug_struct("Logger")
            .field("channel", &self.channel)
            .field("min_level", &self.min_level)
            .field("handlers", &names)
            .finish()
    }
}

fn normalize_channel(channel: String) -> String {
    if channel.is_empty() {
        DEFAULT_CHANNEL.to_string()
    } else {
        channel
    }
}

/// Builder for creating a Logger with custom configuration
pub struct LoggerBuilder {
    channel: String,
    min_level: Severity,
    handlers: Vec<Box<dyn Handler>>,
}

impl LoggerBuilder {
    /// Create a new logger builder with default settings
    pub fn new() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            min_level: Severity::Debug,
            handlers: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Set the minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.min_level = level;
        self
    }

    /// Add a handler
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let mut logger = Logger::with_level(self.channel, self.min_level);
        for handler in self.handlers {
            logger.add_handler(handler);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Calls = Arc<Mutex<Vec<(String, String, Severity, String)>>>;

    /// Records every call it receives under its own tag.
    struct Recording {
        tag: &'static str,
        calls: Calls,
    }

    impl Handler for Recording {
        fn handle(
            &mut self,
            channel: &str,
            level: Severity,
            message: &str,
            _context: Option<&Context>,
        ) -> Result<()> {
            self.calls.lock().push((
                self.tag.to_string(),
                channel.to_string(),
                level,
                message.to_string(),
            ));
            Ok(())
        }

        fn name(&self) -> &str {
            self.tag
        }
    }

    struct Failing;

    impl Handler for Failing {
        fn handle(&mut self, _: &str, _: Severity, _: &str, _: Option<&Context>) -> Result<()> {
            Err(LoggerError::write_failure(
                "/unwritable/failing.log",
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Simulated failure"),
            ))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn recording(tag: &'static str, calls: &Calls) -> Box<dyn Handler> {
        Box::new(Recording {
            tag,
            calls: Arc::clone(calls),
        })
    }

    #[test]
    fn test_defaults() {
        let logger = Logger::new("");
        assert_eq!(logger.channel(), "default");
        assert_eq!(logger.level(), Severity::Debug);
        assert_eq!(logger.handler_count(), 0);

        let logger = Logger::default();
        assert_eq!(logger.channel(), DEFAULT_CHANNEL);
    }

    #[test]
    fn test_filtering() {
        let calls = Calls::default();
        let mut logger = Logger::with_level("svc", Severity::Error);
        logger.add_handler(recording("a", &calls));

        logger.warning("dropped").unwrap();
        assert!(calls.lock().is_empty());

        logger.error("kept").unwrap();
        assert_eq!(calls.lock().len(), 1);
    }

    #[test]
    fn test_dispatch_order() {
        let calls = Calls::default();
        let mut logger = Logger::new("svc");
        logger
            .add_handler(recording("first", &calls))
            .add_handler(recording("second", &calls));

        logger.info("hello").unwrap();

        let calls = calls.lock();
        let tags: Vec<&str> = calls.iter().map(|c| c.0.as_str()).collect();
        assert_eq!(tags, vec!["first", "second"]);
        assert_eq!(calls[0].1, "svc");
        assert_eq!(calls[0].2, Severity::Info);
        assert_eq!(calls[0].3, "hello");
    }

    #[test]
    fn test_set_handler_replaces() {
        let calls = Calls::default();
        let mut logger = Logger::new("svc");
        logger
            .add_handler(recording("old1", &calls))
            .add_handler(recording("old2", &calls));
        logger.set_handler(recording("new", &calls));
        assert_eq!(logger.handler_count(), 1);

        logger.notice("x").unwrap();
        assert_eq!(calls.lock()[0].0, "new");
    }

    #[test]
    fn test_fail_fast() {
        let calls = Calls::default();
        let mut logger = Logger::new("svc");
        logger
            .add_handler(Box::new(Failing))
            .add_handler(recording("after", &calls));

        assert!(logger.critical("boom").is_err());
        assert!(calls.lock().is_empty());
    }

    #[test]
    fn test_set_level_str() {
        let mut logger = Logger::new("svc");
        logger.set_level_str("warning").unwrap();
        assert_eq!(logger.level(), Severity::Warning);

        let err = logger.set_level_str("ThisLogLevelDoesNotExist").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));
        assert_eq!(logger.level(), Severity::Warning);

        let err = logger.set_level_str("INFO").unwrap_err();
        assert!(matches!(err, LoggerError::UnknownLevel { .. }));
        assert_eq!(logger.level(), Severity::Warning);
    }

    #[test]
    fn test_log_str_unknown_level() {
        let calls = Calls::default();
        let mut logger = Logger::new("svc");
        logger.add_handler(recording("a", &calls));

        assert!(logger.log_str("verbose", "x", None).is_err());
        logger.log_str("alert", "y", None).unwrap();
        assert_eq!(calls.lock().len(), 1);
        assert_eq!(calls.lock()[0].2, Severity::Alert);
    }

    #[test]
    fn test_set_channel_applies_to_later_calls() {
        let calls = Calls::default();
        let mut logger = Logger::new("before");
        logger.add_handler(recording("a", &calls));

        logger.info("one").unwrap();
        logger.set_channel("after");
        logger.info("two").unwrap();

        let calls = calls.lock();
        assert_eq!(calls[0].1, "before");
        assert_eq!(calls[1].1, "after");
    }

    #[test]
    fn test_log_at_this_level_is_stable() {
        let logger = Logger::with_level("svc", Severity::Notice);
        for level in Severity::ALL {
            let first = logger.log_at_this_level(level);
            assert_eq!(first, level >= Severity::Notice);
            assert_eq!(first, logger.log_at_this_level(level));
        }
    }

    #[test]
    fn test_named_handlers() {
        let mut registry = HandlerRegistry::new();
        let calls = Calls::default();
        let shared = Arc::clone(&calls);
        registry.register("rec", move || recording("rec", &shared));

        let mut logger = Logger::new("svc");
        logger.add_handler_named(&registry, "rec").unwrap();
        assert!(logger.add_handler_named(&registry, "missing").is_err());
        assert_eq!(logger.handler_count(), 1);

        logger.set_handler_named(&registry, "rec").unwrap();
        assert_eq!(logger.handler_count(), 1);
        assert_eq!(logger.handlers()[0].name(), "rec");
    }

    #[test]
    fn test_builder() {
        let calls = Calls::default();
        let logger = Logger::builder()
            .channel("")
            .min_level(Severity::Critical)
            .handler(Recording {
                tag: "a",
                calls: Arc::clone(&calls),
            })
            .build();
        assert_eq!(logger.channel(), "default");
        assert_eq!(logger.level(), Severity::Critical);
        assert!(format!("{:?}", logger).contains("\"a\""));
    }
}
