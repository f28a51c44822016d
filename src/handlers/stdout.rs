//! Console handler: stdout below `error`, stderr at `error` and above

use crate::core::{Context, Handler, LineFormatter, Result, Severity};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// A writer shared between the handler and whoever inspects the output.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    pub fn for_level(level: Severity) -> Self {
        if level.is_error_or_above() {
            Stream::Stderr
        } else {
            Stream::Stdout
        }
    }
}

enum Sink {
    Process,
    Shared { out: SharedWriter, err: SharedWriter },
}

/// Fallback handler. Writes are best-effort and never fail the caller.
pub struct StdoutHandler {
    sink: Sink,
    formatter: LineFormatter,
}

impl StdoutHandler {
    pub fn new() -> Self {
        Self {
            sink: Sink::Process,
            formatter: LineFormatter::new(),
        }
    }

    /// Route output to the given writers instead of the process streams
    ///
    /// ```
    /// use parking_lot::Mutex;
    /// use rust_channel_logger::{Handler, Severity, StdoutHandler};
    /// use std::sync::Arc;
    ///
    /// let out = Arc::new(Mutex::new(Vec::<u8>::new()));
    /// let err = Arc::new(Mutex::new(Vec::<u8>::new()));
    /// let mut handler = StdoutHandler::with_writers(out.clone(), err.clone());
    ///
    /// handler.handle("svc", Severity::Info, "started", None).unwrap();
    /// assert!(String::from_utf8_lossy(&out.lock()).contains("[info]"));
    /// assert!(err.lock().is_empty());
    /// ```
    pub fn with_writers(out: SharedWriter, err: SharedWriter) -> Self {
        Self {
            sink: Sink::Shared { out, err },
            formatter: LineFormatter::new(),
        }
    }

    fn write_line(&self, stream: Stream, line: &str) -> std::io::Result<()> {
        match &self.sink {
            Sink::Process => match stream {
                Stream::Stdout => {
                    let mut out = std::io::stdout().lock();
                    out.write_all(line.as_bytes())?;
                    out.flush()
                }
                Stream::Stderr => {
                    let mut err = std::io::stderr().lock();
                    err.write_all(line.as_bytes())?;
                    err.flush()
                }
            },
            Sink::Shared { out, err } => {
                let writer = match stream {
                    Stream::Stdout => out,
                    Stream::Stderr => err,
                };
                let mut writer = writer.lock();
                writer.write_all(line.as_bytes())?;
                writer.flush()
            }
        }
    }
}

impl Default for StdoutHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler for StdoutHandler {
    fn handle(
        &mut self,
        channel: &str,
        level: Severity,
        message: &str,
        context: Option<&Context>,
    ) -> Result<()> {
        let line = self.formatter.format(channel, level, message, context);
        // Console output is the no-configuration fallback; a broken pipe must not surface.
        let _ = self.write_line(Stream::for_level(level), &line);
        Ok(())
    }

    fn name(&self) -> &str {
        "stdout"
    }
}
