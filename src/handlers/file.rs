//! File handler implementation

use crate::core::{Context, Handler, LineFormatter, LoggerError, Result, Severity};
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_FILE: &str = "default.log";

/// Appends records to a file.
///
/// The file is opened, exclusively locked, written and closed on every call,
/// so no descriptor outlives a call and an externally rotated file is picked
/// up on the next record.
#[derive(Debug, Clone)]
pub struct FileHandler {
    path: PathBuf,
    echo: bool,
    formatter: LineFormatter,
}

impl FileHandler {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            echo: false,
            formatter: LineFormatter::new(),
        }
    }

    /// Also copy every record to stdout
    ///
    /// ```no_run
    /// use rust_channel_logger::FileHandler;
    ///
    /// let handler = FileHandler::new("/var/log/app.log").with_echo(true);
    /// assert!(handler.echo());
    /// ```
    #[must_use]
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    pub fn set_echo(&mut self, echo: bool) {
        self.echo = echo;
    }

    pub fn echo(&self) -> bool {
        self.echo
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append_line(&self, line: &str) -> Result<()> {
        let fail = |e| LoggerError::write_failure(&self.path, e);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(fail)?;

        file.lock_exclusive().map_err(fail)?;
        let written = file.write_all(line.as_bytes());
        let unlocked = FileExt::unlock(&file);
        written.map_err(fail)?;
        unlocked.map_err(fail)
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_FILE)
    }
}

impl Handler for FileHandler {
    fn handle(
        &mut self,
        channel: &str,
        level: Severity,
        message: &str,
        context: Option<&Context>,
    ) -> Result<()> {
        let line = self.formatter.format(channel, level, message, context);
        self.append_line(&line)?;

        if self.echo {
            let mut out = std::io::stdout().lock();
            let _ = out.write_all(line.as_bytes()).and_then(|_| out.flush());
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ExceptionInfo, ParsedLine};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_appends_one_line_per_call() -> Result<()> {
        let dir = tempdir()?;
        let log_path = dir.path().join("test.log");
        let mut handler = FileHandler::new(&log_path);

        handler.handle("unittest", Severity::Info, "first", None)?;
        handler.handle("unittest", Severity::Error, "second", None)?;

        let content = fs::read_to_string(&log_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("[info]") && lines[0].contains("\tfirst\t"));
        assert!(lines[1].contains("[error]") && lines[1].contains("\tsecond\t"));
        Ok(())
    }

    #[test]
    fn test_creates_missing_file() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("fresh.log");
        assert!(!log_path.exists());

        FileHandler::new(&log_path)
            .handle("unittest", Severity::Debug, "hello", None)
            .unwrap();
        assert!(log_path.exists());
    }

    #[test]
    fn test_exception_lands_in_last_field() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("exception.log");
        let ctx = Context::new().with_exception(ExceptionInfo::new("Exception123"));

        FileHandler::new(&log_path)
            .handle("unittest", Severity::Error, "Testing the Exception", Some(&ctx))
            .unwrap();

        let content = fs::read_to_string(&log_path).unwrap();
        let parsed = ParsedLine::parse(&content).unwrap();
        assert_eq!(parsed.message, "Testing the Exception");
        assert_eq!(parsed.context, "{}");
        for needle in ["Exception123", "\"code\"", "\"file\"", "\"line\"", "\"trace\""] {
            assert!(parsed.exception.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_unwritable_path_fails() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("missing").join("dir").join("app.log");
        let mut handler = FileHandler::new(&log_path);

        let err = handler
            .handle("unittest", Severity::Info, "nope", None)
            .unwrap_err();
        assert!(matches!(err, LoggerError::WriteFailure { ref path, .. } if path == &log_path));
        assert!(!log_path.exists());
    }

    #[test]
    fn test_echo_flag() {
        let mut handler = FileHandler::default();
        assert_eq!(handler.path(), Path::new(DEFAULT_LOG_FILE));
        assert!(!handler.echo());
        handler.set_echo(true);
        assert!(handler.echo());
        handler.set_echo(false);
        assert!(!handler.echo());
    }
}
