//! Handler trait for log output destinations

use super::{context::Context, error::Result, severity::Severity};

/// A sink that formats and delivers records which passed the logger's filter.
///
/// Handlers own formatting (through [`LineFormatter`](super::LineFormatter));
/// the logger only filters and dispatches.
pub trait Handler: Send + Sync {
    fn handle(
        &mut self,
        channel: &str,
        level: Severity,
        message: &str,
        context: Option<&Context>,
    ) -> Result<()>;

    fn name(&self) -> &str;
}
