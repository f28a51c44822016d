//! Handler implementations

pub mod file;
pub mod stdout;

pub use file::{FileHandler, DEFAULT_LOG_FILE};
pub use stdout::{SharedWriter, StdoutHandler, Stream};

pub use crate::core::Handler;
