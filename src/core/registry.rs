//! Named handler factories
//!
//! Maps a name to a constructor so handlers can be chosen by string without
//! any runtime type lookup.

use super::error::{LoggerError, Result};
use super::handler::Handler;
use crate::handlers::{FileHandler, StdoutHandler};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

pub type HandlerFactory = Arc<dyn Fn() -> Box<dyn Handler> + Send + Sync>;

#[derive(Clone, Default)]
pub struct HandlerRegistry {
    factories: HashMap<String, HandlerFactory>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with `"stdout"` and `"file"` (writing to `default.log`)
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("stdout", || Box::new(StdoutHandler::new()));
        registry.register("file", || Box::new(FileHandler::default()));
        registry
    }

    /// Add a factory, replacing any previous one under the same name
    ///
    /// ```
    /// use rust_channel_logger::{FileHandler, HandlerRegistry};
    ///
    /// let mut registry = HandlerRegistry::new();
    /// registry.register("audit", || Box::new(FileHandler::new("audit.log")));
    /// assert!(registry.contains("audit"));
    /// ```
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Box<dyn Handler> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Arc::new(factory));
        self
    }

    /// Register a file handler on a fixed path
    pub fn register_file(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> &mut Self {
        let path = path.into();
        self.register(name, move || Box::new(FileHandler::new(path.clone())))
    }

    pub fn create(&self, name: &str) -> Result<Box<dyn Handler>> {
        self.factories
            .get(name)
            .map(|factory| factory())
            .ok_or_else(|| LoggerError::unknown_handler(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for HandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
