//! Registry of named logger instances.

use std::sync::{Arc, OnceLock};

use dashmap::DashMap;

use crate::backend::LoggerInstance;

/// Name-keyed cache of logger instances.
///
/// `logger` creates instances lazily; asking twice for the same name returns
/// the same shared instance, so sinks registered under a name observe every
/// adapter emitting under that name. Tests construct their own registry and
/// inject it rather than sharing process-wide state; [`Registry::global`]
/// provides one shared registry per process for production call sites that
/// want the convenience.
#[derive(Debug, Default)]
pub struct Registry {
    instances: DashMap<String, Arc<LoggerInstance>>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide shared registry.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    /// Resolve the instance registered under `name`, creating it on first
    /// use. Same name, same instance.
    pub fn logger(&self, name: &str) -> Arc<LoggerInstance> {
        self.instances
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(LoggerInstance::new(name)))
            .value()
            .clone()
    }

    /// Number of instances created so far.
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether any instance has been created.
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
