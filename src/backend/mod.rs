//! The backend: named logger instances and the registry that caches them.
//!
//! This realizes the collaborator contract the facade depends on:
//!
//! - named, cached instance retrieval - same name, same instance
//! - a per-instance minimum severity threshold
//! - sink registration and deregistration with scoped handles
//! - synchronous delivery of each surviving record to every registered sink
//!
//! The registry is an explicit component shared by reference rather than a
//! hidden process-wide cache, so tests construct their own and inject it;
//! [`Registry::global`] exists for call sites that want the operational
//! convenience of one shared registry per process.

mod instance;
mod registry;

pub use instance::{LoggerInstance, SinkHandle, SinkId};
pub use registry::Registry;
