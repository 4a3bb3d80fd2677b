//! logbridge - a logging facade with observable sinks
//!
//! This library decouples application call sites from the concrete logging
//! backend. Call sites log through a [`LoggerAdapter`] with five canonical
//! levels; the facade maps each level onto the backend's native severity
//! ladder, renders the record, and delivers it synchronously to every sink
//! registered on the named backend instance.
//!
//! # High-Level API
//!
//! ```
//! use logbridge::{log_args, LoggerAdapter, Registry};
//!
//! let registry = Registry::new();
//! let logger = LoggerAdapter::new("app.startup", &registry);
//! logger.info("listening on port {0}", log_args![8080]);
//! ```
//!
//! Exception detail in formatted output is gated by a process-wide dump
//! flag (see [`dump`]): off by default, toggled at runtime, re-read on every
//! format call. Sinks observing records include [`TracingSink`] for routing
//! into the `tracing` ecosystem and [`CaptureSink`] for deterministic
//! interception in tests and alternate routing layers.

pub mod adapter;
pub mod backend;
pub mod dump;
pub mod formatter;
pub mod level;
pub mod record;
pub mod setup;
pub mod sink;

pub use adapter::LoggerAdapter;
pub use backend::{LoggerInstance, Registry, SinkHandle, SinkId};
pub use dump::{DumpFlag, DumpGuard};
pub use formatter::RecordFormatter;
pub use level::{from_native, to_native, LevelMapError, LogLevel, NativeSeverity};
pub use record::{ExceptionInfo, LogArg, LogRecord};
pub use setup::{init_logging, LoggingGuard};
pub use sink::{CaptureSink, CapturedState, NoOpSink, Sink, TracingSink};

/// Version of the logbridge library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
