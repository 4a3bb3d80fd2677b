//! Sinks: observers of emitted log records.
//!
//! A sink registered on a backend instance receives every record that
//! survives the instance's severity threshold, synchronously on the emitting
//! thread. Sinks render records through a [`RecordFormatter`] when they need
//! text output.
//!
//! # Architecture
//!
//! - [`Sink`] trait: the observer contract (`publish`, no-op `flush`/`close`)
//! - [`CaptureSink`]: records the last message/output/severity for
//!   verification or routing to alternate destinations
//! - [`TracingSink`]: production sink that delegates to the `tracing` crate
//! - [`NoOpSink`]: silent sink for tests and benchmarks
//!
//! [`RecordFormatter`]: crate::formatter::RecordFormatter

mod capture;
mod noop;
mod tracing_sink;

use crate::record::LogRecord;

pub use capture::{CaptureSink, CapturedState};
pub use noop::NoOpSink;
pub use tracing_sink::TracingSink;

/// Observer registered on a backend logger instance.
///
/// # Contract
///
/// `publish` is called synchronously for every record that passes the
/// instance's threshold; it must tolerate malformed records (best-effort
/// rendering, never panic) and must not block indefinitely - a stalled sink
/// stalls every caller sharing its instance. `flush` and `close` default to
/// no-ops for sinks that do not buffer.
///
/// Implementations must be `Send + Sync`; publishes may arrive concurrently
/// from any number of caller threads.
pub trait Sink: Send + Sync {
    /// Observe one emitted record.
    fn publish(&self, record: &LogRecord);

    /// Flush buffered output. No-op for unbuffered sinks.
    fn flush(&self) {}

    /// Release resources. No-op for unbuffered sinks.
    fn close(&self) {}
}
