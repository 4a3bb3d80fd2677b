//! Tracing library sink implementation.

use crate::formatter::RecordFormatter;
use crate::level::{from_native, LogLevel};
use crate::record::LogRecord;
use crate::sink::Sink;

/// Sink that delegates records to the `tracing` crate.
///
/// Bridges the facade to the `tracing` ecosystem, so subscribers, spans, and
/// file output keep working while call sites stay decoupled. The record body
/// goes through the sink's [`RecordFormatter`], so exception detail follows
/// the dump flag; timestamps and level rendering are left to the subscriber.
#[derive(Debug, Default)]
pub struct TracingSink {
    formatter: RecordFormatter,
}

impl TracingSink {
    /// Tracing sink whose formatter reads the global dump flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tracing sink rendering through the given formatter.
    pub fn with_formatter(formatter: RecordFormatter) -> Self {
        TracingSink { formatter }
    }
}

impl Sink for TracingSink {
    fn publish(&self, record: &LogRecord) {
        let message = self.formatter.message_with_exception(record);
        let logger = record.logger();
        match from_native(record.severity()) {
            Ok(LogLevel::Trace) => tracing::trace!(logger, "{}", message),
            Ok(LogLevel::Debug) => tracing::debug!(logger, "{}", message),
            Ok(LogLevel::Info) => tracing::info!(logger, "{}", message),
            Ok(LogLevel::Warning) => tracing::warn!(logger, "{}", message),
            Ok(LogLevel::Error) => tracing::error!(logger, "{}", message),
            // Best-effort contract: publish never fails outward. An
            // unmapped severity is a configuration bug, so surface it
            // loudly at error level.
            Err(_) => tracing::error!(
                logger,
                severity = %record.severity(),
                "record emitted at unmapped native severity: {}",
                message
            ),
        }
    }
}
