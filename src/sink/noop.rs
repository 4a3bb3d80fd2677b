//! No-operation sink implementation.

use crate::record::LogRecord;
use crate::sink::Sink;

/// A sink that discards all records.
///
/// Useful for:
/// - Unit tests where captured output would be noise
/// - Benchmarks where sink overhead should be eliminated
/// - Keeping an instance "live" with no destination
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl Sink for NoOpSink {
    #[inline]
    fn publish(&self, _record: &LogRecord) {
        // Intentionally empty - discard all records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::NativeSeverity;

    #[test]
    fn test_noop_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpSink>();
    }

    #[test]
    fn test_noop_sink_as_trait_object() {
        let sink: Box<dyn Sink> = Box::new(NoOpSink);
        let record = LogRecord::new(NativeSeverity::Info, "noop.test", "dropped", Vec::new(), None);
        sink.publish(&record);
        sink.flush();
        sink.close();
    }
}
