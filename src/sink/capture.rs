//! Capture sink: observes formatted output for verification.

use std::sync::Mutex;

use crate::formatter::RecordFormatter;
use crate::level::NativeSeverity;
use crate::record::LogRecord;
use crate::sink::Sink;

/// Scratch state overwritten on each published record.
///
/// Cleared state is all-`None`; [`CaptureSink::clear`] resets every field so
/// stale data cannot leak into a later assertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedState {
    /// Plain formatted message of the last record, without exception detail.
    pub message: Option<String>,
    /// Full formatted output of the last record.
    pub output: Option<String>,
    /// Native severity of the last record.
    pub severity: Option<NativeSeverity>,
}

/// Sink that captures each record's formatted forms.
///
/// The canonical verification point for the facade: a test (or an alternate
/// routing layer) subscribes a `CaptureSink`, emits through an adapter, and
/// inspects the last message, last full output, and last severity.
///
/// Safe under concurrent publishes - the scratch state is behind a mutex and
/// the last writer wins. Assertions on interleaved output still require
/// single-threaded emission.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use logbridge::{CaptureSink, LoggerAdapter, Registry};
///
/// let registry = Registry::new();
/// let sink = Arc::new(CaptureSink::new());
/// let instance = registry.logger("example");
/// let _handle = instance.subscribe(sink.clone());
///
/// let logger = LoggerAdapter::new("example", &registry);
/// logger.info("hello {0}", logbridge::log_args!["world"]);
/// assert_eq!(sink.last_message().as_deref(), Some("hello world"));
/// ```
#[derive(Debug, Default)]
pub struct CaptureSink {
    formatter: RecordFormatter,
    state: Mutex<CapturedState>,
}

impl CaptureSink {
    /// Capture sink whose formatter reads the global dump flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture sink rendering through the given formatter.
    pub fn with_formatter(formatter: RecordFormatter) -> Self {
        CaptureSink {
            formatter,
            state: Mutex::new(CapturedState::default()),
        }
    }

    /// Reset message, output, and severity to `None`.
    pub fn clear(&self) {
        *self.lock() = CapturedState::default();
    }

    /// Plain message of the last captured record.
    pub fn last_message(&self) -> Option<String> {
        self.lock().message.clone()
    }

    /// Full formatted output of the last captured record.
    pub fn last_output(&self) -> Option<String> {
        self.lock().output.clone()
    }

    /// Native severity of the last captured record.
    pub fn last_severity(&self) -> Option<NativeSeverity> {
        self.lock().severity
    }

    /// Copy of the whole captured state.
    pub fn snapshot(&self) -> CapturedState {
        self.lock().clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CapturedState> {
        // A panicked publisher must not wedge later assertions.
        match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Sink for CaptureSink {
    fn publish(&self, record: &LogRecord) {
        let message = self.formatter.plain_message(record);
        let output = self.formatter.format(record);
        let mut state = self.lock();
        state.message = Some(message);
        state.output = Some(output);
        state.severity = Some(record.severity());
    }
}
