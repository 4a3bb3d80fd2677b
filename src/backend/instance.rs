//! A named backend logger instance.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::level::NativeSeverity;
use crate::record::LogRecord;
use crate::sink::Sink;

/// Identifier of one sink registration on an instance.
pub type SinkId = u64;

/// One named logger instance: a severity threshold plus registered sinks.
///
/// Obtained from [`Registry::logger`](crate::backend::Registry::logger) and
/// shared by reference - every adapter constructed with the same name on the
/// same registry emits through the same instance.
///
/// # Thread safety
///
/// All methods may be called concurrently from any thread. Emission holds
/// the sink list read lock for the duration of delivery, so sinks must not
/// block indefinitely - a stalled sink stalls every caller sharing the
/// instance.
pub struct LoggerInstance {
    name: String,
    min_severity: RwLock<NativeSeverity>,
    sinks: RwLock<Vec<(SinkId, Arc<dyn Sink>)>>,
    next_sink_id: AtomicU64,
}

impl std::fmt::Debug for LoggerInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerInstance")
            .field("name", &self.name)
            .field("min_severity", &self.min_severity())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

impl LoggerInstance {
    /// New instance with the default threshold (`Info`) and no sinks.
    pub(crate) fn new(name: impl Into<String>) -> Self {
        LoggerInstance {
            name: name.into(),
            min_severity: RwLock::new(NativeSeverity::Info),
            sinks: RwLock::new(Vec::new()),
            next_sink_id: AtomicU64::new(0),
        }
    }

    /// Name the instance was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current minimum severity threshold.
    pub fn min_severity(&self) -> NativeSeverity {
        *read_lock(&self.min_severity)
    }

    /// Set the minimum severity threshold.
    ///
    /// Records strictly less severe than the threshold are dropped before
    /// reaching any sink. `Off` suppresses everything; `All` admits
    /// everything.
    pub fn set_min_severity(&self, severity: NativeSeverity) {
        *write_lock(&self.min_severity) = severity;
    }

    /// Register a sink.
    ///
    /// The returned handle deregisters the sink when dropped, so a test that
    /// panics mid-body still detaches its sink on unwind. Call
    /// [`SinkHandle::detach`] to keep the registration alive past the
    /// handle's scope.
    pub fn subscribe(self: &Arc<Self>, sink: Arc<dyn Sink>) -> SinkHandle {
        let id = self.next_sink_id.fetch_add(1, Ordering::Relaxed);
        write_lock(&self.sinks).push((id, sink));
        SinkHandle {
            instance: Some(Arc::clone(self)),
            id,
        }
    }

    /// Deregister a sink by id, closing it. No-op for unknown ids.
    pub fn unsubscribe(&self, id: SinkId) {
        let removed = {
            let mut sinks = write_lock(&self.sinks);
            match sinks.iter().position(|(sink_id, _)| *sink_id == id) {
                Some(index) => Some(sinks.remove(index)),
                None => None,
            }
        };
        // Close outside the lock; close may do arbitrary sink work.
        if let Some((_, sink)) = removed {
            sink.flush();
            sink.close();
        }
    }

    /// Number of currently registered sinks.
    pub fn sink_count(&self) -> usize {
        read_lock(&self.sinks).len()
    }

    /// Emit a record: gate on the threshold, then deliver synchronously to
    /// every currently registered sink on the calling thread.
    ///
    /// Fire-and-forget - a dropped record is indistinguishable from a
    /// delivered one at the call site.
    pub fn log(&self, record: LogRecord) {
        if record.severity().weight() < self.min_severity().weight() {
            return;
        }
        for (_, sink) in read_lock(&self.sinks).iter() {
            sink.publish(&record);
        }
    }
}

/// Registration handle returned by [`LoggerInstance::subscribe`].
///
/// Dropping the handle deregisters the sink, guaranteeing release on every
/// exit path of the registering scope.
#[derive(Debug)]
pub struct SinkHandle {
    instance: Option<Arc<LoggerInstance>>,
    id: SinkId,
}

impl SinkHandle {
    /// Identifier of this registration.
    pub fn id(&self) -> SinkId {
        self.id
    }

    /// Leave the sink registered permanently.
    pub fn detach(mut self) {
        self.instance = None;
    }
}

impl Drop for SinkHandle {
    fn drop(&mut self) {
        if let Some(instance) = self.instance.take() {
            instance.unsubscribe(self.id);
        }
    }
}

// Lock poisoning must not wedge the emit path; a panicked writer leaves the
// list in a consistent state because every mutation is a single push/remove.
fn read_lock<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_lock<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
