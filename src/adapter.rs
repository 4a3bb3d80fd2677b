//! The canonical-facing logger adapter.
//!
//! Call sites hold a [`LoggerAdapter`] and log through one method per
//! canonical level. The adapter resolves arguments, maps the canonical level
//! to the backend's native severity, and forwards the record to the named
//! backend instance - synchronously, fire-and-forget. Whether any sink sees
//! the record is the instance's decision (threshold gating), never the
//! adapter's.

use std::sync::Arc;

use crate::backend::{LoggerInstance, Registry};
use crate::level::{to_native, LogLevel};
use crate::record::{ExceptionInfo, LogArg, LogRecord};

/// Named logging handle for application components.
///
/// The name is stable for the adapter's lifetime and selects the backend
/// instance; two adapters constructed with the same name on the same
/// registry share one instance, so sinks registered there observe both.
///
/// # Example
///
/// ```
/// use logbridge::{log_args, LoggerAdapter, Registry};
///
/// let registry = Registry::new();
/// let logger = LoggerAdapter::new("app.startup", &registry);
/// logger.info("listening on port {0}", log_args![8080]);
/// ```
#[derive(Debug, Clone)]
pub struct LoggerAdapter {
    instance: Arc<LoggerInstance>,
}

impl LoggerAdapter {
    /// Adapter for `name`, resolved through the given registry.
    pub fn new(name: &str, registry: &Registry) -> Self {
        LoggerAdapter {
            instance: registry.logger(name),
        }
    }

    /// Adapter for `name` on the process-wide registry.
    pub fn with_global_registry(name: &str) -> Self {
        Self::new(name, Registry::global())
    }

    /// The backend instance this adapter emits through.
    pub fn instance(&self) -> &Arc<LoggerInstance> {
        &self.instance
    }

    /// Name the adapter was constructed with.
    pub fn name(&self) -> &str {
        self.instance.name()
    }

    /// Log at [`LogLevel::Error`].
    pub fn error(&self, template: &str, args: &[LogArg<'_>]) {
        self.log(LogLevel::Error, template, args);
    }

    /// Log at [`LogLevel::Warning`].
    pub fn warn(&self, template: &str, args: &[LogArg<'_>]) {
        self.log(LogLevel::Warning, template, args);
    }

    /// Log at [`LogLevel::Info`].
    pub fn info(&self, template: &str, args: &[LogArg<'_>]) {
        self.log(LogLevel::Info, template, args);
    }

    /// Log at [`LogLevel::Debug`].
    pub fn debug(&self, template: &str, args: &[LogArg<'_>]) {
        self.log(LogLevel::Debug, template, args);
    }

    /// Log at [`LogLevel::Trace`].
    pub fn trace(&self, template: &str, args: &[LogArg<'_>]) {
        self.log(LogLevel::Trace, template, args);
    }

    /// Emit one record at the given canonical level.
    ///
    /// This is the single choke point the five level methods delegate to.
    /// A trailing [`LogArg::Error`] becomes the record's exception and is
    /// excluded from placeholder substitution; errors elsewhere in the list
    /// are rendered like display values. Fire-and-forget: no return value,
    /// no delivery guarantee.
    pub fn log(&self, level: LogLevel, template: &str, args: &[LogArg<'_>]) {
        let (rendered, exception) = resolve_args(args);
        let record = LogRecord::new(
            to_native(level),
            self.instance.name(),
            template,
            rendered,
            exception,
        );
        self.instance.log(record);
    }
}

/// Split a trailing error out of the argument list and render the rest.
fn resolve_args(args: &[LogArg<'_>]) -> (Vec<String>, Option<ExceptionInfo>) {
    let (exception, substitutable) = match args.split_last() {
        Some((LogArg::Error(err), rest)) => (Some(ExceptionInfo::from_error(*err)), rest),
        _ => (None, args),
    };

    let rendered = substitutable
        .iter()
        .map(|arg| match arg {
            LogArg::Display(value) => value.to_string(),
            LogArg::Error(err) => err.to_string(),
        })
        .collect();

    (rendered, exception)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::NativeSeverity;
    use crate::sink::CaptureSink;
    use std::io;

    fn harness(name: &str) -> (Registry, Arc<CaptureSink>) {
        let registry = Registry::new();
        let sink = Arc::new(CaptureSink::new());
        registry.logger(name).subscribe(sink.clone()).detach();
        (registry, sink)
    }

    #[test]
    fn test_each_level_maps_to_its_native_severity() {
        let (registry, sink) = harness("adapter.levels");
        let logger = LoggerAdapter::new("adapter.levels", &registry);
        logger.instance().set_min_severity(NativeSeverity::All);

        sink.clear();
        logger.error("message", &[]);
        assert_eq!(sink.last_severity(), Some(NativeSeverity::Severe));

        sink.clear();
        logger.warn("message", &[]);
        assert_eq!(sink.last_severity(), Some(NativeSeverity::Warning));

        sink.clear();
        logger.info("message", &[]);
        assert_eq!(sink.last_severity(), Some(NativeSeverity::Info));

        sink.clear();
        logger.debug("message", &[]);
        assert_eq!(sink.last_severity(), Some(NativeSeverity::Fine));

        sink.clear();
        logger.trace("message", &[]);
        assert_eq!(sink.last_severity(), Some(NativeSeverity::Finest));
    }

    #[test]
    fn test_arguments_are_substituted() {
        let (registry, sink) = harness("adapter.args");
        let logger = LoggerAdapter::new("adapter.args", &registry);

        logger.info("user {0} from {1}", crate::log_args!["alice", "10.0.0.1"]);
        assert_eq!(
            sink.last_message().as_deref(),
            Some("user alice from 10.0.0.1")
        );
    }

    #[test]
    fn test_trailing_error_becomes_the_exception() {
        let (registry, sink) = harness("adapter.exc");
        let logger = LoggerAdapter::new("adapter.exc", &registry);

        let err = io::Error::new(io::ErrorKind::Other, "boom");
        logger.error(
            "failed for {0}",
            &[LogArg::Display(&"alice"), LogArg::Error(&err)],
        );

        // The error is not a substitution argument.
        assert_eq!(sink.last_message().as_deref(), Some("failed for alice"));
    }

    #[test]
    fn test_non_trailing_error_is_rendered_as_display() {
        let (registry, sink) = harness("adapter.mid_err");
        let logger = LoggerAdapter::new("adapter.mid_err", &registry);

        let err = io::Error::new(io::ErrorKind::Other, "mid boom");
        logger.warn(
            "saw {0} while doing {1}",
            &[LogArg::Error(&err), LogArg::Display(&"cleanup")],
        );
        assert_eq!(
            sink.last_message().as_deref(),
            Some("saw mid boom while doing cleanup")
        );
    }

    #[test]
    fn test_same_name_adapters_share_one_instance() {
        let registry = Registry::new();
        let first = LoggerAdapter::new("adapter.shared", &registry);
        let second = LoggerAdapter::new("adapter.shared", &registry);
        assert!(Arc::ptr_eq(first.instance(), second.instance()));
    }

    #[test]
    fn test_default_threshold_drops_debug() {
        let (registry, sink) = harness("adapter.threshold");
        let logger = LoggerAdapter::new("adapter.threshold", &registry);

        logger.debug("should be dropped", &[]);
        assert!(
            sink.last_message().is_none(),
            "Fine is below the default Info threshold"
        );
    }
}
