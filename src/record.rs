//! Log records and call-site arguments.
//!
//! A [`LogRecord`] is the ephemeral value that travels from an adapter to
//! the sinks registered on a backend instance. Arguments are rendered to
//! strings at the call site so the record owns everything it carries and
//! sinks never borrow from the caller's stack.

use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;

use crate::level::NativeSeverity;

/// A substitution argument passed to an adapter method.
///
/// A trailing [`LogArg::Error`] is treated as the record's exception and is
/// excluded from placeholder substitution; an error anywhere else in the
/// argument list is rendered like any other display value.
pub enum LogArg<'a> {
    /// Ordinary value substituted into the message template.
    Display(&'a dyn fmt::Display),
    /// An error value. In trailing position it becomes the record's
    /// exception instead of a substitution argument.
    Error(&'a (dyn Error + 'static)),
}

impl<'a> LogArg<'a> {
    /// Wrap a display value.
    pub fn display(value: &'a dyn fmt::Display) -> Self {
        LogArg::Display(value)
    }

    /// Wrap an error value.
    pub fn error(err: &'a (dyn Error + 'static)) -> Self {
        LogArg::Error(err)
    }
}

/// Build a `&[LogArg]` slice from display expressions.
///
/// # Example
///
/// ```
/// use logbridge::log_args;
///
/// let port = 8080;
/// let args = log_args![port, "background"];
/// assert_eq!(args.len(), 2);
/// ```
#[macro_export]
macro_rules! log_args {
    ($($arg:expr),* $(,)?) => {
        &[$($crate::LogArg::Display(&$arg)),*]
    };
}

/// Exception detail captured from an error at the call site.
///
/// Holds the top-level message and the rendered source chain - the facade's
/// analogue of a stack trace. Identifying text of the exception appears only
/// here, never in the plain message, so formatted output can exclude it
/// entirely when the dump flag is off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionInfo {
    message: String,
    chain: Vec<String>,
}

impl ExceptionInfo {
    /// Capture an error's message and its full source chain.
    pub fn from_error(err: &(dyn Error + 'static)) -> Self {
        let message = err.to_string();
        let mut chain = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            chain.push(cause.to_string());
            source = cause.source();
        }
        ExceptionInfo { message, chain }
    }

    /// Top-level error message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the exception for embedding in full output: the message
    /// followed by each cause on its own `caused by:` line.
    pub fn detail(&self) -> String {
        let mut out = format!("error: {}", self.message);
        for cause in &self.chain {
            out.push_str("\ncaused by: ");
            out.push_str(cause);
        }
        out
    }
}

/// One emitted log record.
///
/// Produced per call on the adapter's emit path and consumed once by each
/// registered sink. The timestamp is assigned at construction.
#[derive(Debug, Clone)]
pub struct LogRecord {
    severity: NativeSeverity,
    logger: String,
    template: String,
    args: Vec<String>,
    exception: Option<ExceptionInfo>,
    timestamp: DateTime<Utc>,
}

impl LogRecord {
    /// Create a record with the current time as its timestamp.
    pub fn new(
        severity: NativeSeverity,
        logger: impl Into<String>,
        template: impl Into<String>,
        args: Vec<String>,
        exception: Option<ExceptionInfo>,
    ) -> Self {
        LogRecord {
            severity,
            logger: logger.into(),
            template: template.into(),
            args,
            exception,
            timestamp: Utc::now(),
        }
    }

    /// Native severity the record was emitted at.
    pub fn severity(&self) -> NativeSeverity {
        self.severity
    }

    /// Name of the emitting logger instance.
    pub fn logger(&self) -> &str {
        &self.logger
    }

    /// Raw message template with unsubstituted placeholders.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Rendered substitution arguments, in order.
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Exception attached to the record, if any.
    pub fn exception(&self) -> Option<&ExceptionInfo> {
        self.exception.as_ref()
    }

    /// Time the record was constructed on the emit path.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct ChainedError {
        message: &'static str,
        cause: Option<Box<ChainedError>>,
    }

    impl fmt::Display for ChainedError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl Error for ChainedError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
        }
    }

    #[test]
    fn test_exception_info_captures_message() {
        let err = io::Error::new(io::ErrorKind::Other, "disk full");
        let info = ExceptionInfo::from_error(&err);
        assert_eq!(info.message(), "disk full");
        assert_eq!(info.detail(), "error: disk full");
    }

    #[test]
    fn test_exception_detail_includes_source_chain() {
        let err = ChainedError {
            message: "request failed",
            cause: Some(Box::new(ChainedError {
                message: "socket closed",
                cause: None,
            })),
        };
        let info = ExceptionInfo::from_error(&err);
        let detail = info.detail();
        assert_eq!(detail, "error: request failed\ncaused by: socket closed");
    }

    #[test]
    fn test_record_owns_rendered_args() {
        let record = LogRecord::new(
            NativeSeverity::Info,
            "test.logger",
            "value is {0}",
            vec!["42".to_string()],
            None,
        );
        assert_eq!(record.args(), &["42".to_string()]);
        assert_eq!(record.template(), "value is {0}");
        assert_eq!(record.logger(), "test.logger");
        assert!(record.exception().is_none());
    }

    #[test]
    fn test_log_args_macro_builds_display_slice() {
        let count = 3;
        let args = log_args![count, "ready"];
        assert_eq!(args.len(), 2);
        assert!(matches!(args[0], LogArg::Display(_)));
    }
}
