//! Record formatting.
//!
//! [`RecordFormatter`] turns a [`LogRecord`] into text two ways:
//!
//! - [`plain_message`](RecordFormatter::plain_message): the template with
//!   positional placeholders substituted, never any exception detail.
//! - [`format`](RecordFormatter::format): a full line with timestamp, native
//!   severity, and logger name, plus - only when the dump flag reads true at
//!   that moment - the attached exception's detail on following lines. When
//!   the flag is off the exception is fully absent, not truncated, so a
//!   substring search for its message must fail.
//!
//! Formatting must never crash the emitting call site: a placeholder with no
//! matching argument stays verbatim in the output.

use crate::dump::DumpFlag;
use crate::record::LogRecord;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Formatter for log records.
///
/// Stateless aside from the [`DumpFlag`] handle it reads on every call.
/// The default formatter reads the process-wide global flag.
#[derive(Debug, Clone, Default)]
pub struct RecordFormatter {
    dump: DumpFlag,
}

impl RecordFormatter {
    /// Formatter that reads the global dump flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter that reads the given flag handle instead of the global.
    pub fn with_flag(dump: DumpFlag) -> Self {
        RecordFormatter { dump }
    }

    /// Substitute positional `{0}`-style placeholders from the record's
    /// arguments. Exception detail is never included here.
    ///
    /// Fail-soft: a placeholder whose index has no argument, or any brace
    /// sequence that is not a well-formed index, is emitted verbatim.
    pub fn plain_message(&self, record: &LogRecord) -> String {
        substitute(record.template(), record.args())
    }

    /// Plain message plus, when the dump flag is on, the exception detail.
    ///
    /// This is the body shared by [`format`](Self::format) and by sinks that
    /// add their own line prefix (timestamps, colors).
    pub fn message_with_exception(&self, record: &LogRecord) -> String {
        let mut out = self.plain_message(record);
        if let Some(exception) = record.exception() {
            // Flag read fresh per call; toggling it between two log calls
            // changes the very next output.
            if self.dump.enabled() {
                out.push('\n');
                out.push_str(&exception.detail());
            }
        }
        out
    }

    /// Full formatted line: `timestamp SEVERITY logger: message`, with
    /// exception detail appended when the dump flag is on.
    pub fn format(&self, record: &LogRecord) -> String {
        format!(
            "{} {} {}: {}",
            record.timestamp().format(TIMESTAMP_FORMAT),
            record.severity(),
            record.logger(),
            self.message_with_exception(record)
        )
    }
}

/// Positional placeholder substitution.
///
/// Scans for `{N}` where `N` is a decimal index into `args`. Anything else
/// - unmatched braces, non-numeric contents, out-of-range indices - passes
/// through unchanged.
fn substitute(template: &str, args: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after_open = &rest[open..];
        match parse_placeholder(after_open) {
            Some((index, consumed)) if index < args.len() => {
                out.push_str(&args[index]);
                rest = &after_open[consumed..];
            }
            Some((_, consumed)) => {
                // Index out of range: leave the placeholder verbatim.
                out.push_str(&after_open[..consumed]);
                rest = &after_open[consumed..];
            }
            None => {
                out.push('{');
                rest = &after_open[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse a `{N}` placeholder at the start of `input`.
///
/// Returns the index and the byte length consumed, or `None` if the braces
/// do not enclose a plain decimal index.
fn parse_placeholder(input: &str) -> Option<(usize, usize)> {
    let close = input.find('}')?;
    if close < 2 {
        return None;
    }
    let digits = &input[1..close];
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = digits.parse().ok()?;
    Some((index, close + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::DumpFlag;
    use crate::level::NativeSeverity;
    use crate::record::{ExceptionInfo, LogRecord};
    use std::io;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    fn record(template: &str, args: Vec<String>) -> LogRecord {
        LogRecord::new(NativeSeverity::Info, "fmt.test", template, args, None)
    }

    fn record_with_exception(message: &str) -> LogRecord {
        let err = io::Error::new(io::ErrorKind::Other, message);
        LogRecord::new(
            NativeSeverity::Fine,
            "fmt.test",
            "no stack",
            Vec::new(),
            Some(ExceptionInfo::from_error(&err)),
        )
    }

    #[test]
    fn test_substitutes_positional_placeholders() {
        let formatter = RecordFormatter::new();
        let record = record(
            "connected to {0} on port {1}",
            vec!["localhost".to_string(), "8080".to_string()],
        );
        assert_eq!(
            formatter.plain_message(&record),
            "connected to localhost on port 8080"
        );
    }

    #[test]
    fn test_repeated_and_reordered_placeholders() {
        let formatter = RecordFormatter::new();
        let record = record("{1} then {0} then {1}", vec!["a".to_string(), "b".to_string()]);
        assert_eq!(formatter.plain_message(&record), "b then a then b");
    }

    #[test]
    fn test_missing_argument_leaves_placeholder_verbatim() {
        let formatter = RecordFormatter::new();
        let record = record("have {0} but not {1}", vec!["this".to_string()]);
        assert_eq!(formatter.plain_message(&record), "have this but not {1}");
    }

    #[test]
    fn test_malformed_braces_pass_through() {
        let formatter = RecordFormatter::new();
        let record = record("empty {} named {name} open { end", vec!["x".to_string()]);
        assert_eq!(
            formatter.plain_message(&record),
            "empty {} named {name} open { end"
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let formatter = RecordFormatter::new();
        let record = record("just {0}", vec!["one".to_string(), "two".to_string()]);
        assert_eq!(formatter.plain_message(&record), "just one");
    }

    #[test]
    fn test_plain_message_never_includes_exception() {
        let cell = Arc::new(AtomicBool::new(true));
        let formatter = RecordFormatter::with_flag(DumpFlag::shared(cell));
        let record = record_with_exception("FakeExceptionInStack");
        assert!(
            !formatter.plain_message(&record).contains("FakeExceptionInStack"),
            "plain message must exclude exception text even with the flag on"
        );
    }

    #[test]
    fn test_full_output_excludes_exception_when_flag_off() {
        let cell = Arc::new(AtomicBool::new(false));
        let formatter = RecordFormatter::with_flag(DumpFlag::shared(cell));
        let record = record_with_exception("FakeExceptionInStack");
        let output = formatter.format(&record);
        assert!(
            !output.contains("FakeExceptionInStack"),
            "flag off: output must contain no exception text, got: {output}"
        );
    }

    #[test]
    fn test_full_output_includes_exception_when_flag_on() {
        let cell = Arc::new(AtomicBool::new(true));
        let formatter = RecordFormatter::with_flag(DumpFlag::shared(cell));
        let record = record_with_exception("FakeExceptionInStack");
        let output = formatter.format(&record);
        assert!(
            output.contains("FakeExceptionInStack"),
            "flag on: output must contain the exception text, got: {output}"
        );
    }

    #[test]
    fn test_flag_is_read_fresh_on_every_format_call() {
        let cell = Arc::new(AtomicBool::new(false));
        let formatter = RecordFormatter::with_flag(DumpFlag::shared(cell.clone()));
        let record = record_with_exception("FakeExceptionInStack");

        assert!(!formatter.format(&record).contains("FakeExceptionInStack"));
        cell.store(true, Ordering::Relaxed);
        assert!(
            formatter.format(&record).contains("FakeExceptionInStack"),
            "toggle must take effect on the very next call"
        );
    }

    #[test]
    fn test_full_line_carries_severity_and_logger_name() {
        let formatter = RecordFormatter::new();
        let record = record("ready", Vec::new());
        let output = formatter.format(&record);
        assert!(output.contains("INFO"), "output: {output}");
        assert!(output.contains("fmt.test:"), "output: {output}");
        assert!(output.ends_with("ready"), "output: {output}");
    }
}
