//! Canonical severity levels and their mapping to the backend's native ladder.
//!
//! The facade exposes five canonical levels. The backend understands a wider
//! ladder of native severities, so the two directions are asymmetric:
//!
//! - [`to_native`] is total: every canonical level lands on exactly one
//!   native severity.
//! - [`from_native`] is defined only over the severities the facade itself
//!   emits. Two adjacent fine-grained tiers collapse to [`LogLevel::Debug`]
//!   and two finest-grained tiers collapse to [`LogLevel::Trace`]; this
//!   compression is intentional - the canonical space is coarser than the
//!   native space. Anything outside the known set is a configuration bug and
//!   fails with [`LevelMapError::UnsupportedLevel`] rather than defaulting.

use std::fmt;
use thiserror::Error;

/// Canonical log level for the facade.
///
/// Ordering follows severity: `Trace < Debug < Info < Warning < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    /// Verbose debugging information
    Trace,
    /// Debugging information
    Debug,
    /// General information
    Info,
    /// Warning messages
    Warning,
    /// Error messages
    Error,
}

/// Backend-native severity ladder.
///
/// Only the mapping functions in this module interpret these values; the
/// rest of the crate treats them as opaque. Each tier carries a numeric
/// weight used for threshold comparison - higher weight means more severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeSeverity {
    /// Threshold-only tier that suppresses all output. Never emitted.
    Off,
    /// Most severe tier.
    Severe,
    Warning,
    Info,
    /// Configuration messages. Not used by the facade.
    Config,
    /// Fine-grained debugging.
    Fine,
    /// Finer-grained debugging.
    Finer,
    /// Finest-grained debugging.
    Finest,
    /// Threshold-only tier that admits everything.
    All,
}

impl NativeSeverity {
    /// Numeric weight for threshold comparison. Higher is more severe.
    pub fn weight(self) -> i32 {
        match self {
            NativeSeverity::Off => i32::MAX,
            NativeSeverity::Severe => 1000,
            NativeSeverity::Warning => 900,
            NativeSeverity::Info => 800,
            NativeSeverity::Config => 700,
            NativeSeverity::Fine => 500,
            NativeSeverity::Finer => 400,
            NativeSeverity::Finest => 300,
            NativeSeverity::All => i32::MIN,
        }
    }
}

impl fmt::Display for NativeSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NativeSeverity::Off => "OFF",
            NativeSeverity::Severe => "SEVERE",
            NativeSeverity::Warning => "WARNING",
            NativeSeverity::Info => "INFO",
            NativeSeverity::Config => "CONFIG",
            NativeSeverity::Fine => "FINE",
            NativeSeverity::Finer => "FINER",
            NativeSeverity::Finest => "FINEST",
            NativeSeverity::All => "ALL",
        };
        f.write_str(name)
    }
}

/// Errors from the level mapping functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LevelMapError {
    /// Native severity has no canonical counterpart.
    #[error("native severity '{0}' is not supported by the facade")]
    UnsupportedLevel(NativeSeverity),
}

/// Map a canonical level to the native severity the backend understands.
///
/// Total and pure; every canonical level has exactly one native tier.
pub fn to_native(level: LogLevel) -> NativeSeverity {
    match level {
        LogLevel::Error => NativeSeverity::Severe,
        LogLevel::Warning => NativeSeverity::Warning,
        LogLevel::Info => NativeSeverity::Info,
        LogLevel::Debug => NativeSeverity::Fine,
        LogLevel::Trace => NativeSeverity::Finest,
    }
}

/// Map a native severity back to its canonical level.
///
/// `Fine` and `Finer` both collapse to [`LogLevel::Debug`]; `Finest` and
/// `All` both collapse to [`LogLevel::Trace`]. The collapse is deliberate
/// policy, not data loss the caller needs to worry about: round-tripping any
/// canonical level through [`to_native`] is lossless.
///
/// # Errors
///
/// Returns [`LevelMapError::UnsupportedLevel`] for `Off` and `Config`, the
/// tiers the facade never emits. This surfaces a configuration bug
/// immediately instead of silently mis-categorizing severity.
pub fn from_native(severity: NativeSeverity) -> Result<LogLevel, LevelMapError> {
    match severity {
        NativeSeverity::Severe => Ok(LogLevel::Error),
        NativeSeverity::Warning => Ok(LogLevel::Warning),
        NativeSeverity::Info => Ok(LogLevel::Info),
        NativeSeverity::Fine | NativeSeverity::Finer => Ok(LogLevel::Debug),
        NativeSeverity::Finest | NativeSeverity::All => Ok(LogLevel::Trace),
        NativeSeverity::Off | NativeSeverity::Config => {
            Err(LevelMapError::UnsupportedLevel(severity))
        }
    }
}
