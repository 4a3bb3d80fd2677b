//! The process-wide stack-trace dump flag.
//!
//! The flag controls whether formatted output embeds exception detail. It is
//! read fresh on every format call - toggling it between two log calls on
//! the same logger changes the very next output, no re-creation required.
//!
//! The global flag is seeded once from the `LOGBRIDGE_DUMP_STACKTRACE`
//! environment variable (absent means off) and can be set or cleared at any
//! time. Formatters hold a [`DumpFlag`] handle rather than touching the
//! global directly, so tests can inject a private flag instead of mutating
//! process-wide state. Tests that do mutate the global should use
//! [`DumpGuard`] to restore the prior value on every exit path.

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

/// Environment variable that seeds the global flag at first use.
pub const DUMP_STACKTRACE_ENV: &str = "LOGBRIDGE_DUMP_STACKTRACE";

static GLOBAL_FLAG: OnceLock<AtomicBool> = OnceLock::new();

fn global_cell() -> &'static AtomicBool {
    GLOBAL_FLAG.get_or_init(|| {
        let seeded = env::var(DUMP_STACKTRACE_ENV)
            .map(|value| {
                let value = value.trim();
                value.eq_ignore_ascii_case("true") || value == "1"
            })
            .unwrap_or(false);
        AtomicBool::new(seeded)
    })
}

/// Turn the global flag on or off.
pub fn set_global(enabled: bool) {
    global_cell().store(enabled, Ordering::Relaxed);
}

/// Turn the global flag off.
pub fn clear_global() {
    set_global(false);
}

/// Current value of the global flag.
pub fn global_enabled() -> bool {
    global_cell().load(Ordering::Relaxed)
}

/// Handle through which a formatter reads the dump flag.
///
/// Either the process-wide global or a caller-owned shared flag; the latter
/// lets tests exercise both flag states without cross-test leakage.
#[derive(Debug, Clone, Default)]
pub struct DumpFlag(FlagSource);

#[derive(Debug, Clone, Default)]
enum FlagSource {
    #[default]
    Global,
    Shared(Arc<AtomicBool>),
}

impl DumpFlag {
    /// Handle to the process-wide global flag.
    pub fn global() -> Self {
        DumpFlag(FlagSource::Global)
    }

    /// Handle to a caller-owned flag.
    pub fn shared(flag: Arc<AtomicBool>) -> Self {
        DumpFlag(FlagSource::Shared(flag))
    }

    /// Read the current value. Never cached; every call re-reads.
    pub fn enabled(&self) -> bool {
        match &self.0 {
            FlagSource::Global => global_enabled(),
            FlagSource::Shared(flag) => flag.load(Ordering::Relaxed),
        }
    }

    /// Write a new value through the handle.
    pub fn set(&self, enabled: bool) {
        match &self.0 {
            FlagSource::Global => set_global(enabled),
            FlagSource::Shared(flag) => flag.store(enabled, Ordering::Relaxed),
        }
    }
}

/// Scoped flag override that restores the prior value on drop.
///
/// # Example
///
/// ```
/// use logbridge::dump::{DumpFlag, DumpGuard};
///
/// let flag = DumpFlag::global();
/// {
///     let _guard = DumpGuard::set(flag.clone(), true);
///     assert!(flag.enabled());
/// }
/// // prior value restored here, even if the scope panicked
/// ```
pub struct DumpGuard {
    flag: DumpFlag,
    prior: bool,
}

impl DumpGuard {
    /// Set the flag to `enabled`, remembering the prior value.
    pub fn set(flag: DumpFlag, enabled: bool) -> Self {
        let prior = flag.enabled();
        flag.set(enabled);
        DumpGuard { flag, prior }
    }
}

impl Drop for DumpGuard {
    fn drop(&mut self) {
        self.flag.set(self.prior);
    }
}
