//! Interaction-path timing.
//!
//! Pointer-move handling runs 60+ times per second during a drag, so
//! the event entry points carry zero-cost scope timers. Enable the
//! `profiling` feature to compile them in:
//!
//! ```toml
//! [dependencies]
//! gridstudio = { features = ["profiling"] }
//! ```

use std::time::Instant;
#[cfg(feature = "profiling")]
use tracing::trace;
#[cfg(not(feature = "profiling"))]
use tracing::warn;

/// Event handlers should finish well inside one frame.
pub const TARGET_EVENT_MS: f64 = 4.0;

/// Profile a scope with the given name. Zero-cost when profiling is
/// disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

pub use profile_scope;

/// RAII timer that reports its scope's duration on drop.
///
/// With `profiling` enabled every scope over its threshold is traced;
/// without it, only pathologically slow scopes are warned about.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the 1ms profiling threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 1.0)
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        if elapsed_ms > self.threshold_ms {
            trace!("[PERF] {}: {:.2}ms", self.name, elapsed_ms);
        }

        #[cfg(not(feature = "profiling"))]
        if elapsed_ms > self.threshold_ms.max(TARGET_EVENT_MS) {
            warn!(
                operation = self.name,
                elapsed_ms = format!("{:.2}", elapsed_ms),
                "slow event handler"
            );
        }
    }
}
