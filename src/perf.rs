//! Performance instrumentation for the interaction hot paths.
//!
//! Pointer moves arrive at display rate during a drag, and every move runs a
//! snap plus a host callback. This module provides:
//!
//! - **Scoped timers**: RAII-style timing that warns when a block is slow
//! - **Input timings**: moving average and slow-event counts per event kind
//! - **Conditional compilation**: `profile_scope!` is zero-cost unless the
//!   `profiling` feature is enabled
//!
//! ```ignore
//! fn handle_pointer_move() {
//!     profile_scope!("handle_pointer_move");
//!     // ...
//! }
//! ```

use crate::constants::SLOW_INPUT_MS;
use std::collections::VecDeque;
use std::time::Instant;
#[cfg(not(feature = "profiling"))]
use tracing::warn;
#[cfg(feature = "profiling")]
use tracing::trace;

/// Samples kept for the moving average
const RECENT_SAMPLE_COUNT: usize = 64;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
    ($name:expr, $threshold_ms:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::new($name, $threshold_ms);
        #[cfg(not(feature = "profiling"))]
        let _ = ($name, $threshold_ms);
    };
}

pub use crate::profile_scope;

/// Timing of one kind of input event (pointer moves, in practice).
///
/// Keeps the most recent samples for a moving average, plus lifetime counts
/// of all events and of those over the slow threshold.
#[derive(Debug, Clone)]
pub struct InputTimings {
    threshold_ms: f64,
    recent: VecDeque<f64>,
    total: u64,
    slow: u64,
    worst_ms: f64,
}

impl Default for InputTimings {
    fn default() -> Self {
        Self::new(SLOW_INPUT_MS)
    }
}

impl InputTimings {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            threshold_ms,
            recent: VecDeque::with_capacity(RECENT_SAMPLE_COUNT),
            total: 0,
            slow: 0,
            worst_ms: 0.0,
        }
    }

    /// Add a sample. Returns true if it was over the slow threshold.
    pub fn record(&mut self, ms: f64) -> bool {
        if self.recent.len() == RECENT_SAMPLE_COUNT {
            self.recent.pop_front();
        }
        self.recent.push_back(ms);
        self.total += 1;
        self.worst_ms = self.worst_ms.max(ms);

        let slow = ms > self.threshold_ms;
        if slow {
            self.slow += 1;
        }
        slow
    }

    /// Mean of the recent samples.
    pub fn average(&self) -> f64 {
        if self.recent.is_empty() {
            return 0.0;
        }
        self.recent.iter().sum::<f64>() / self.recent.len() as f64
    }

    pub fn count(&self) -> u64 {
        self.total
    }

    pub fn slow_count(&self) -> u64 {
        self.slow
    }

    pub fn worst_ms(&self) -> f64 {
        self.worst_ms
    }

    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }
}

/// Times a scope and reports it on drop if it exceeded the threshold.
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

    /// Timer that traces every scope regardless of duration.
    #[cfg(feature = "profiling")]
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, 0.0)
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();

        #[cfg(feature = "profiling")]
        {
            if elapsed_ms >= self.threshold_ms {
                trace!("[PERF] {}: {:.3}ms", self.name, elapsed_ms);
            }
        }

        #[cfg(not(feature = "profiling"))]
        {
            if elapsed_ms > self.threshold_ms {
                warn!(
                    operation = self.name,
                    elapsed_ms = format!("{:.2}", elapsed_ms),
                    threshold_ms = format!("{:.2}", self.threshold_ms),
                    "Slow operation"
                );
            }
        }
    }
}

/// Measure execution time of a closure and return both the result and elapsed time.
#[inline]
pub fn measure<T, F: FnOnce() -> T>(f: F) -> (T, f64) {
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, elapsed_ms)
}
