//! Wall-clock measurement for diagnostics.

use std::time::{Duration, Instant};

/// Measures how long a scoped operation took.
///
/// Started when the operation begins and stopped when it concludes, whether
/// it succeeded or ran out of time. Reading the elapsed time never influences
/// control flow; it only feeds log lines.
#[derive(Debug, Clone, Copy)]
pub struct Timer {
    started: Instant,
    stopped: Option<Duration>,
}

impl Timer {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
            stopped: None,
        }
    }

    /// Freeze the clock and return the measured duration. Later calls return
    /// the value frozen by the first one.
    pub fn stop(&mut self) -> Duration {
        *self.stopped.get_or_insert_with(|| self.started.elapsed())
    }

    /// Frozen duration if stopped, otherwise time elapsed so far.
    pub fn elapsed(&self) -> Duration {
        self.stopped.unwrap_or_else(|| self.started.elapsed())
    }
}
