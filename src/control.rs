//! Cooperative stop signals shared by the runners.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// External cancellation flag plus an optional wall-clock deadline.
///
/// Runners poll this at the top of every step or generation; nothing is
/// interrupted mid-step.
#[derive(Debug, Default)]
pub(crate) struct StopSignal {
    cancel: Option<Arc<AtomicBool>>,
    deadline: Option<Instant>,
}

impl StopSignal {
    pub(crate) fn new(cancel: Option<Arc<AtomicBool>>, time_limit_ms: Option<u64>) -> Self {
        Self {
            cancel,
            deadline: time_limit_ms.map(|ms| Instant::now() + Duration::from_millis(ms)),
        }
    }

    pub(crate) fn should_stop(&self) -> bool {
        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }
}
