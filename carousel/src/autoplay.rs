/// A single recurring timer, driven by host time.
///
/// The scheduler owns at most one deadline. Adapters call [`Autoplay::poll`] from their timer or
/// frame callback; it reports whether a tick is due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Autoplay {
    interval_ms: u64,
    next_due_ms: Option<u64>,
}

impl Autoplay {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn is_running(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn next_due_ms(&self) -> Option<u64> {
        self.next_due_ms
    }

    /// Arms the timer one interval after `now_ms`, replacing any running deadline.
    pub fn start(&mut self, now_ms: u64) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
    }

    /// Cancels the timer. Returns whether one was running.
    pub fn stop(&mut self) -> bool {
        self.next_due_ms.take().is_some()
    }

    /// Returns `true` when a tick is due at `now_ms`.
    ///
    /// Missed intervals collapse into a single tick; the next deadline stays on the original
    /// phase (the first multiple of the interval after `now_ms`).
    pub fn poll(&mut self, now_ms: u64) -> bool {
        let Some(due) = self.next_due_ms else {
            return false;
        };
        if now_ms < due {
            return false;
        }
        let missed = (now_ms - due) / self.interval_ms;
        let advance = self.interval_ms.saturating_mul(missed.saturating_add(1));
        self.next_due_ms = Some(due.saturating_add(advance));
        true
    }
}
