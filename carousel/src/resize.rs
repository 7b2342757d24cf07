use crate::Viewport;

/// Trailing-edge debouncer for viewport measurements.
///
/// Every resize event replaces the pending measurement and pushes the deadline out; the
/// measurement is released only after `delay_ms` without further events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<Viewport>,
    deadline_ms: u64,
}

impl ResizeDebouncer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
            deadline_ms: 0,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn push(&mut self, viewport: Viewport, now_ms: u64) {
        self.pending = Some(viewport);
        self.deadline_ms = now_ms.saturating_add(self.delay_ms);
    }

    /// Releases the pending measurement once the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> Option<Viewport> {
        if self.pending.is_some() && now_ms >= self.deadline_ms {
            return self.pending.take();
        }
        None
    }

    /// Releases the pending measurement regardless of the deadline.
    pub fn flush(&mut self) -> Option<Viewport> {
        self.pending.take()
    }
}
