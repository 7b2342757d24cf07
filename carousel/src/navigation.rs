use crate::CarouselError;

/// How `goto` treats an index with no matching stop position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GotoPolicy {
    /// Return [`CarouselError::IndexOutOfRange`] and leave the index untouched.
    #[default]
    Reject,
    /// Clamp into `0..=max_index`.
    Clamp,
}

/// The index state machine behind prev/next/goto.
///
/// Positions run over `0..=max_index` where `max_index = total - slides_per_view` (saturating).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Navigator {
    current: usize,
    total: usize,
    slides_per_view: usize,
    wrap: bool,
}

impl Navigator {
    pub fn new(total: usize, slides_per_view: usize, wrap: bool) -> Self {
        Self {
            current: 0,
            total,
            slides_per_view,
            wrap,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn slides_per_view(&self) -> usize {
        self.slides_per_view
    }

    pub fn wraps(&self) -> bool {
        self.wrap
    }

    pub fn max_index(&self) -> usize {
        self.total.saturating_sub(self.slides_per_view)
    }

    /// Number of reachable stop positions (never 0).
    pub fn stop_count(&self) -> usize {
        self.max_index() + 1
    }

    /// Changes the window size without moving the index.
    ///
    /// The index may end up past the new `max_index`; the next `prev`/`next` brings it back.
    pub fn set_slides_per_view(&mut self, slides_per_view: usize) {
        self.slides_per_view = slides_per_view;
    }

    /// Advances by one, wrapping to 0 at the end when looping. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        let prev = self.current;
        if self.current >= self.max_index() {
            if !self.wrap {
                return false;
            }
            self.current = 0;
        } else {
            self.current += 1;
        }
        self.current != prev
    }

    /// Steps back by one, wrapping to `max_index` at the start when looping.
    pub fn prev(&mut self) -> bool {
        let before = self.current;
        if self.current == 0 {
            if !self.wrap {
                return false;
            }
            self.current = self.max_index();
        } else {
            self.current -= 1;
        }
        self.current != before
    }

    pub fn goto(&mut self, index: usize, policy: GotoPolicy) -> Result<bool, CarouselError> {
        let max = self.max_index();
        let target = match policy {
            GotoPolicy::Reject if index > max => {
                return Err(CarouselError::IndexOutOfRange {
                    index,
                    dot_count: self.stop_count(),
                });
            }
            GotoPolicy::Reject => index,
            GotoPolicy::Clamp => index.min(max),
        };
        let changed = self.current != target;
        self.current = target;
        Ok(changed)
    }
}
