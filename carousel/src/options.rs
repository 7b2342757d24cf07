use alloc::sync::Arc;

use crate::carousel::Carousel;
use crate::{Breakpoints, GotoPolicy};

/// A callback fired after the carousel's state changes.
pub type OnChangeCallback = Arc<dyn Fn(&Carousel) + Send + Sync>;

pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 100;

/// Configuration for [`crate::Carousel`].
///
/// Cheap to clone: the change callback is stored in an `Arc`.
#[derive(Clone)]
pub struct CarouselOptions {
    /// Total number of slides in the collection. May exceed the number of slides the host has
    /// rendered so far; geometry only makes sense when the two agree.
    pub total_slides: usize,
    /// Slides visible at once, used until a breakpoint matches.
    pub slides_per_view: usize,
    pub autoplay: bool,
    pub autoplay_interval_ms: u64,
    /// Wrap past the first/last stop position.
    pub loop_navigation: bool,
    /// Space between slides in pixels.
    pub gap: u32,
    pub breakpoints: Breakpoints,
    /// Quiet period before a resize is applied. `0` applies resizes immediately.
    pub resize_debounce_ms: u64,
    pub goto_policy: GotoPolicy,
    pub on_change: Option<OnChangeCallback>,
}

impl CarouselOptions {
    pub fn new(total_slides: usize) -> Self {
        Self {
            total_slides,
            slides_per_view: 1,
            autoplay: false,
            autoplay_interval_ms: DEFAULT_AUTOPLAY_INTERVAL_MS,
            loop_navigation: false,
            gap: 0,
            breakpoints: Breakpoints::new(),
            resize_debounce_ms: DEFAULT_RESIZE_DEBOUNCE_MS,
            goto_policy: GotoPolicy::default(),
            on_change: None,
        }
    }

    pub fn with_slides_per_view(mut self, slides_per_view: usize) -> Self {
        self.slides_per_view = slides_per_view;
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = autoplay;
        self
    }

    pub fn with_autoplay_interval_ms(mut self, interval_ms: u64) -> Self {
        self.autoplay_interval_ms = interval_ms;
        self
    }

    pub fn with_loop(mut self, loop_navigation: bool) -> Self {
        self.loop_navigation = loop_navigation;
        self
    }

    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    pub fn with_resize_debounce_ms(mut self, delay_ms: u64) -> Self {
        self.resize_debounce_ms = delay_ms;
        self
    }

    pub fn with_goto_policy(mut self, goto_policy: GotoPolicy) -> Self {
        self.goto_policy = goto_policy;
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }
}

impl core::fmt::Debug for CarouselOptions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CarouselOptions")
            .field("total_slides", &self.total_slides)
            .field("slides_per_view", &self.slides_per_view)
            .field("autoplay", &self.autoplay)
            .field("autoplay_interval_ms", &self.autoplay_interval_ms)
            .field("loop_navigation", &self.loop_navigation)
            .field("gap", &self.gap)
            .field("breakpoints", &self.breakpoints)
            .field("resize_debounce_ms", &self.resize_debounce_ms)
            .field("goto_policy", &self.goto_policy)
            .finish_non_exhaustive()
    }
}
