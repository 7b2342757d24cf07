use alloc::format;
use alloc::string::{String, ToString};
use alloc::sync::Arc;
use core::cell::Cell;

use crate::autoplay::Autoplay;
use crate::navigation::Navigator;
use crate::pagination::Pagination;
use crate::resize::ResizeDebouncer;
use crate::{CarouselError, CarouselOptions, Frame, Geometry, GotoPolicy, Layout, Viewport};

/// Name of the layout variable carrying the current slides-per-view.
pub const SLIDES_PER_VIEW_VAR: &str = "--slides-per-view";
/// Name of the layout variable carrying the slide gap.
pub const GAP_VAR: &str = "--gap";

/// A headless carousel.
///
/// This type holds no UI objects. It owns the current index, the resolved slides-per-view,
/// indicator state and the autoplay/resize timers; the adapter feeds it events and host time
/// (`now_ms`) and reads back a [`Frame`] to render.
///
/// For a renderer-driving wrapper, see the `carousel-adapter` crate.
#[derive(Clone, Debug)]
pub struct Carousel {
    options: CarouselOptions,
    viewport: Viewport,
    geometry: Geometry,
    nav: Navigator,
    pagination: Pagination,
    autoplay: Autoplay,
    resize: ResizeDebouncer,

    notify_depth: Cell<usize>,
    notify_pending: Cell<bool>,
}

impl Carousel {
    /// Creates a carousel for the given viewport.
    ///
    /// Slides-per-view is resolved from `viewport.width` before anything is laid out; the
    /// configured value is used when no breakpoint matches. Autoplay, when enabled, is armed at
    /// `now_ms`.
    pub fn new(
        options: CarouselOptions,
        viewport: Viewport,
        now_ms: u64,
    ) -> Result<Self, CarouselError> {
        if options.slides_per_view == 0 {
            return Err(CarouselError::InvalidSlidesPerView(0));
        }
        if options.autoplay && options.autoplay_interval_ms == 0 {
            return Err(CarouselError::InvalidAutoplayInterval);
        }

        let slides_per_view = options
            .breakpoints
            .resolve_or(viewport.width, options.slides_per_view);
        let geometry = Geometry::new(viewport.container_width, options.gap, slides_per_view)?;
        let nav = Navigator::new(
            options.total_slides,
            slides_per_view,
            options.loop_navigation,
        );
        cdebug!(
            total_slides = options.total_slides,
            slides_per_view,
            viewport_width = viewport.width,
            container_width = viewport.container_width,
            "Carousel::new"
        );

        let mut c = Self {
            viewport,
            geometry,
            pagination: Pagination::new(options.total_slides, slides_per_view, nav.current()),
            nav,
            autoplay: Autoplay::new(options.autoplay_interval_ms),
            resize: ResizeDebouncer::new(options.resize_debounce_ms),
            options,
            notify_depth: Cell::new(0),
            notify_pending: Cell::new(false),
        };
        if c.options.autoplay {
            c.autoplay.start(now_ms);
        }
        Ok(c)
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn set_on_change(&mut self, on_change: Option<impl Fn(&Carousel) + Send + Sync + 'static>) {
        self.options.on_change = on_change.map(|f| Arc::new(f) as _);
    }

    fn notify_now(&self) {
        if let Some(cb) = &self.options.on_change {
            cb(self);
        }
    }

    fn notify(&self) {
        if self.notify_depth.get() > 0 {
            self.notify_pending.set(true);
            return;
        }
        self.notify_now();
    }

    /// Batches multiple updates into a single `on_change` notification.
    pub fn batch_update(&mut self, f: impl FnOnce(&mut Self)) {
        let depth = self.notify_depth.get();
        self.notify_depth.set(depth.saturating_add(1));

        f(self);

        let depth = self.notify_depth.get();
        debug_assert!(depth > 0, "notify_depth underflow");
        let next = depth.saturating_sub(1);
        self.notify_depth.set(next);

        if next == 0 && self.notify_pending.replace(false) {
            self.notify_now();
        }
    }

    pub fn current_index(&self) -> usize {
        self.nav.current()
    }

    pub fn slides_per_view(&self) -> usize {
        self.nav.slides_per_view()
    }

    pub fn total_slides(&self) -> usize {
        self.nav.total()
    }

    pub fn max_index(&self) -> usize {
        self.nav.max_index()
    }

    pub fn gap(&self) -> u32 {
        self.options.gap
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn dot_count(&self) -> usize {
        self.pagination.count()
    }

    pub fn active_dot(&self) -> Option<usize> {
        self.pagination.active()
    }

    pub fn is_dot_active(&self, dot: usize) -> bool {
        self.pagination.is_active(dot)
    }

    pub fn layout(&self) -> Layout {
        self.geometry.layout(self.nav.current())
    }

    pub fn frame(&self) -> Frame {
        let layout = self.layout();
        Frame {
            current_index: self.nav.current(),
            slides_per_view: self.nav.slides_per_view(),
            gap: self.options.gap,
            slide_width: layout.slide_width,
            offset: layout.offset,
            dot_count: self.pagination.count(),
            active_dot: self.pagination.active(),
        }
    }

    /// Global layout variables for external styling, as `(name, value)` pairs.
    pub fn layout_variables(&self) -> [(&'static str, String); 2] {
        [
            (SLIDES_PER_VIEW_VAR, self.nav.slides_per_view().to_string()),
            (GAP_VAR, format!("{}px", self.options.gap)),
        ]
    }

    fn after_move(&mut self, changed: bool) -> bool {
        if changed {
            self.pagination.sync(self.nav.current());
            self.notify();
        }
        changed
    }

    /// Moves one position forward. Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        let changed = self.nav.next();
        ctrace!(current_index = self.nav.current(), changed, "Carousel::next");
        self.after_move(changed)
    }

    /// Moves one position back. Returns whether the index changed.
    pub fn prev(&mut self) -> bool {
        let changed = self.nav.prev();
        ctrace!(current_index = self.nav.current(), changed, "Carousel::prev");
        self.after_move(changed)
    }

    /// Jumps to a stop position, following [`CarouselOptions::goto_policy`].
    ///
    /// Returns whether the index changed.
    pub fn goto_slide(&mut self, index: usize) -> Result<bool, CarouselError> {
        let changed = match self.nav.goto(index, self.options.goto_policy) {
            Ok(changed) => changed,
            Err(err) => {
                cwarn!(index, dot_count = self.dot_count(), "Carousel::goto_slide rejected");
                return Err(err);
            }
        };
        ctrace!(index, current_index = self.nav.current(), "Carousel::goto_slide");
        Ok(self.after_move(changed))
    }

    /// Applies a new slides-per-view: rebuilds indicators, recomputes geometry and restarts
    /// autoplay (resetting its phase) when autoplay is configured.
    ///
    /// The current index is kept as is, even if it is now past the last stop position.
    pub fn refresh(&mut self, slides_per_view: usize, now_ms: u64) -> Result<(), CarouselError> {
        let geometry = Geometry::new(
            self.geometry.container_width(),
            self.options.gap,
            slides_per_view,
        )?;
        cdebug!(
            from = self.nav.slides_per_view(),
            to = slides_per_view,
            current_index = self.nav.current(),
            "Carousel::refresh"
        );
        self.geometry = geometry;
        self.nav.set_slides_per_view(slides_per_view);
        self.pagination
            .rebuild(self.nav.total(), slides_per_view, self.nav.current());

        self.autoplay.stop();
        if self.options.autoplay {
            self.autoplay.start(now_ms);
        }

        self.notify();
        Ok(())
    }

    /// Updates the collection size, e.g. once the host knows how many slides it has.
    pub fn set_total_slides(&mut self, total_slides: usize) {
        if self.nav.total() == total_slides {
            return;
        }
        let current = self.nav.current();
        self.nav = Navigator::new(
            total_slides,
            self.nav.slides_per_view(),
            self.options.loop_navigation,
        );
        self.nav.goto(current, GotoPolicy::Clamp).ok();
        self.options.total_slides = total_slides;
        self.pagination
            .rebuild(total_slides, self.nav.slides_per_view(), self.nav.current());
        self.notify();
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    /// Starts (or restarts) the autoplay timer at `now_ms`.
    ///
    /// No-op unless [`CarouselOptions::autoplay`] is enabled. Returns whether the timer runs.
    pub fn start_autoplay(&mut self, now_ms: u64) -> bool {
        if !self.options.autoplay {
            return false;
        }
        self.autoplay.start(now_ms);
        true
    }

    /// Cancels the autoplay timer. No-op when it is not running.
    pub fn stop_autoplay(&mut self) -> bool {
        self.autoplay.stop()
    }

    /// Records a viewport resize.
    ///
    /// The measurement is applied after [`CarouselOptions::resize_debounce_ms`] of quiet, on a
    /// later [`Carousel::tick`]. With a zero delay it is applied immediately.
    pub fn on_viewport_resize(&mut self, viewport: Viewport, now_ms: u64) -> bool {
        self.resize.push(viewport, now_ms);
        if self.resize.delay_ms() == 0 {
            return self.flush_resize(now_ms);
        }
        false
    }

    /// Applies a pending resize right away. Returns whether the state changed.
    pub fn flush_resize(&mut self, now_ms: u64) -> bool {
        match self.resize.flush() {
            Some(viewport) => self.apply_viewport(viewport, now_ms),
            None => false,
        }
    }

    pub fn has_pending_resize(&self) -> bool {
        self.resize.is_pending()
    }

    /// Advances host time: applies a settled resize, then fires a due autoplay tick.
    ///
    /// Returns whether the state changed. Notifications are coalesced into one.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        let mut changed = false;
        self.batch_update(|c| {
            if let Some(viewport) = c.resize.poll(now_ms) {
                changed |= c.apply_viewport(viewport, now_ms);
            }
            if c.autoplay.poll(now_ms) {
                changed |= c.next();
            }
        });
        changed
    }

    fn apply_viewport(&mut self, viewport: Viewport, now_ms: u64) -> bool {
        self.viewport.width = viewport.width;

        let mut relayout = false;
        if viewport.container_width != self.viewport.container_width {
            match Geometry::new(
                viewport.container_width,
                self.options.gap,
                self.nav.slides_per_view(),
            ) {
                Ok(geometry) => {
                    self.viewport.container_width = viewport.container_width;
                    self.geometry = geometry;
                    relayout = true;
                }
                Err(_) => {
                    cwarn!(
                        container_width = viewport.container_width,
                        "ignoring unusable container width"
                    );
                }
            }
        }

        let current = self.nav.slides_per_view();
        let resolved = self.options.breakpoints.resolve_or(viewport.width, current);
        if resolved != current {
            // Breakpoint values are validated non-zero.
            return self.refresh(resolved, now_ms).is_ok();
        }
        if relayout {
            self.notify();
        }
        relayout
    }
}
