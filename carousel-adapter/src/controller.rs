use alloc::vec::Vec;

use carousel::{Carousel, CarouselError, Frame, GAP_VAR, SLIDES_PER_VIEW_VAR, Viewport};

use crate::{Renderer, Subscription};

/// A framework-neutral controller that wraps a [`Carousel`] and keeps a [`Renderer`] in sync.
///
/// Adapters drive it by calling:
/// - `on_prev` / `on_next` / `on_indicator` for control clicks
/// - `on_resize` from the host's resize listener
/// - `tick(now_ms)` from a timer or frame callback (autoplay and resize debouncing)
///
/// After every event the controller compares the new [`Frame`] with the last one it drew and
/// issues only the renderer calls that changed.
///
/// The controller owns the host registrations handed to [`Controller::hold`] and releases them
/// on [`Controller::dispose`] or drop.
#[derive(Debug)]
pub struct Controller<R: Renderer> {
    carousel: Carousel,
    renderer: R,
    rendered: Option<Frame>,
    subscriptions: Vec<Subscription>,
    disposed: bool,
}

impl<R: Renderer> Controller<R> {
    /// Wraps a carousel and draws its first frame.
    pub fn new(carousel: Carousel, renderer: R) -> Self {
        let mut c = Self {
            carousel,
            renderer,
            rendered: None,
            subscriptions: Vec::new(),
            disposed: false,
        };
        c.render();
        c
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// The frame most recently pushed to the renderer.
    pub fn rendered_frame(&self) -> Option<Frame> {
        self.rendered
    }

    /// Takes ownership of a host registration (resize listener, interval timer, ...).
    pub fn hold(&mut self, subscription: Subscription) {
        if self.disposed {
            awarn!("Controller::hold after dispose; releasing immediately");
            drop(subscription);
            return;
        }
        self.subscriptions.push(subscription);
    }

    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Stops autoplay and releases every held subscription. Later events are ignored.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.carousel.stop_autoplay();
        adebug!(
            subscriptions = self.subscriptions.len(),
            "Controller::dispose"
        );
        for mut sub in self.subscriptions.drain(..) {
            sub.cancel();
        }
    }

    pub fn on_prev(&mut self) -> bool {
        self.apply(Carousel::prev)
    }

    pub fn on_next(&mut self) -> bool {
        self.apply(Carousel::next)
    }

    /// Handles a click on the indicator at `index`.
    pub fn on_indicator(&mut self, index: usize) -> Result<bool, CarouselError> {
        if self.disposed {
            return Ok(false);
        }
        let changed = self.carousel.goto_slide(index)?;
        self.render();
        Ok(changed)
    }

    pub fn on_resize(&mut self, viewport: Viewport, now_ms: u64) -> bool {
        self.apply(|c| c.on_viewport_resize(viewport, now_ms))
    }

    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.apply(|c| c.tick(now_ms))
    }

    pub fn refresh(&mut self, slides_per_view: usize, now_ms: u64) -> Result<(), CarouselError> {
        if self.disposed {
            return Ok(());
        }
        self.carousel.refresh(slides_per_view, now_ms)?;
        self.render();
        Ok(())
    }

    pub fn set_total_slides(&mut self, total_slides: usize) {
        self.apply(|c| {
            c.set_total_slides(total_slides);
            true
        });
    }

    pub fn start_autoplay(&mut self, now_ms: u64) -> bool {
        !self.disposed && self.carousel.start_autoplay(now_ms)
    }

    pub fn stop_autoplay(&mut self) -> bool {
        self.carousel.stop_autoplay()
    }

    fn apply(&mut self, f: impl FnOnce(&mut Carousel) -> bool) -> bool {
        if self.disposed {
            return false;
        }
        let changed = f(&mut self.carousel);
        if changed {
            self.render();
        }
        changed
    }

    fn render(&mut self) {
        let frame = self.carousel.frame();
        let prev = self.rendered;

        let [slides_per_view_var, gap_var] = self.carousel.layout_variables();
        if prev.is_none_or(|p| p.slides_per_view != frame.slides_per_view) {
            self.renderer
                .set_layout_variable(SLIDES_PER_VIEW_VAR, &slides_per_view_var.1);
        }
        if prev.is_none() {
            self.renderer.set_layout_variable(GAP_VAR, &gap_var.1);
        }

        let rebuild = prev.is_none_or(|p| {
            p.slides_per_view != frame.slides_per_view || p.dot_count != frame.dot_count
        });
        if rebuild {
            self.renderer.rebuild_indicators(frame.dot_count);
            if let Some(active) = frame.active_dot {
                self.renderer.set_indicator_active(active, true);
            }
        } else if let Some(p) = prev.filter(|p| p.active_dot != frame.active_dot) {
            if let Some(old) = p.active_dot {
                self.renderer.set_indicator_active(old, false);
            }
            if let Some(active) = frame.active_dot {
                self.renderer.set_indicator_active(active, true);
            }
        }

        if prev.is_none_or(|p| p.offset != frame.offset) {
            self.renderer.set_track_offset(frame.offset);
        }

        self.rendered = Some(frame);
    }
}

impl<R: Renderer> Drop for Controller<R> {
    fn drop(&mut self) {
        self.dispose();
    }
}
