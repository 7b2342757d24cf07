use crate::*;

use alloc::string::ToString;
use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicUsize, Ordering};

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        debug_assert!(start < end_exclusive);
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }

    fn gen_bool(&mut self) -> bool {
        (self.next_u64() >> 33) & 1 == 1
    }
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 0.01
}

fn movie_breakpoints() -> Breakpoints {
    Breakpoints::from_pairs([(0, 1), (500, 2), (914, 3)]).unwrap()
}

fn carousel(total: usize, slides_per_view: usize, wrap: bool) -> Carousel {
    Carousel::new(
        CarouselOptions::new(total)
            .with_slides_per_view(slides_per_view)
            .with_loop(wrap),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap()
}

fn counting_options(total: usize, calls: &Arc<AtomicUsize>) -> CarouselOptions {
    CarouselOptions::new(total).with_on_change(Some({
        let calls = Arc::clone(calls);
        move |_: &Carousel| {
            calls.fetch_add(1, Ordering::Relaxed);
        }
    }))
}

#[test]
fn dot_count_matches_formula() {
    for total in 0..12usize {
        for n in 1..6usize {
            let expected = if total + 1 > n { total + 1 - n } else { 1 };
            assert_eq!(dot_count(total, n), expected, "total={total} n={n}");
            assert_eq!(Pagination::new(total, n, 0).count(), expected);
        }
    }
}

#[test]
fn breakpoints_resolve_greatest_qualifying_width() {
    let b = movie_breakpoints();
    assert_eq!(b.resolve(700), Some(2));
    assert_eq!(b.resolve(1000), Some(3));
    assert_eq!(b.resolve(100), Some(1));
    assert_eq!(b.resolve(500), Some(2));
    assert_eq!(b.resolve(913), Some(2));
    assert_eq!(b.resolve(914), Some(3));
}

#[test]
fn breakpoints_ignore_declaration_order() {
    let shuffled = Breakpoints::from_pairs([(914, 3), (0, 1), (500, 2)]).unwrap();
    assert_eq!(shuffled, movie_breakpoints());
    let widths: Vec<u32> = shuffled.iter().map(|r| r.min_width).collect();
    assert_eq!(widths, vec![0, 500, 914]);
    for w in [0u32, 250, 499, 500, 913, 914, 4000] {
        assert_eq!(shuffled.resolve(w), movie_breakpoints().resolve(w));
    }
}

#[test]
fn breakpoints_without_a_match_resolve_to_none() {
    let b = Breakpoints::from_pairs([(500, 2), (914, 3)]).unwrap();
    assert_eq!(b.resolve(499), None);
    assert_eq!(b.resolve_or(499, 4), 4);
    assert_eq!(Breakpoints::new().resolve(1000), None);
}

#[test]
fn breakpoint_insert_replaces_and_rejects_zero() {
    let mut b = movie_breakpoints();
    b.insert(500, 4).unwrap();
    assert_eq!(b.len(), 3);
    assert_eq!(b.resolve(600), Some(4));

    assert_eq!(
        b.insert(1200, 0),
        Err(CarouselError::InvalidBreakpoint {
            min_width: 1200,
            slides_per_view: 0
        })
    );
    assert_eq!(b.len(), 3);

    assert_eq!(b.remove(500), Some(4));
    assert_eq!(b.remove(500), None);
    assert_eq!(b.resolve(600), Some(1));
}

#[test]
fn geometry_matches_reference_layout() {
    let g = Geometry::new(620, 20, 3).unwrap();
    assert!(approx(g.slide_width(), 193.33));
    assert!(approx(g.offset(1), -213.33));
    assert_eq!(g.offset(0), 0.0);

    // Each step moves by one slide plus one gap.
    let step = g.offset(1) - g.offset(2);
    assert!(approx(step, g.slide_width() + 20.0));
}

#[test]
fn geometry_rejects_degenerate_inputs() {
    assert_eq!(
        Geometry::new(620, 20, 0),
        Err(CarouselError::InvalidSlidesPerView(0))
    );
    assert_eq!(
        Geometry::new(0, 20, 3),
        Err(CarouselError::InvalidContainerWidth(0))
    );
}

#[test]
fn layout_formats_css_transform() {
    let layout = Geometry::new(300, 0, 3).unwrap().layout(2);
    assert_eq!(layout.slide_width, 100.0);
    assert_eq!(layout.css_translate_x(), "translateX(-200px)");
}

#[test]
fn parse_px_length_accepts_whole_pixels() {
    assert_eq!(parse_px_length("27px"), Ok(27));
    assert_eq!(parse_px_length(" 27 "), Ok(27));
    assert_eq!(parse_px_length("0px"), Ok(0));
    for bad in ["", "px", "27.5px", "-1px", "2em", "twelve"] {
        assert_eq!(
            parse_px_length(bad),
            Err(CarouselError::InvalidLength(bad.to_string())),
            "{bad:?}"
        );
    }
}

#[test]
fn loop_wraps_at_both_ends() {
    let mut c = carousel(5, 3, true);
    assert_eq!(c.max_index(), 2);

    assert!(c.prev());
    assert_eq!(c.current_index(), 2);
    assert!(c.next());
    assert_eq!(c.current_index(), 0);
}

#[test]
fn clamped_navigation_is_a_no_op_at_the_ends() {
    let mut c = carousel(5, 3, false);
    assert!(!c.prev());
    assert_eq!(c.current_index(), 0);

    assert!(c.next());
    assert!(c.next());
    assert_eq!(c.current_index(), 2);
    assert!(!c.next());
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.active_dot(), Some(2));
}

#[test]
fn property_clamped_navigation_stays_in_range() {
    let mut rng = Lcg::new(0x5eed);
    for _ in 0..200 {
        let total = rng.gen_range_usize(0, 30);
        let n = rng.gen_range_usize(1, 8);
        let mut c = carousel(total, n, false);
        let max = total.saturating_sub(n);
        for _ in 0..50 {
            if rng.gen_bool() {
                c.next();
            } else {
                c.prev();
            }
            assert!(c.current_index() <= max);
            assert_eq!(c.active_dot(), Some(c.current_index()));
            assert_eq!(c.dot_count(), max + 1);
        }
    }
}

#[test]
fn three_nexts_cycle_back_to_start() {
    let mut c = carousel(5, 3, true);
    assert_eq!(c.dot_count(), 3);
    for expected in [1, 2, 0] {
        assert!(c.next());
        assert_eq!(c.current_index(), expected);
        assert_eq!(c.active_dot(), Some(expected));
    }
}

#[test]
fn fewer_slides_than_view_is_a_single_static_window() {
    let mut c = carousel(2, 3, true);
    assert_eq!(c.max_index(), 0);
    assert_eq!(c.dot_count(), 1);
    assert_eq!(c.active_dot(), Some(0));
    assert!(!c.next());
    assert!(!c.prev());
    assert_eq!(c.layout().offset, 0.0);

    let empty = carousel(0, 1, false);
    assert_eq!(empty.dot_count(), 1);
}

#[test]
fn goto_rejects_out_of_range_by_default() {
    let mut c = carousel(5, 3, false);
    assert_eq!(c.goto_slide(2), Ok(true));
    assert_eq!(c.goto_slide(2), Ok(false));
    assert_eq!(
        c.goto_slide(3),
        Err(CarouselError::IndexOutOfRange {
            index: 3,
            dot_count: 3
        })
    );
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.active_dot(), Some(2));
}

#[test]
fn goto_clamp_policy_pins_to_last_stop() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_slides_per_view(3)
            .with_goto_policy(GotoPolicy::Clamp),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();
    assert_eq!(c.goto_slide(40), Ok(true));
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.active_dot(), Some(2));
}

#[test]
fn construction_resolves_breakpoints_before_first_layout() {
    let opts = CarouselOptions::new(10)
        .with_slides_per_view(3)
        .with_gap(27)
        .with_breakpoints(movie_breakpoints());

    let narrow = Carousel::new(opts.clone(), Viewport::new(400, 380), 0).unwrap();
    assert_eq!(narrow.slides_per_view(), 1);
    assert_eq!(narrow.dot_count(), 10);

    let medium = Carousel::new(opts.clone(), Viewport::new(700, 680), 0).unwrap();
    assert_eq!(medium.slides_per_view(), 2);
    assert_eq!(medium.dot_count(), 9);

    // No rule below 500px: the configured value is kept.
    let only_wide = opts.with_breakpoints(Breakpoints::from_pairs([(500, 2)]).unwrap());
    let c = Carousel::new(only_wide, Viewport::new(300, 280), 0).unwrap();
    assert_eq!(c.slides_per_view(), 3);
}

#[test]
fn construction_fails_fast_on_preconditions() {
    let viewport = Viewport::new(1200, 600);
    assert_eq!(
        Carousel::new(
            CarouselOptions::new(5).with_slides_per_view(0),
            viewport,
            0
        )
        .unwrap_err(),
        CarouselError::InvalidSlidesPerView(0)
    );
    assert_eq!(
        Carousel::new(CarouselOptions::new(5), Viewport::new(1200, 0), 0).unwrap_err(),
        CarouselError::InvalidContainerWidth(0)
    );
    assert_eq!(
        Carousel::new(
            CarouselOptions::new(5)
                .with_autoplay(true)
                .with_autoplay_interval_ms(0),
            viewport,
            0
        )
        .unwrap_err(),
        CarouselError::InvalidAutoplayInterval
    );
}

#[test]
fn refresh_to_fewer_slides_per_view_adds_dots() {
    let mut c = carousel(5, 3, true);
    c.goto_slide(2).unwrap();
    c.refresh(2, 0).unwrap();
    assert_eq!(c.slides_per_view(), 2);
    assert_eq!(c.dot_count(), 4);
    assert_eq!(c.active_dot(), Some(2));
}

#[test]
fn refresh_can_strand_the_index_until_next_navigation() {
    let mut c = carousel(5, 2, false);
    c.goto_slide(3).unwrap();
    c.refresh(3, 0).unwrap();
    assert_eq!(c.dot_count(), 3);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.active_dot(), None);

    assert!(!c.next());
    assert_eq!(c.active_dot(), None);
    assert!(c.prev());
    assert_eq!(c.current_index(), 2);
    assert_eq!(c.active_dot(), Some(2));

    let mut looping = carousel(5, 2, true);
    looping.goto_slide(3).unwrap();
    looping.refresh(3, 0).unwrap();
    assert!(looping.next());
    assert_eq!(looping.current_index(), 0);
    assert_eq!(looping.active_dot(), Some(0));
}

#[test]
fn refresh_rejects_zero_and_keeps_state() {
    let mut c = carousel(5, 3, false);
    assert_eq!(c.refresh(0, 0), Err(CarouselError::InvalidSlidesPerView(0)));
    assert_eq!(c.slides_per_view(), 3);
    assert_eq!(c.dot_count(), 3);
}

#[test]
fn autoplay_advances_on_each_interval() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_slides_per_view(3)
            .with_loop(true)
            .with_autoplay(true)
            .with_autoplay_interval_ms(1500),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();
    assert!(c.is_autoplaying());

    assert!(!c.tick(1499));
    assert_eq!(c.current_index(), 0);
    assert!(c.tick(1500));
    assert_eq!(c.current_index(), 1);
    assert!(!c.tick(2000));
    assert!(c.tick(3000));
    assert!(c.tick(4500));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn autoplay_coalesces_missed_ticks_and_keeps_phase() {
    let mut a = Autoplay::new(1000);
    a.start(0);
    assert!(a.poll(3500));
    assert_eq!(a.next_due_ms(), Some(4000));
    assert!(!a.poll(3999));
    assert!(a.poll(4000));
    assert_eq!(a.next_due_ms(), Some(5000));
}

#[test]
fn stop_autoplay_cancels_and_is_idempotent() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_slides_per_view(3)
            .with_autoplay(true)
            .with_autoplay_interval_ms(100),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();
    assert!(c.stop_autoplay());
    assert!(!c.stop_autoplay());
    assert!(!c.tick(1000));
    assert_eq!(c.current_index(), 0);

    assert!(c.start_autoplay(1000));
    assert!(c.start_autoplay(1050));
    assert!(!c.tick(1100));
    assert!(c.tick(1150));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn start_autoplay_is_a_no_op_when_autoplay_is_disabled() {
    let mut c = Carousel::new(
        CarouselOptions::new(8)
            .with_slides_per_view(3)
            .with_breakpoints(movie_breakpoints())
            .with_resize_debounce_ms(0),
        Viewport::new(1000, 900),
        0,
    )
    .unwrap();
    assert!(!c.start_autoplay(0));
    assert!(!c.is_autoplaying());

    assert!(c.on_viewport_resize(Viewport::new(700, 680), 10));
    assert_eq!(c.slides_per_view(), 2);
    assert!(!c.is_autoplaying());
    assert!(!c.tick(5000));
    assert_eq!(c.current_index(), 0);
}

#[test]
fn dot_count_saturates_for_huge_collections() {
    assert_eq!(dot_count(usize::MAX, 1), usize::MAX);
    assert_eq!(dot_count(usize::MAX, usize::MAX), 1);
    assert_eq!(dot_count(0, usize::MAX), 1);
}

#[test]
fn refresh_resets_autoplay_phase() {
    let mut c = Carousel::new(
        CarouselOptions::new(8)
            .with_slides_per_view(3)
            .with_autoplay(true)
            .with_autoplay_interval_ms(1000),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();
    c.refresh(2, 900).unwrap();
    assert!(!c.tick(1000));
    assert!(c.tick(1900));
    assert_eq!(c.current_index(), 1);
}

#[test]
fn refresh_without_autoplay_does_not_start_timer() {
    let mut c = carousel(5, 3, false);
    c.refresh(2, 0).unwrap();
    assert!(!c.is_autoplaying());
}

#[test]
fn resize_is_debounced_on_the_trailing_edge() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::new(
        counting_options(5, &calls)
            .with_slides_per_view(3)
            .with_breakpoints(movie_breakpoints())
            .with_resize_debounce_ms(100),
        Viewport::new(1000, 900),
        0,
    )
    .unwrap();
    assert_eq!(c.slides_per_view(), 3);

    // A storm of resizes crossing several breakpoints.
    c.on_viewport_resize(Viewport::new(400, 380), 0);
    c.on_viewport_resize(Viewport::new(1000, 900), 50);
    c.on_viewport_resize(Viewport::new(700, 900), 90);
    assert!(c.has_pending_resize());

    assert!(!c.tick(150));
    assert_eq!(c.slides_per_view(), 3);
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    assert!(c.tick(190));
    assert!(!c.has_pending_resize());
    assert_eq!(c.slides_per_view(), 2);
    assert_eq!(c.dot_count(), 4);
    assert_eq!(calls.load(Ordering::Relaxed), 1);
}

#[test]
fn zero_debounce_applies_resize_immediately() {
    let mut c = Carousel::new(
        CarouselOptions::new(5)
            .with_slides_per_view(3)
            .with_breakpoints(movie_breakpoints())
            .with_resize_debounce_ms(0),
        Viewport::new(1000, 900),
        0,
    )
    .unwrap();
    assert!(c.on_viewport_resize(Viewport::new(700, 680), 10));
    assert_eq!(c.slides_per_view(), 2);
    assert!(!c.on_viewport_resize(Viewport::new(800, 680), 20));
}

#[test]
fn flush_resize_skips_the_quiet_period() {
    let mut c = Carousel::new(
        CarouselOptions::new(5).with_breakpoints(movie_breakpoints()),
        Viewport::new(1000, 900),
        0,
    )
    .unwrap();
    c.on_viewport_resize(Viewport::new(600, 580), 0);
    assert!(c.flush_resize(1));
    assert_eq!(c.slides_per_view(), 2);
    assert!(!c.flush_resize(2));
}

#[test]
fn resize_within_a_breakpoint_only_relays_out() {
    let mut c = Carousel::new(
        CarouselOptions::new(6)
            .with_slides_per_view(3)
            .with_gap(20)
            .with_breakpoints(movie_breakpoints())
            .with_resize_debounce_ms(0),
        Viewport::new(1000, 620),
        0,
    )
    .unwrap();
    c.goto_slide(1).unwrap();
    assert!(approx(c.layout().offset, -213.33));

    assert!(c.on_viewport_resize(Viewport::new(1100, 920), 0));
    assert_eq!(c.slides_per_view(), 3);
    assert_eq!(c.current_index(), 1);
    assert!(approx(c.layout().slide_width, 293.33));
    assert!(approx(c.layout().offset, -313.33));
}

#[test]
fn zero_container_width_on_resize_keeps_previous_geometry() {
    let mut c = Carousel::new(
        CarouselOptions::new(6)
            .with_slides_per_view(3)
            .with_breakpoints(movie_breakpoints())
            .with_resize_debounce_ms(0),
        Viewport::new(1000, 600),
        0,
    )
    .unwrap();
    assert!(c.on_viewport_resize(Viewport::new(700, 0), 0));
    assert_eq!(c.slides_per_view(), 2);
    assert_eq!(c.viewport().container_width, 600);
    assert_eq!(c.geometry().container_width(), 600);
}

#[test]
fn on_change_fires_only_for_real_changes() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::new(
        counting_options(5, &calls).with_slides_per_view(3),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();

    c.prev();
    assert_eq!(calls.load(Ordering::Relaxed), 0);
    c.next();
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    c.goto_slide(1).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    c.goto_slide(9).unwrap_err();
    assert_eq!(calls.load(Ordering::Relaxed), 1);
    c.refresh(2, 0).unwrap();
    assert_eq!(calls.load(Ordering::Relaxed), 2);
}

#[test]
fn batch_update_coalesces_on_change() {
    let calls: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(0));
    let mut c = Carousel::new(
        counting_options(10, &calls).with_slides_per_view(2),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();

    c.batch_update(|c| {
        c.next();
        c.batch_update(|c| {
            c.next();
            c.refresh(3, 0).unwrap();
        });
    });

    assert_eq!(calls.load(Ordering::Relaxed), 1);
    assert_eq!(c.current_index(), 2);
}

#[test]
fn on_change_observes_updated_state() {
    let seen: Arc<AtomicUsize> = Arc::new(AtomicUsize::new(usize::MAX));
    let mut c = carousel(5, 3, true);
    c.set_on_change(Some({
        let seen = Arc::clone(&seen);
        move |c: &Carousel| {
            seen.store(c.current_index(), Ordering::Relaxed);
        }
    }));
    c.prev();
    assert_eq!(seen.load(Ordering::Relaxed), 2);
}

#[test]
fn frame_reflects_current_state() {
    let mut c = Carousel::new(
        CarouselOptions::new(5).with_slides_per_view(3).with_gap(20),
        Viewport::new(1200, 620),
        0,
    )
    .unwrap();
    c.next();
    let frame = c.frame();
    assert_eq!(frame.current_index, 1);
    assert_eq!(frame.slides_per_view, 3);
    assert_eq!(frame.gap, 20);
    assert_eq!(frame.dot_count, 3);
    assert_eq!(frame.active_dot, Some(1));
    assert!(approx(frame.slide_width, 193.33));
    assert!(approx(frame.offset, -213.33));
}

#[test]
fn layout_variables_expose_slides_per_view_and_gap() {
    let mut c = Carousel::new(
        CarouselOptions::new(5).with_slides_per_view(3).with_gap(27),
        Viewport::new(1200, 600),
        0,
    )
    .unwrap();
    let [spv, gap] = c.layout_variables();
    assert_eq!(spv, (SLIDES_PER_VIEW_VAR, "3".to_string()));
    assert_eq!(gap, (GAP_VAR, "27px".to_string()));

    c.refresh(2, 0).unwrap();
    assert_eq!(c.layout_variables()[0].1, "2");
}

#[test]
fn set_total_slides_rebuilds_dots_and_clamps_index() {
    let mut c = carousel(10, 3, false);
    c.goto_slide(7).unwrap();
    assert_eq!(c.dot_count(), 8);

    c.set_total_slides(6);
    assert_eq!(c.total_slides(), 6);
    assert_eq!(c.dot_count(), 4);
    assert_eq!(c.current_index(), 3);
    assert_eq!(c.active_dot(), Some(3));

    c.set_total_slides(20);
    assert_eq!(c.dot_count(), 18);
    assert_eq!(c.current_index(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn breakpoints_deserialize_sorted_and_validated() {
    let json = r#"[{"min_width":914,"slides_per_view":3},{"min_width":0,"slides_per_view":1},{"min_width":500,"slides_per_view":2}]"#;
    let b: Breakpoints = serde_json::from_str(json).unwrap();
    assert_eq!(b, movie_breakpoints());

    let bad = r#"[{"min_width":0,"slides_per_view":0}]"#;
    assert!(serde_json::from_str::<Breakpoints>(bad).is_err());

    let out = serde_json::to_string(&b).unwrap();
    let back: Breakpoints = serde_json::from_str(&out).unwrap();
    assert_eq!(back, b);
}
