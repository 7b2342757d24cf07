// Example: responsive carousel driven by simulated host time.
use carousel::{Breakpoints, Carousel, CarouselOptions, Viewport, parse_px_length};

fn main() {
    let breakpoints = Breakpoints::from_pairs([(0, 1), (500, 2), (914, 3)]).unwrap();
    let opts = CarouselOptions::new(20)
        .with_slides_per_view(3)
        .with_autoplay(true)
        .with_autoplay_interval_ms(1500)
        .with_loop(true)
        .with_gap(parse_px_length("27px").unwrap())
        .with_breakpoints(breakpoints);

    let mut c = Carousel::new(opts, Viewport::new(1280, 1100), 0).unwrap();
    println!("initial frame={:?}", c.frame());

    c.next();
    c.next();
    println!("after two nexts: index={} {}", c.current_index(), c.layout().css_translate_x());

    // Window shrinks below the 914px breakpoint; applied after the debounce delay.
    c.on_viewport_resize(Viewport::new(800, 760), 100);
    c.tick(150);
    println!("before debounce: slides_per_view={}", c.slides_per_view());
    c.tick(200);
    println!(
        "after debounce: slides_per_view={} dots={} active={:?}",
        c.slides_per_view(),
        c.dot_count(),
        c.active_dot()
    );

    for now_ms in (1700..=6200).step_by(1500) {
        c.tick(now_ms);
        println!("t={now_ms}ms index={}", c.current_index());
    }
}
