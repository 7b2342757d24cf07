// Example: a headless host wiring a controller to a recording renderer.
use carousel::{Breakpoints, Carousel, CarouselOptions, Viewport};
use carousel_adapter::{Controller, RecordingRenderer, Subscription};

fn main() {
    let opts = CarouselOptions::new(8)
        .with_slides_per_view(3)
        .with_gap(27)
        .with_loop(true)
        .with_autoplay(true)
        .with_autoplay_interval_ms(1500)
        .with_breakpoints(Breakpoints::from_pairs([(0, 1), (500, 2), (914, 3)]).unwrap());
    let carousel = Carousel::new(opts, Viewport::new(1280, 1100), 0).unwrap();

    let mut c = Controller::new(carousel, RecordingRenderer::new());
    c.hold(Subscription::new(|| println!("resize listener removed")));
    c.hold(Subscription::new(|| println!("autoplay timer cleared")));
    for cmd in c.renderer_mut().take() {
        println!("init: {cmd:?}");
    }

    c.on_next();
    c.on_indicator(4).unwrap();
    c.on_resize(Viewport::new(640, 600), 2000);
    for now_ms in [2050, 2100, 3000, 3600] {
        c.tick(now_ms);
    }
    for cmd in c.renderer_mut().take() {
        println!("update: {cmd:?}");
    }

    c.dispose();
}
