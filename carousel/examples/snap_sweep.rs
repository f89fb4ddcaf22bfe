// Example: how release velocity changes the settled item.
use carousel::{CarouselLayout, CarouselOptions, Viewport};

fn main() {
    let layout = CarouselLayout::new(CarouselOptions::new(10));
    let viewport = Viewport::new(0.0, 390.0);
    let geometry = layout.geometry();

    for velocity in [-3.0f32, -1.5, -0.5, 0.0, 0.5, 1.5, 3.0] {
        let target = layout.snap_target_in_strip(viewport, 500.0, velocity);
        let centered = geometry.index_nearest(target + viewport.width / 2.0);
        println!("velocity={velocity:>5} target={target:>7.1} centered={centered:?}");
    }
}
