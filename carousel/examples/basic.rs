use carousel::{CarouselLayout, CarouselOptions, Viewport};

fn main() {
    let layout = CarouselLayout::new(CarouselOptions::new(10));
    let viewport = Viewport::new(0.0, 390.0);

    println!("content_extent={}", layout.geometry().content_extent());
    println!("visible_range={:?}", layout.geometry().visible_range(viewport));
    for a in layout.visible_attributes(viewport) {
        println!("{a:?}");
    }

    let target = layout.snap_target_in_strip(viewport, 210.0, 0.8);
    println!("drag released at 210 with velocity 0.8 -> settle at {target}");
}
