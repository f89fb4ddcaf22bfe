// Example: a host loop driving the paywall carousel (drag, fling, tap).
use carousel_adapter::{Controller, Paywall};

fn main() {
    let paywall = Paywall::canary_upgrade();
    let mut c = Controller::new(paywall.carousel_options());
    c.on_viewport_width(390.0);

    // The user drags and releases; the scroll surface proposes a rest offset.
    c.on_scroll(120.0);
    let settle = c.on_drag_end(260.0, 0.6);
    c.on_scroll(settle);
    println!("released -> settled at {settle}, selected={}", c.selected_index());

    // The user taps a plan.
    let mut now_ms = 0u64;
    let to = c.select(6, now_ms).unwrap_or(settle);
    println!("tap plan 6 ({:?}) -> scrolling to {to}", paywall.plan(6).map(|p| &p.price));

    while c.is_animating() {
        now_ms += 16;
        if let Some(off) = c.tick(now_ms) {
            println!("t={now_ms}ms offset={off:.1}");
        }
    }

    if c.take_render_request() {
        for cell in c.cells() {
            let plan = &paywall.plans[cell.index()];
            println!(
                "{:>2} {:<6} scale={:.3} opacity={:.2} z={} selected={}",
                cell.index(),
                plan.price,
                cell.attributes.scale,
                cell.attributes.opacity,
                cell.attributes.stack_order,
                cell.emphasis.selected,
            );
        }
    }
    println!("{}", paywall.action);
}
