use crate::*;

use carousel::{CarouselOptions, Emphasis, SelectionError};

fn paywall_controller() -> Controller {
    let mut c = Controller::new(Paywall::canary_upgrade().carousel_options());
    c.on_viewport_width(200.0);
    c.on_scroll(0.0);
    c
}

#[test]
fn select_tweens_to_centered_offset() {
    let mut c = paywall_controller();
    assert!(c.take_render_request());
    assert!(!c.take_render_request());

    let to = c.select(5, 1_000).unwrap();
    assert_eq!(to, 814.0);
    assert_eq!(c.selected_index(), 5);
    assert!(c.is_animating());
    assert!(c.take_render_request());

    let mut last = 0.0f32;
    for now_ms in [1_000u64, 1_050, 1_100, 1_200, 1_300, 1_400] {
        if let Some(off) = c.tick(now_ms) {
            assert!(off >= last);
            last = off;
        }
    }
    assert!(!c.is_animating());
    assert_eq!(c.viewport().offset, 814.0);
    assert_eq!(c.tick(1_500), None);
}

#[test]
fn select_near_the_end_clamps_target() {
    let mut c = paywall_controller();
    assert_eq!(c.select(9, 0).unwrap(), 1464.0);
    assert_eq!(c.select(0, 0).unwrap(), 0.0);
}

#[test]
fn select_out_of_range_changes_nothing() {
    let mut c = paywall_controller();
    c.select(3, 0).unwrap();
    c.tick(10_000);
    let _ = c.take_render_request();
    let offset = c.viewport().offset;

    let err = c.select(10, 10_000).unwrap_err();
    assert_eq!(err, SelectionError::OutOfRange { index: 10, count: 10 });
    assert_eq!(c.selected_index(), 3);
    assert!(!c.is_animating());
    assert!(!c.take_render_request());
    assert_eq!(c.viewport().offset, offset);
}

#[test]
fn scrolling_cancels_tween_but_keeps_selection() {
    let mut c = paywall_controller();
    c.select(4, 0).unwrap();
    c.tick(100);
    c.on_scroll(42.0);
    assert!(!c.is_animating());
    assert_eq!(c.viewport().offset, 42.0);
    assert_eq!(c.selected_index(), 4);

    // Dragging onto another plan recenters it visually only.
    let target = c.on_drag_end(700.0, 0.0);
    assert_eq!(target, 650.0);
    c.on_scroll(target);
    assert_eq!(c.selected_index(), 4);
}

#[test]
fn drag_end_flick_commits_to_next_plan() {
    let mut c = paywall_controller();
    assert_eq!(c.on_drag_end(700.0, 0.0), 650.0);
    assert_eq!(c.on_drag_end(700.0, 1.0), 714.0);
}

#[test]
fn cells_compose_zoom_and_selection_independently() {
    let mut c = paywall_controller();
    c.select(5, 0).unwrap();
    c.tick(1_000);
    assert_eq!(c.viewport().offset, 814.0);

    let cells = c.cells();
    let indexes: std::vec::Vec<usize> = cells.iter().map(|cell| cell.index()).collect();
    assert_eq!(indexes, [3, 4, 5, 6, 7]);

    let centered = cells.iter().find(|cell| cell.index() == 5).unwrap();
    assert_eq!(centered.emphasis, Emphasis::SELECTED);
    for cell in &cells {
        assert!(centered.attributes.scale >= cell.attributes.scale);
        if cell.index() != 5 {
            assert_eq!(cell.emphasis, Emphasis::UNSELECTED);
        }
    }

    // Scroll away: the selected cell keeps its emphasis but loses the zoom.
    c.on_scroll(0.0);
    let mut selected_zoom = None;
    c.for_each_cell(|cell| {
        if cell.index() == 5 {
            selected_zoom = Some(cell.attributes.scale);
        }
    });
    assert_eq!(selected_zoom, None);
    let first = c.cells()[0];
    assert_eq!(first.emphasis, Emphasis::UNSELECTED);
}

#[test]
fn set_options_pulls_selection_into_range() {
    let mut c = paywall_controller();
    c.select(7, 0).unwrap();
    let _ = c.take_render_request();

    c.set_options(CarouselOptions::new(3));
    assert_eq!(c.selected_index(), 2);
    assert_eq!(c.selection().count(), 3);
    assert!(c.take_render_request());
}

#[test]
fn custom_scroll_animation_is_used() {
    let mut c = Controller::new(CarouselOptions::new(10))
        .with_scroll_animation(100, Easing::Linear);
    c.on_viewport_width(200.0);
    let to = c.select(5, 0).unwrap();
    assert_eq!(c.tick(50), Some(to / 2.0));
    assert_eq!(c.tick(100), Some(to));
    assert!(!c.is_animating());
}

#[test]
fn tween_samples_and_retargets() {
    let mut t = Tween::new(0.0, 100.0, 0, 100, Easing::Linear);
    assert_eq!(t.sample(0), 0.0);
    assert_eq!(t.sample(50), 50.0);
    assert_eq!(t.sample(500), 100.0);
    assert!(t.is_done(100));

    t.retarget(50, 0.0, 50);
    assert_eq!(t.from, 50.0);
    assert_eq!(t.sample(100), 0.0);

    let zero = Tween::new(1.0, 2.0, 10, 0, Easing::SmoothStep);
    assert_eq!(zero.duration_ms, 1);
    assert_eq!(zero.sample(11), 2.0);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [Easing::Linear, Easing::SmoothStep, Easing::EaseInOutCubic] {
        assert_eq!(easing.sample(0.0), 0.0);
        assert_eq!(easing.sample(1.0), 1.0);
        assert_eq!(easing.sample(0.5), 0.5);
    }
}

#[test]
fn canary_paywall_content() {
    let p = Paywall::canary_upgrade();
    assert_eq!(p.title, "Upgrade Canary Mail");
    assert_eq!(p.action, "Continue");
    assert_eq!(p.features.len(), 7);
    assert_eq!(p.features[3].tint, Tint::Orange);
    assert_eq!(p.plans.len(), 10);
    assert_eq!(p.plan(0).unwrap().price, "$20");
    assert_eq!(p.plan(4).unwrap().subtitle, "Monthly");
    assert_eq!(p.plan(5), p.plan(0));
    assert_eq!(p.plan(10), None);
    assert_eq!(p.carousel_options().count, 10);
}
