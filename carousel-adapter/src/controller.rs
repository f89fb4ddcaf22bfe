use alloc::vec::Vec;

use carousel::{
    CarouselLayout, CarouselOptions, Emphasis, ItemAttributes, Selection, SelectionError, Viewport,
};

use crate::{Easing, Tween};

const DEFAULT_SCROLL_DURATION_MS: u64 = 300;

/// Render inputs for one carousel cell.
///
/// `attributes` follow the scroll position; `emphasis` follows the tapped selection. The two are
/// independent and the renderer decides how to compose them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub attributes: ItemAttributes,
    pub emphasis: Emphasis,
}

impl Cell {
    pub fn index(&self) -> usize {
        self.attributes.index
    }
}

/// A framework-neutral controller for a snapping carousel screen.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `on_viewport_width` / `on_scroll` when UI events occur
/// - `on_drag_end` when a drag is released, feeding the result to the scroll surface
/// - `select` on tap, then `tick(now_ms)` each frame while `is_animating()`
///
/// Scrolling never changes the selection; only `select` does.
#[derive(Clone, Debug)]
pub struct Controller {
    layout: CarouselLayout,
    selection: Selection,
    viewport: Viewport,
    tween: Option<Tween>,
    scroll_duration_ms: u64,
    easing: Easing,
    render_requested: bool,
}

impl Controller {
    pub fn new(options: CarouselOptions) -> Self {
        Self {
            layout: CarouselLayout::new(options),
            selection: Selection::new(options.count),
            viewport: Viewport::default(),
            tween: None,
            scroll_duration_ms: DEFAULT_SCROLL_DURATION_MS,
            easing: Easing::default(),
            render_requested: true,
        }
    }

    /// Sets the duration and easing of scroll-to-selected animations.
    pub fn with_scroll_animation(mut self, duration_ms: u64, easing: Easing) -> Self {
        self.scroll_duration_ms = duration_ms;
        self.easing = easing;
        self
    }

    pub fn layout(&self) -> &CarouselLayout {
        &self.layout
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn selected_index(&self) -> usize {
        self.selection.index()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replaces the layout options (e.g. after the plan list changed).
    ///
    /// The selection is pulled back into range and a full render is requested.
    pub fn set_options(&mut self, options: CarouselOptions) {
        self.layout.set_options(options);
        self.selection.set_count(options.count);
        self.render_requested = true;
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
    }

    pub fn on_viewport_width(&mut self, width: f32) {
        self.viewport.width = width;
    }

    /// Call this when the UI reports a scroll offset change (e.g. user drag or deceleration).
    ///
    /// This cancels any active tween.
    pub fn on_scroll(&mut self, offset: f32) {
        self.cancel_animation();
        self.viewport.offset = offset;
    }

    /// Call this when a drag is released and the scroll surface proposes a rest offset.
    ///
    /// Returns the offset the surface should decelerate to instead. The controller does not
    /// animate this itself; the surface keeps reporting offsets through `on_scroll`.
    pub fn on_drag_end(&mut self, proposed_offset: f32, velocity: f32) -> f32 {
        self.cancel_animation();
        let target = self
            .layout
            .snap_target_in_strip(self.viewport, proposed_offset, velocity);
        ctrace!(proposed_offset, velocity, target, "Controller::on_drag_end");
        target
    }

    /// Selects `index` (a tap) and starts a tween that centers it.
    ///
    /// Returns the clamped target offset. On error nothing changes: no selection update, no
    /// tween, no render request.
    pub fn select(&mut self, index: usize, now_ms: u64) -> Result<f32, SelectionError> {
        self.selection.select(index)?;
        let target = self
            .layout
            .centered_target(index, self.viewport)
            .unwrap_or(self.viewport.offset);
        self.tween = Some(Tween::new(
            self.viewport.offset,
            target,
            now_ms,
            self.scroll_duration_ms,
            self.easing,
        ));
        self.render_requested = true;
        cdebug!(
            index,
            from = self.viewport.offset,
            to = target,
            "Controller::select"
        );
        Ok(target)
    }

    /// Advances the scroll-to-selected tween.
    ///
    /// Returns the new offset while a tween is active, `None` otherwise.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        self.viewport.offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.tween = None;
            ctrace!(offset = self.viewport.offset, "Controller::tick: tween finished");
        }
        Some(self.viewport.offset)
    }

    /// Returns `true` once after anything that changes every cell's emphasis (selection,
    /// options). Scroll ticks do not set it: attributes are recomputed per frame anyway.
    pub fn take_render_request(&mut self) -> bool {
        core::mem::replace(&mut self.render_requested, false)
    }

    /// Iterates the cells of the current viewport (overscan included) without allocations.
    pub fn for_each_cell(&self, mut f: impl FnMut(Cell)) {
        let viewport = self.viewport;
        self.layout.geometry().for_each_item(viewport, |item| {
            f(Cell {
                attributes: self.layout.attributes_for(item, viewport),
                emphasis: self.selection.emphasis(item.index),
            })
        });
    }

    pub fn cells(&self) -> Vec<Cell> {
        let mut out = Vec::new();
        self.for_each_cell(|c| out.push(c));
        out
    }
}
