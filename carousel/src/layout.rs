use alloc::vec::Vec;

use crate::geometry::abs;
use crate::{CarouselGeometry, CarouselOptions, Item, ItemAttributes, Viewport};

// Bound on `velocity * velocity_amplification`, far beyond any real strip length.
const MAX_VELOCITY_BIAS: f32 = 1.0e30;

// Resolution of `stack_order`: scales that differ by 0.001 or more never share a stack order.
const STACK_ORDER_RESOLUTION: f32 = 1000.0;

/// The center-zoom carousel layout.
///
/// This type is UI-agnostic and stateless between calls:
/// - It does not hold the viewport. Every query takes a [`Viewport`] snapshot.
/// - Zoom/fade attributes are recomputed per scroll tick and have no side effects.
/// - Snap targeting is computed once per drag release; animating towards the target is up to
///   the host.
///
/// Attribute and snap queries accept arbitrary item slices, so hosts with their own item
/// geometry can use them directly. The `*_in_strip`/`visible_*` helpers use the fixed-stride
/// [`CarouselGeometry`] built from the same options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselLayout {
    options: CarouselOptions,
    geometry: CarouselGeometry,
}

impl CarouselLayout {
    pub fn new(options: CarouselOptions) -> Self {
        cdebug!(
            count = options.count,
            active_distance = options.active_distance,
            zoom_factor = options.zoom_factor,
            "CarouselLayout::new"
        );
        Self {
            options,
            geometry: CarouselGeometry::new(options),
        }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn geometry(&self) -> &CarouselGeometry {
        &self.geometry
    }

    pub fn set_options(&mut self, options: CarouselOptions) {
        *self = Self::new(options);
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut CarouselOptions)) {
        let mut next = self.options;
        f(&mut next);
        self.set_options(next);
    }

    /// Zoom, fade and stack order of a single item for the given viewport.
    pub fn attributes_for(&self, item: Item, viewport: Viewport) -> ItemAttributes {
        let o = &self.options;
        let distance = abs(item.center - viewport.center());
        let normalized = if o.active_distance > 0.0 {
            (distance / o.active_distance).min(1.0)
        } else if distance > 0.0 {
            1.0
        } else {
            0.0
        };

        let scale = 1.0 + o.zoom_factor * (1.0 - normalized);
        let opacity = 1.0 - normalized * o.fade_factor;
        ItemAttributes {
            index: item.index,
            scale,
            opacity,
            stack_order: (scale * STACK_ORDER_RESOLUTION) as i32,
        }
    }

    /// Iterates the attributes of `items` without allocations.
    pub fn for_each_visual_attributes(
        &self,
        items: &[Item],
        viewport: Viewport,
        mut f: impl FnMut(ItemAttributes),
    ) {
        for &item in items {
            f(self.attributes_for(item, viewport));
        }
    }

    /// Attributes for every item in `items`, in the same order. Empty input yields empty output.
    pub fn visual_attributes(&self, items: &[Item], viewport: Viewport) -> Vec<ItemAttributes> {
        let mut out = Vec::with_capacity(items.len());
        self.for_each_visual_attributes(items, viewport, |a| out.push(a));
        out
    }

    /// Attributes for the strip items in `viewport` (overscan included).
    pub fn visible_attributes(&self, viewport: Viewport) -> Vec<ItemAttributes> {
        let mut out = Vec::with_capacity(self.geometry.range(viewport).len());
        self.geometry
            .for_each_item(viewport, |item| out.push(self.attributes_for(item, viewport)));
        out
    }

    /// Overrides the host's proposed rest offset so that an item lands centered.
    ///
    /// `velocity` shifts the search center by `velocity * velocity_amplification` in the
    /// direction of motion, so a decisive flick commits to the next item. The result is clamped
    /// to `[0, max(0, content_extent - viewport.width)]`. With no items, `proposed_offset` is
    /// returned unchanged.
    pub fn snap_target(
        &self,
        items: &[Item],
        viewport: Viewport,
        proposed_offset: f32,
        velocity: f32,
        content_extent: f32,
    ) -> f32 {
        if items.is_empty() {
            return proposed_offset;
        }
        let proposed = if proposed_offset.is_finite() {
            proposed_offset
        } else {
            0.0
        };
        let center = proposed + viewport.width / 2.0;
        let adjusted = center + self.velocity_bias(velocity);

        let mut closest: Option<Item> = None;
        let mut min_delta = f32::INFINITY;
        for &item in items {
            let delta = item.center - adjusted;
            // Strict comparison: the first item wins ties.
            if abs(delta) < abs(min_delta) {
                min_delta = delta;
                closest = Some(item);
            }
        }
        let Some(closest) = closest else {
            cwarn!(
                proposed_offset,
                velocity,
                "snap_target: no item with a finite center"
            );
            return clamp_target(proposed, viewport.width, content_extent);
        };

        let target = clamp_target(
            proposed + (closest.center - adjusted),
            viewport.width,
            content_extent,
        );
        cdebug!(
            proposed_offset,
            velocity,
            index = closest.index,
            target,
            "snap_target"
        );
        target
    }

    /// [`Self::snap_target`] over the strip items that intersect the proposed viewport.
    ///
    /// When no item intersects it (e.g. a flick past the end of content), the strip item
    /// nearest to the biased center is used instead.
    pub fn snap_target_in_strip(
        &self,
        viewport: Viewport,
        proposed_offset: f32,
        velocity: f32,
    ) -> f32 {
        let proposed = viewport.with_offset(proposed_offset);
        let mut items = self.geometry.visible_items(proposed);
        if items.is_empty() {
            if let Some(item) = self
                .geometry
                .index_nearest(proposed.center() + self.velocity_bias(velocity))
                .and_then(|i| self.geometry.item(i))
            {
                items.push(item);
            }
        }
        self.snap_target(
            &items,
            viewport,
            proposed_offset,
            velocity,
            self.geometry.content_extent(),
        )
    }

    /// Offset that centers `index` in a viewport of `viewport.width`, clamped to content bounds.
    ///
    /// This is a zero-velocity snap onto the item's own center. Returns `None` when `index` is
    /// out of range.
    pub fn centered_target(&self, index: usize, viewport: Viewport) -> Option<f32> {
        let item = self.geometry.item(index)?;
        let proposed = self.geometry.centered_offset(index, viewport.width)?;
        Some(self.snap_target(
            &[item],
            viewport,
            proposed,
            0.0,
            self.geometry.content_extent(),
        ))
    }

    /// `velocity * velocity_amplification`, saturated so it never overflows. Non-finite
    /// velocity counts as 0.
    fn velocity_bias(&self, velocity: f32) -> f32 {
        if !velocity.is_finite() {
            return 0.0;
        }
        let bias = velocity * self.options.velocity_amplification;
        if bias.is_nan() {
            return 0.0;
        }
        bias.clamp(-MAX_VELOCITY_BIAS, MAX_VELOCITY_BIAS)
    }
}

fn clamp_target(offset: f32, viewport_width: f32, content_extent: f32) -> f32 {
    let max = (content_extent - viewport_width).max(0.0);
    offset.clamp(0.0, max)
}
