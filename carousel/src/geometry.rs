use alloc::vec::Vec;

use crate::{CarouselOptions, Item, ItemRange, Viewport};

/// Fixed-stride geometry of the carousel strip.
///
/// Items are laid out left to right: `inset_start`, then `count` items of `item_width` separated
/// by `spacing`, then `inset_end`. Every query is O(1) or O(items in range).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselGeometry {
    options: CarouselOptions,
}

impl CarouselGeometry {
    pub fn new(options: CarouselOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    pub fn count(&self) -> usize {
        self.options.count
    }

    pub fn item_start(&self, index: usize) -> Option<f32> {
        if index >= self.options.count {
            return None;
        }
        Some(self.start_of(index))
    }

    pub fn item_end(&self, index: usize) -> Option<f32> {
        self.item_start(index)
            .map(|start| start + self.options.item_width)
    }

    pub fn item_center(&self, index: usize) -> Option<f32> {
        if index >= self.options.count {
            return None;
        }
        Some(self.center_of(index))
    }

    pub fn item(&self, index: usize) -> Option<Item> {
        self.item_center(index).map(|center| Item::new(index, center))
    }

    /// Total scrollable length: insets plus items plus the spacing between them.
    pub fn content_extent(&self) -> f32 {
        let o = &self.options;
        let insets = o.inset_start + o.inset_end;
        if o.count == 0 {
            return insets;
        }
        let n = o.count as f32;
        insets + n * o.item_width + (n - 1.0) * o.spacing
    }

    pub fn max_offset(&self, viewport_width: f32) -> f32 {
        (self.content_extent() - viewport_width).max(0.0)
    }

    pub fn clamp_offset(&self, offset: f32, viewport_width: f32) -> f32 {
        offset.clamp(0.0, self.max_offset(viewport_width))
    }

    /// Offset that puts the center of `index` at the viewport center (unclamped).
    ///
    /// Out-of-range indexes are clamped to the last item. Returns `None` for an empty strip.
    pub fn centered_offset(&self, index: usize, viewport_width: f32) -> Option<f32> {
        let last = self.options.count.checked_sub(1)?;
        Some(self.center_of(index.min(last)) - viewport_width / 2.0)
    }

    /// Index of the item whose center is closest to `position`. The lower index wins ties.
    pub fn index_nearest(&self, position: f32) -> Option<usize> {
        let last = self.options.count.checked_sub(1)?;
        let stride = self.options.stride();
        if !(stride > 0.0) || !position.is_finite() {
            return Some(0);
        }
        let k = (position - self.center_of(0)) / stride;
        if k <= 0.0 {
            return Some(0);
        }
        if k >= last as f32 {
            return Some(last);
        }
        let lo = k as usize;
        let hi = (lo + 1).min(last);
        let d_lo = abs(position - self.center_of(lo));
        let d_hi = abs(position - self.center_of(hi));
        Some(if d_lo <= d_hi { lo } else { hi })
    }

    /// Items intersecting `viewport`, without overscan.
    pub fn visible_range(&self, viewport: Viewport) -> ItemRange {
        let count = self.options.count;
        if count == 0 || !(viewport.width > 0.0) {
            return ItemRange {
                start_index: 0,
                end_index: 0,
            };
        }
        let stride = self.options.stride();
        if !(stride > 0.0) || !viewport.offset.is_finite() || !viewport.width.is_finite() {
            return ItemRange {
                start_index: 0,
                end_index: count,
            };
        }

        let first = (viewport.offset - self.options.inset_start - self.options.item_width) / stride;
        let start = if first < 0.0 {
            0
        } else {
            (first as usize).saturating_add(1)
        };

        let past = (viewport.end() - self.options.inset_start) / stride;
        let end = if past <= 0.0 {
            0
        } else {
            let t = past as usize;
            if (t as f32) < past { t.saturating_add(1) } else { t }
        };

        let start = start.min(count);
        let end = end.min(count);
        if start >= end {
            return ItemRange {
                start_index: start,
                end_index: start,
            };
        }
        ItemRange {
            start_index: start,
            end_index: end,
        }
    }

    /// Items intersecting `viewport`, widened by `overscan` on both sides.
    pub fn range(&self, viewport: Viewport) -> ItemRange {
        let mut range = self.visible_range(viewport);
        if range.is_empty() {
            return range;
        }
        let overscan = self.options.overscan;
        range.start_index = range.start_index.saturating_sub(overscan);
        range.end_index = range
            .end_index
            .saturating_add(overscan)
            .min(self.options.count);
        range
    }

    pub fn for_each_item_in(&self, range: ItemRange, mut f: impl FnMut(Item)) {
        let end = range.end_index.min(self.options.count);
        for i in range.start_index..end {
            f(Item::new(i, self.center_of(i)));
        }
    }

    /// Iterates the overscanned items of `viewport` without allocations.
    pub fn for_each_item(&self, viewport: Viewport, f: impl FnMut(Item)) {
        self.for_each_item_in(self.range(viewport), f);
    }

    pub fn items(&self, viewport: Viewport) -> Vec<Item> {
        let range = self.range(viewport);
        let mut out = Vec::with_capacity(range.len());
        self.for_each_item_in(range, |it| out.push(it));
        out
    }

    /// Items intersecting `viewport`, without overscan.
    pub fn visible_items(&self, viewport: Viewport) -> Vec<Item> {
        let range = self.visible_range(viewport);
        let mut out = Vec::with_capacity(range.len());
        self.for_each_item_in(range, |it| out.push(it));
        out
    }

    pub fn all_items(&self) -> Vec<Item> {
        let range = ItemRange {
            start_index: 0,
            end_index: self.options.count,
        };
        let mut out = Vec::with_capacity(range.len());
        self.for_each_item_in(range, |it| out.push(it));
        out
    }

    fn start_of(&self, index: usize) -> f32 {
        self.options.inset_start + index as f32 * self.options.stride()
    }

    fn center_of(&self, index: usize) -> f32 {
        self.start_of(index) + self.options.item_width / 2.0
    }
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
