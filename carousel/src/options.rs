/// Configuration for [`crate::CarouselLayout`] and [`crate::CarouselGeometry`].
///
/// All lengths are in the host's layout units (points, pixels, cells). The defaults describe a
/// strip of 140×160 cards, 24 apart, inset by 24 on both ends.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselOptions {
    pub count: usize,

    /// Item extent along the scroll axis.
    pub item_width: f32,
    /// Item extent across the scroll axis. Reported to hosts; the layout math ignores it.
    pub item_height: f32,
    /// Space between adjacent items.
    pub spacing: f32,
    /// Inset before the first item.
    pub inset_start: f32,
    /// Inset after the last item.
    pub inset_end: f32,

    /// Distance from the viewport center at which zoom and fade reach their floor.
    pub active_distance: f32,
    /// Extra scale applied to an item sitting exactly at the viewport center.
    pub zoom_factor: f32,
    /// Opacity removed from an item at or beyond `active_distance`.
    pub fade_factor: f32,
    /// Multiplier turning release velocity into a shift of the snap search center.
    pub velocity_amplification: f32,

    /// Items emitted on each side of the visible range.
    pub overscan: usize,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            count: 0,
            item_width: 140.0,
            item_height: 160.0,
            spacing: 24.0,
            inset_start: 24.0,
            inset_end: 24.0,
            active_distance: 140.0,
            zoom_factor: 0.08,
            fade_factor: 0.3,
            velocity_amplification: 100.0,
            overscan: 1,
        }
    }
}

impl CarouselOptions {
    /// Creates default options for a strip of `count` items.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_item_size(mut self, width: f32, height: f32) -> Self {
        self.item_width = width;
        self.item_height = height;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_insets(mut self, inset_start: f32, inset_end: f32) -> Self {
        self.inset_start = inset_start;
        self.inset_end = inset_end;
        self
    }

    pub fn with_active_distance(mut self, active_distance: f32) -> Self {
        self.active_distance = active_distance;
        self
    }

    pub fn with_zoom_factor(mut self, zoom_factor: f32) -> Self {
        self.zoom_factor = zoom_factor;
        self
    }

    pub fn with_fade_factor(mut self, fade_factor: f32) -> Self {
        self.fade_factor = fade_factor;
        self
    }

    pub fn with_velocity_amplification(mut self, velocity_amplification: f32) -> Self {
        self.velocity_amplification = velocity_amplification;
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    /// Distance between the starts (or centers) of adjacent items.
    pub fn stride(&self) -> f32 {
        self.item_width + self.spacing
    }
}
