/// An item of the carousel strip, positioned by its center along the scroll axis.
///
/// The index defines carousel order; the center comes from the surrounding layout pass (see
/// [`crate::CarouselGeometry`]).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub index: usize,
    pub center: f32,
}

impl Item {
    pub fn new(index: usize, center: f32) -> Self {
        Self { index, center }
    }
}

/// A snapshot of the visible window along the scroll axis.
///
/// The host scroll surface owns the live values; the engine only ever sees copies.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub offset: f32,
    pub width: f32,
}

impl Viewport {
    pub fn new(offset: f32, width: f32) -> Self {
        Self { offset, width }
    }

    pub fn center(&self) -> f32 {
        self.offset + self.width / 2.0
    }

    pub fn end(&self) -> f32 {
        self.offset + self.width
    }

    pub fn with_offset(self, offset: f32) -> Self {
        Self { offset, ..self }
    }
}

/// Distance-driven render attributes for a single item.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemAttributes {
    pub index: usize,
    /// Uniform scale, in `[1, 1 + zoom_factor]`.
    pub scale: f32,
    /// Opacity, in `[1 - fade_factor, 1]`.
    pub opacity: f32,
    /// Render priority; higher draws on top.
    pub stack_order: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemRange {
    pub start_index: usize,
    pub end_index: usize, // exclusive
}

impl ItemRange {
    pub fn is_empty(&self) -> bool {
        self.start_index >= self.end_index
    }

    pub fn len(&self) -> usize {
        self.end_index.saturating_sub(self.start_index)
    }
}

/// Tap-driven emphasis for a single item.
///
/// This is independent of [`ItemAttributes`]: a renderer composes both, e.g. by multiplying
/// scales and opacities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Emphasis {
    pub selected: bool,
    pub border_visible: bool,
    pub shadow_opacity: f32,
    pub shadow_radius: f32,
    pub scale: f32,
    pub opacity: f32,
}

impl Emphasis {
    pub const SELECTED: Self = Self {
        selected: true,
        border_visible: true,
        shadow_opacity: 0.18,
        shadow_radius: 16.0,
        scale: 1.10,
        opacity: 1.0,
    };

    pub const UNSELECTED: Self = Self {
        selected: false,
        border_visible: false,
        shadow_opacity: 0.0,
        shadow_radius: 0.0,
        scale: 1.0,
        opacity: 0.7,
    };

    pub fn for_selected(selected: bool) -> Self {
        if selected {
            Self::SELECTED
        } else {
            Self::UNSELECTED
        }
    }
}
