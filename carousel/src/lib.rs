//! A headless center-zoom carousel layout with velocity-aware snapping.
//!
//! For host-side utilities (selection-driven scroll tweens, cell composition), see the
//! `carousel-adapter` crate.
//!
//! This crate holds the geometry behind a horizontally scrolling carousel of fixed-size items:
//! distance-based zoom and fade of items around the viewport center, and snap-to-center targeting
//! when a drag is released with some velocity.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - viewport width and scroll offset (as a [`Viewport`] snapshot)
//! - the proposed rest offset and release velocity when a drag ends
//! - rendering of the returned [`ItemAttributes`] and [`Emphasis`]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod geometry;
mod layout;
mod options;
mod selection;
mod types;


pub use geometry::CarouselGeometry;
pub use layout::CarouselLayout;
pub use options::CarouselOptions;
pub use selection::{Selection, SelectionChange, SelectionError};
pub use types::{Emphasis, Item, ItemAttributes, ItemRange, Viewport};
