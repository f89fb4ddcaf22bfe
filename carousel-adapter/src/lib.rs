//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and holds only geometry. This crate provides small,
//! framework-neutral helpers a host screen needs on top of it:
//!
//! - A [`Controller`] that owns the viewport snapshot and selection, and animates
//!   scroll-to-selected with a [`Tween`]
//! - Per-cell composition of distance attributes and selection emphasis ([`Cell`])
//! - The static content of the upgrade paywall ([`Paywall`])
//!
//! This crate is intentionally framework-agnostic (no UIKit/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod paywall;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Cell, Controller};
pub use paywall::{Feature, Paywall, Plan, Tint};
pub use tween::{Easing, Tween};
