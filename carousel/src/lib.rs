//! A headless, responsive carousel engine.
//!
//! For a renderer-driving wrapper with owned event subscriptions, see the `carousel-adapter`
//! crate.
//!
//! This crate holds the state machine and layout math behind a horizontal slider that shows
//! `n` of `total` slides at a time: breakpoint resolution, slide geometry, prev/next/goto
//! navigation (clamped or looping), pagination indicators, autoplay and debounced resize
//! handling.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - viewport width (for breakpoints) and container width (for geometry)
//! - user events (prev/next/indicator clicks, resizes)
//! - host time as `now_ms`, so timers can fire
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod breakpoints;
mod carousel;
mod error;
mod geometry;
mod navigation;
mod options;
mod pagination;
mod resize;
mod types;

#[cfg(test)]
mod tests;

pub use autoplay::Autoplay;
pub use breakpoints::{Breakpoint, Breakpoints};
pub use carousel::{Carousel, GAP_VAR, SLIDES_PER_VIEW_VAR};
pub use error::CarouselError;
pub use geometry::{Geometry, Layout, parse_px_length};
pub use navigation::{GotoPolicy, Navigator};
pub use options::{
    CarouselOptions, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_RESIZE_DEBOUNCE_MS, OnChangeCallback,
};
pub use pagination::{Pagination, dot_count};
pub use resize::ResizeDebouncer;
pub use types::{Frame, Viewport};
