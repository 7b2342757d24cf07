//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and holds only state and layout math. This crate adds
//! the pieces an adapter needs to put it on screen:
//!
//! - A [`Renderer`] trait for the effectful side (track transform, indicators, layout variables)
//! - A [`Controller`] that routes events into the carousel and redraws only what changed
//! - [`Subscription`] handles so host listeners and timers are released with the widget
//!
//! This crate is framework-agnostic (no DOM bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod render;
mod subscription;


pub use controller::Controller;
pub use render::{RecordingRenderer, RenderCommand, Renderer};
pub use subscription::Subscription;
