//! Core building blocks for the Plankit floor plan editor.
//!
//! This crate holds the pieces every other Plankit crate agrees on:
//!
//! - [`constants`]: the shared tolerances, scale factor and defaults.
//! - [`units`]: centimeter/pixel conversion.
//! - [`geometry`]: axis-aligned 2D primitives.
//! - [`error`]: the common error type for document handling.
//!
//! Nothing in here knows about rooms, walls or objects; those live in
//! `plankit-designer`.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod units;

pub use error::{Error, Result};
pub use geometry::{Bounds, Point, Rect};
