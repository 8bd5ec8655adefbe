//! Utility types and functions for BVH building.
//!
//! This module contains fundamental types used throughout the library:
//! - [`Error`] / [`ErrorKind`] / [`Result`] - Error handling
//! - [`Offset`] - Math type re-exports from glam

mod error;
mod math;

pub use error::*;
pub use math::*;
