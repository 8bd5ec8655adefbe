//! Hierarchy validation and serialization.
//!
//! - [`validate`] - Structural checks, returns the total channel count
//! - [`render`] / [`render_header`] - HIERARCHY block text
//! - [`format`] - Number formatting shared with the MOTION block

pub mod format;
mod render;
mod validate;

pub use render::{render, render_header, HIERARCHY_KEYWORD};
pub use validate::validate;
