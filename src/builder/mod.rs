//! Staged BVH document builder.
//!
//! [`BvhBuilder`] owns one [`BuildContext`](crate::core::BuildContext) and
//! hands it to two sub-builders:
//! - [`HeaderBuilder`] - accepts and renders the skeleton
//! - [`MotionBuilder`] - accumulates and renders frames
//!
//! Ordering: `Empty -> HierarchySet -> MotionInitialized -> FramesAdded`.
//! The hierarchy is frozen once motion is initialized, and motion can only
//! be reached after a hierarchy has been accepted.

mod header;
mod motion;
mod bvh;

pub use header::HeaderBuilder;
pub use motion::{MotionBuilder, MOTION_KEYWORD};
pub use bvh::BvhBuilder;

#[cfg(test)]
mod tests;
