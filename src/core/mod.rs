//! Core layer - skeleton and motion data model.
//!
//! This module provides:
//! - [`Node`] / [`Joint`] / [`EndSite`] - Skeleton tree
//! - [`Channel`] - Position/rotation channel identifiers
//! - [`Frame`] / [`Motion`] - Sampled animation data
//! - [`BuildContext`] - State shared between the sub-builders

mod channel;
mod node;
mod motion;
mod context;

pub use channel::Channel;
pub use node::{Node, NodeKind, Joint, EndSite};
pub use motion::{Frame, Motion};
pub use context::{BuildContext, BuildState, SharedContext};
