//! # BVH Builder
//!
//! Staged builder for Biovision Hierarchy (.bvh) motion capture documents.
//!
//! A document is a HIERARCHY block describing a skeleton, followed by a
//! MOTION block whose frames hold one value per declared channel. The
//! builder validates the skeleton before accepting it, checks every frame
//! against the skeleton's channel count, and enforces the order in which
//! the two blocks may be filled.
//!
//! ## Modules
//!
//! - [`util`] - Errors and math aliases
//! - [`core`] - Skeleton nodes, channels, frames, shared build context
//! - [`hierarchy`] - Tree validation and HIERARCHY serialization
//! - [`builder`] - Header, motion and top-level builders
//! - [`document`] - JSON documents replayed through the builder
//!
//! ## Example
//!
//! ```ignore
//! use bvh_builder::prelude::*;
//!
//! let mut builder = BvhBuilder::new();
//! builder.header().set_hierarchy(&root)?;
//! builder.motion()?.init(1.0 / 30.0)?.add_frame(values)?;
//! let text = builder.build()?;
//! ```

pub mod util;
pub mod core;
pub mod hierarchy;
pub mod builder;
pub mod document;

// Re-export commonly used types
pub use util::{Error, ErrorKind, Result};
pub use builder::{BvhBuilder, HeaderBuilder, MotionBuilder};
pub use document::BvhDocument;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::util::{offset, Error, ErrorKind, Offset, Result};
    pub use crate::core::{BuildState, Channel, EndSite, Frame, Joint, Motion, Node, NodeKind};
    pub use crate::builder::{BvhBuilder, HeaderBuilder, MotionBuilder};
    pub use crate::document::BvhDocument;
}
