//! Top-level document builder.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::{HeaderBuilder, MotionBuilder};
use crate::core::{BuildContext, BuildState, SharedContext};
use crate::util::{Error, Result};

/// Builds a complete BVH document from a hierarchy and a frame stream.
///
/// ```
/// use bvh_builder::prelude::*;
///
/// let root = Joint::new("Root", offset(1.0, 2.0, 1.0))
///     .with_channels([Channel::Xrotation, Channel::Xrotation])
///     .with_child(EndSite::new(offset(1.0, 2.0, -1.0)))
///     .into_root();
///
/// let mut builder = BvhBuilder::new();
/// builder.header().set_hierarchy(&root)?;
/// builder.motion()?.init(0.013)?.add_frame([0.0, 1.0])?;
///
/// let text = builder.build()?;
/// assert!(text.starts_with("HIERARCHY\nROOT Root\n"));
/// assert!(text.ends_with("Frame Time: 0.0130\n 0.00\t 1.00\t\n"));
/// # Ok::<(), bvh_builder::Error>(())
/// ```
#[derive(Debug)]
pub struct BvhBuilder {
    context: SharedContext,
    header: HeaderBuilder,
    motion: MotionBuilder,
}

impl BvhBuilder {
    /// Create a builder with an empty context.
    pub fn new() -> Self {
        let context: SharedContext = Rc::new(RefCell::new(BuildContext::new()));
        Self {
            header: HeaderBuilder::new(Rc::clone(&context)),
            motion: MotionBuilder::new(Rc::clone(&context)),
            context,
        }
    }

    /// HIERARCHY sub-builder.
    pub fn header(&mut self) -> &mut HeaderBuilder {
        &mut self.header
    }

    /// MOTION sub-builder, available once a hierarchy has been accepted.
    pub fn motion(&mut self) -> Result<&mut MotionBuilder> {
        if self.context.borrow().root.is_none() {
            return Err(Error::NoHierarchyForMotion);
        }
        Ok(&mut self.motion)
    }

    /// Position in the ordering state machine.
    pub fn state(&self) -> BuildState {
        self.context.borrow().state()
    }

    /// Render the whole document: HIERARCHY block, newline, MOTION block.
    pub fn build(&self) -> Result<String> {
        let header = self.header.build()?;
        let motion = self.motion.build()?;
        debug!(
            frames = self.motion.frame_count(),
            bytes = header.len() + motion.len() + 1,
            "document built"
        );
        Ok(format!("{header}\n{motion}"))
    }
}

impl Default for BvhBuilder {
    fn default() -> Self {
        Self::new()
    }
}
