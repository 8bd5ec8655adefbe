//! HIERARCHY sub-builder.

use tracing::debug;

use crate::core::{Node, SharedContext};
use crate::hierarchy;
use crate::util::{Error, Result};

/// Accepts the skeleton and renders the HIERARCHY block.
#[derive(Debug)]
pub struct HeaderBuilder {
    context: SharedContext,
}

impl HeaderBuilder {
    pub(crate) fn new(context: SharedContext) -> Self {
        Self { context }
    }

    /// Validate `root` and store an owned copy of it.
    ///
    /// Rejected once motion has been initialized. A hierarchy set earlier
    /// may be replaced until then. On error nothing is changed.
    pub fn set_hierarchy(&mut self, root: &Node) -> Result<&mut Self> {
        self.set_hierarchy_from(Some(root))
    }

    /// Same as [`set_hierarchy`](Self::set_hierarchy) for a hierarchy that
    /// may be missing, e.g. a `null` in a loaded document.
    pub fn set_hierarchy_from(&mut self, root: Option<&Node>) -> Result<&mut Self> {
        {
            let mut ctx = self.context.borrow_mut();
            if ctx.motion.is_some() {
                return Err(Error::HierarchyFrozen);
            }
            let root = root.ok_or(Error::NullHierarchy)?;
            let channel_count = hierarchy::validate(root)?;

            debug!(
                name = root.name(),
                joints = root.joint_count(),
                channel_count,
                "hierarchy accepted"
            );
            ctx.root = Some(root.clone());
            ctx.channel_count = channel_count;
        }
        Ok(self)
    }

    /// Render the HIERARCHY block of the accepted tree.
    pub fn build(&self) -> Result<String> {
        let ctx = self.context.borrow();
        let root = ctx.root.as_ref().ok_or(Error::NoHierarchy)?;
        Ok(hierarchy::render_header(root))
    }

    /// Channel count of the accepted hierarchy.
    pub fn channel_count(&self) -> Option<usize> {
        let ctx = self.context.borrow();
        ctx.root.as_ref().map(|_| ctx.channel_count)
    }

    /// Copy of the accepted hierarchy.
    pub fn hierarchy(&self) -> Option<Node> {
        self.context.borrow().root.clone()
    }
}
