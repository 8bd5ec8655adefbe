//! Build context shared by the header and motion builders.
//!
//! The header builder is the only writer of `root` and `channel_count`; the
//! motion builder is the only writer of `motion`. Both read the other's
//! fields to enforce ordering between them.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Motion, Node};

/// Position of a builder in its ordering state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BuildState {
    /// Nothing accepted yet.
    Empty,
    /// A hierarchy has been accepted; it may still be replaced.
    HierarchySet,
    /// Motion initialized; hierarchy is frozen.
    MotionInitialized,
    /// At least one frame recorded.
    FramesAdded,
}

/// Mutable state of one document under construction.
#[derive(Clone, Debug, Default)]
pub struct BuildContext {
    /// Accepted hierarchy (an owned copy of the caller's tree).
    pub root: Option<Node>,
    /// Channel count of `root`, zero until a hierarchy is accepted.
    pub channel_count: usize,
    pub motion: Option<Motion>,
}

impl BuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state machine position.
    pub fn state(&self) -> BuildState {
        match (&self.root, &self.motion) {
            (_, Some(m)) if !m.frames.is_empty() => BuildState::FramesAdded,
            (_, Some(_)) => BuildState::MotionInitialized,
            (Some(_), None) => BuildState::HierarchySet,
            (None, None) => BuildState::Empty,
        }
    }
}

/// Handle to a context shared between the sub-builders of one document.
pub type SharedContext = Rc<RefCell<BuildContext>>;
