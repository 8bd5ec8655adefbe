//! JSON description of a whole BVH document.
//!
//! ```json
//! {
//!   "hierarchy": { "type": "root", "name": "Root", "offset": [0, 0, 0],
//!                  "channels": ["Xrotation"], "children": [{ "type": "end-site" }] },
//!   "frame_time": 0.033,
//!   "frames": [[0.0], [1.5]]
//! }
//! ```
//!
//! Documents are replayed through [`BvhBuilder`], so every builder rule
//! applies to them as well.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::BvhBuilder;
use crate::core::{Channel, EndSite, Joint, Node};
use crate::util::{offset, Result};

/// Hierarchy, period and frames of one document.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BvhDocument {
    /// Skeleton; `null` or missing is rejected when building.
    #[serde(default)]
    pub hierarchy: Option<Node>,
    /// Seconds per frame.
    #[serde(alias = "frameTime", alias = "period")]
    pub frame_time: f64,
    #[serde(default)]
    pub frames: Vec<Vec<f64>>,
}

impl BvhDocument {
    /// Parse a document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Feed the document through a fresh builder.
    pub fn to_builder(&self) -> Result<BvhBuilder> {
        let mut builder = BvhBuilder::new();
        builder.header().set_hierarchy_from(self.hierarchy.as_ref())?;

        let motion = builder.motion()?;
        motion.init(self.frame_time)?;
        for frame in &self.frames {
            motion.add_frame(frame.as_slice())?;
        }
        debug!(frames = self.frames.len(), "document loaded");
        Ok(builder)
    }

    /// Render the document as BVH text.
    pub fn to_bvh(&self) -> Result<String> {
        self.to_builder()?.build()
    }

    /// Two-joint sample skeleton with a single frame.
    pub fn demo() -> Self {
        let root = Joint::new("Root", offset(1.0, 2.0, 1.0))
            .with_channels([
                Channel::Xposition,
                Channel::Yposition,
                Channel::Zposition,
                Channel::Zrotation,
                Channel::Xrotation,
                Channel::Yrotation,
            ])
            .with_child(
                Joint::new("Leg", offset(1.0, 2.0, 1.0))
                    .with_channels([Channel::Zrotation, Channel::Xrotation, Channel::Yrotation])
                    .with_child(EndSite::new(offset(1.0, 2.0, -1.0))),
            )
            .into_root();

        Self {
            hierarchy: Some(root),
            frame_time: 0.013,
            frames: vec![vec![0.0, 1.0, -2.0, 0.0, 1.0, -2.0, 0.0, 0.0, 0.0]],
        }
    }
}
