//! Skeleton node model.
//!
//! A skeleton is a tree of [`Node`]s. The entry point is always a
//! [`Node::Root`]; below it sit [`Node::Joint`]s and, as leaves,
//! [`Node::EndSite`]s. Root and joint share the same payload ([`Joint`]);
//! end sites carry only an offset.
//!
//! The model is plain data. Structural rules are checked by
//! [`crate::hierarchy::validate`] when a hierarchy is handed to the builder.
//!
//! In JSON the node tag is stored under `"type"` (`root`, `joint`,
//! `end-site`). Offsets are written as `[x, y, z]` arrays and read from
//! either arrays or `{ "x", "y", "z" }` objects.

use serde::{Deserialize, Serialize};

use super::Channel;
use crate::util::{deserialize_offset, Offset};

/// Node variant tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Root,
    Joint,
    EndSite,
}

impl NodeKind {
    /// Label keyword used in the HIERARCHY block.
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::Joint => "JOINT",
            Self::EndSite => "End Site",
        }
    }
}

/// A skeleton node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Node {
    /// Tree entry point.
    Root(Joint),
    /// Named internal node.
    Joint(Joint),
    /// Unnamed leaf terminator.
    EndSite(EndSite),
}

/// Payload shared by roots and joints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    /// Joint name, must be non-empty.
    pub name: String,
    /// Offset from the parent joint.
    #[serde(default, deserialize_with = "deserialize_offset")]
    pub offset: Offset,
    /// Declared channels, in frame value order.
    #[serde(default)]
    pub channels: Vec<Channel>,
    /// Child joints or a single end site.
    #[serde(default)]
    pub children: Vec<Node>,
}

impl Joint {
    /// Create a joint without channels or children.
    pub fn new(name: &str, offset: Offset) -> Self {
        Self {
            name: name.to_string(),
            offset,
            channels: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the channel list.
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        self.channels = channels.into_iter().collect();
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append a child and return it for further editing.
    pub fn add_child(&mut self, child: impl Into<Node>) -> &mut Node {
        let index = self.children.len();
        self.children.push(child.into());
        &mut self.children[index]
    }

    /// Wrap as the tree's entry node.
    pub fn into_root(self) -> Node {
        Node::Root(self)
    }
}

impl From<Joint> for Node {
    fn from(joint: Joint) -> Self {
        Node::Joint(joint)
    }
}

/// Leaf terminator of a joint chain.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EndSite {
    /// Offset from the parent joint.
    #[serde(default, deserialize_with = "deserialize_offset")]
    pub offset: Offset,
}

impl EndSite {
    pub fn new(offset: Offset) -> Self {
        Self { offset }
    }
}

impl From<EndSite> for Node {
    fn from(end: EndSite) -> Self {
        Node::EndSite(end)
    }
}

impl Node {
    /// Create a root node.
    pub fn root(name: &str, offset: Offset) -> Self {
        Node::Root(Joint::new(name, offset))
    }

    /// Create a joint node.
    pub fn joint(name: &str, offset: Offset) -> Self {
        Node::Joint(Joint::new(name, offset))
    }

    /// Create an end site node.
    pub fn end_site(offset: Offset) -> Self {
        Node::EndSite(EndSite::new(offset))
    }

    /// Variant tag.
    #[inline]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Root(_) => NodeKind::Root,
            Node::Joint(_) => NodeKind::Joint,
            Node::EndSite(_) => NodeKind::EndSite,
        }
    }

    /// Root or joint payload, `None` for end sites.
    #[inline]
    pub fn as_joint(&self) -> Option<&Joint> {
        match self {
            Node::Root(j) | Node::Joint(j) => Some(j),
            Node::EndSite(_) => None,
        }
    }

    /// Mutable root or joint payload, `None` for end sites.
    #[inline]
    pub fn as_joint_mut(&mut self) -> Option<&mut Joint> {
        match self {
            Node::Root(j) | Node::Joint(j) => Some(j),
            Node::EndSite(_) => None,
        }
    }

    /// Node name (empty for end sites).
    pub fn name(&self) -> &str {
        self.as_joint().map_or("", |j| j.name.as_str())
    }

    pub fn offset(&self) -> Offset {
        match self {
            Node::Root(j) | Node::Joint(j) => j.offset,
            Node::EndSite(e) => e.offset,
        }
    }

    /// Declared channels (empty for end sites).
    pub fn channels(&self) -> &[Channel] {
        match self {
            Node::Root(j) | Node::Joint(j) => &j.channels,
            Node::EndSite(_) => &[],
        }
    }

    /// Children (empty for end sites).
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(j) | Node::Joint(j) => &j.children,
            Node::EndSite(_) => &[],
        }
    }

    /// Set channels on a root or joint. No effect on end sites.
    pub fn with_channels(mut self, channels: impl IntoIterator<Item = Channel>) -> Self {
        if let Some(j) = self.as_joint_mut() {
            j.channels = channels.into_iter().collect();
        }
        self
    }

    /// Append a child to a root or joint. No effect on end sites.
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        if let Some(j) = self.as_joint_mut() {
            j.children.push(child.into());
        }
        self
    }

    /// Check if this is an end site.
    #[inline]
    pub fn is_end_site(&self) -> bool {
        matches!(self, Node::EndSite(_))
    }

    /// Number of root and joint nodes in this subtree.
    pub fn joint_count(&self) -> usize {
        match self {
            Node::EndSite(_) => 0,
            _ => 1 + self.children().iter().map(Node::joint_count).sum::<usize>(),
        }
    }

    /// Number of end sites in this subtree.
    pub fn end_site_count(&self) -> usize {
        match self {
            Node::EndSite(_) => 1,
            _ => self.children().iter().map(Node::end_site_count).sum(),
        }
    }

    /// Sum of channel counts in this subtree, without structural checks.
    pub fn declared_channel_count(&self) -> usize {
        self.channels().len()
            + self
                .children()
                .iter()
                .map(Node::declared_channel_count)
                .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::offset;

    fn leg() -> Node {
        Joint::new("Leg", offset(1.0, 2.0, 1.0))
            .with_channels([Channel::Zrotation, Channel::Xrotation, Channel::Yrotation])
            .with_child(EndSite::new(offset(1.0, 2.0, -1.0)))
            .into()
    }

    #[test]
    fn test_builders() {
        let root = Joint::new("Root", offset(1.0, 2.0, 1.0))
            .with_channels(Channel::ALL)
            .with_child(leg())
            .into_root();

        assert_eq!(root.kind(), NodeKind::Root);
        assert_eq!(root.name(), "Root");
        assert_eq!(root.channels().len(), 6);
        assert_eq!(root.children().len(), 1);
        assert_eq!(root.children()[0].kind(), NodeKind::Joint);
        assert_eq!(root.children()[0].children()[0].kind(), NodeKind::EndSite);
    }

    #[test]
    fn test_node_helpers_match_joint_builders() {
        let a = Node::root("Root", offset(0.0, 0.0, 0.0))
            .with_channels([Channel::Xposition])
            .with_child(Node::end_site(offset(0.0, 1.0, 0.0)));
        let b = Joint::new("Root", offset(0.0, 0.0, 0.0))
            .with_channels([Channel::Xposition])
            .with_child(EndSite::new(offset(0.0, 1.0, 0.0)))
            .into_root();
        assert_eq!(a, b);
    }

    #[test]
    fn test_end_site_ignores_edits() {
        let end = Node::end_site(offset(1.0, 1.0, 1.0))
            .with_channels([Channel::Xrotation])
            .with_child(Node::joint("Nope", offset(0.0, 0.0, 0.0)));
        assert_eq!(end.name(), "");
        assert!(end.channels().is_empty());
        assert!(end.children().is_empty());
        assert!(end.is_end_site());
    }

    #[test]
    fn test_add_child_returns_child() {
        let mut root = Joint::new("Root", offset(0.0, 0.0, 0.0));
        let hip = root.add_child(Joint::new("Hip", offset(0.0, -1.0, 0.0)));
        if let Some(hip) = hip.as_joint_mut() {
            hip.add_child(EndSite::new(offset(0.0, -1.0, 0.0)));
        }
        let root = root.into_root();
        assert_eq!(root.children()[0].children().len(), 1);
    }

    #[test]
    fn test_counts() {
        let root = Joint::new("Root", offset(0.0, 0.0, 0.0))
            .with_channels(Channel::ALL)
            .with_child(leg())
            .with_child(leg())
            .into_root();
        assert_eq!(root.joint_count(), 3);
        assert_eq!(root.end_site_count(), 2);
        assert_eq!(root.declared_channel_count(), 12);
    }

    #[test]
    fn test_json_shape() {
        let json = r#"{
            "type": "root",
            "name": "Root",
            "offset": [1, 2, 1],
            "channels": ["Xrotation", "Xrotation"],
            "children": [{ "type": "end-site", "offset": [1, 2, -1] }]
        }"#;
        let node: Node = serde_json::from_str(json).unwrap();
        assert_eq!(node.kind(), NodeKind::Root);
        assert_eq!(node.offset(), offset(1.0, 2.0, 1.0));
        assert_eq!(node.children()[0].offset(), offset(1.0, 2.0, -1.0));

        let back = serde_json::to_value(&node).unwrap();
        assert_eq!(back["type"], "root");
        assert_eq!(back["children"][0]["type"], "end-site");
    }

    #[test]
    fn test_keywords() {
        assert_eq!(NodeKind::Root.keyword(), "ROOT");
        assert_eq!(NodeKind::Joint.keyword(), "JOINT");
        assert_eq!(NodeKind::EndSite.keyword(), "End Site");
    }
}
