//! Structural validation of a skeleton tree.
//!
//! Rules:
//! - the entry node is a root, and no other node is
//! - every root/joint has a non-empty name and at least one child
//! - an end site has a parent and is that parent's only child
//!
//! The walk is depth-first pre-order and returns the total channel count.

use crate::core::{Joint, Node};
use crate::util::{Error, Result};

/// Validate a candidate hierarchy and return its total channel count.
pub fn validate(candidate: &Node) -> Result<usize> {
    if !matches!(candidate, Node::Root(_)) {
        return Err(Error::NotARoot);
    }
    walk(candidate, None)
}

fn walk(node: &Node, parent: Option<&Joint>) -> Result<usize> {
    match node {
        Node::Root(joint) if parent.is_none() => walk_joint(joint),
        Node::Joint(joint) if parent.is_some() => walk_joint(joint),
        Node::EndSite(_) => {
            let parent = parent.ok_or(Error::MissingParent)?;
            if parent.children.len() > 1 {
                return Err(Error::SiblingConflict(parent.name.clone()));
            }
            Ok(0)
        }
        Node::Root(joint) => Err(Error::UnacceptableNode(format!(
            "root '{}' below the entry point",
            joint.name
        ))),
        Node::Joint(joint) => Err(Error::UnacceptableNode(format!(
            "joint '{}' without a parent",
            joint.name
        ))),
    }
}

fn walk_joint(joint: &Joint) -> Result<usize> {
    if joint.name.is_empty() {
        return Err(Error::EmptyName);
    }
    if joint.children.is_empty() {
        return Err(Error::NoChildren(joint.name.clone()));
    }

    let mut count = joint.channels.len();
    for child in &joint.children {
        count += walk(child, Some(joint))?;
    }
    Ok(count)
}
