//! HIERARCHY block serialization.
//!
//! Layout per node, indented one tab per tree level:
//! ```text
//! JOINT Name
//! {
//!     OFFSET\t x\t y\t z
//!     CHANNELS n c1 c2 ...
//!     <children>
//! }
//! ```
//! End sites have no name, no CHANNELS line and no children.

use super::format::{format_value, INDENT};
use crate::core::Node;

/// Keyword opening the header block.
pub const HIERARCHY_KEYWORD: &str = "HIERARCHY";

/// Render the full header: `HIERARCHY`, newline, rendered root.
pub fn render_header(root: &Node) -> String {
    format!("{HIERARCHY_KEYWORD}\n{}", render(root))
}

/// Render a validated tree. The result has no trailing newline.
pub fn render(root: &Node) -> String {
    let mut out = String::new();
    write_node(&mut out, root, 0);
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn write_node(out: &mut String, node: &Node, depth: usize) {
    let keyword = node.kind().keyword();
    if node.is_end_site() {
        push_line(out, depth, keyword);
    } else {
        push_line(out, depth, &format!("{keyword} {}", node.name()));
    }
    push_line(out, depth, "{");

    let o = node.offset();
    push_line(
        out,
        depth + 1,
        &format!(
            "OFFSET\t{}\t{}\t{}",
            format_value(o.x),
            format_value(o.y),
            format_value(o.z)
        ),
    );

    if !node.is_end_site() {
        let channels = node.channels();
        let mut line = format!("CHANNELS {}", channels.len());
        for c in channels {
            line.push(' ');
            line.push_str(c.as_str());
        }
        push_line(out, depth + 1, &line);

        for child in node.children() {
            write_node(out, child, depth + 1);
        }
    }

    push_line(out, depth, "}");
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    out.extend(std::iter::repeat(INDENT).take(depth));
    out.push_str(text);
    out.push('\n');
}
