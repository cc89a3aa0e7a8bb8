//! Human-readable tree rendering for logs and operator tooling.
//!
//! Output is informational only; nothing parses it back.

use crate::tree::HashTree;
use std::fmt;

const PREVIEW_BYTES: usize = 32;

impl fmt::Display for HashTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // (node, depth) pairs, rendered in pre-order without recursion.
        let mut stack = vec![(self, 0usize)];
        while let Some((node, depth)) = stack.pop() {
            let indent = "  ".repeat(depth);
            match node {
                HashTree::Empty => writeln!(f, "{indent}Empty")?,
                HashTree::Fork(left, right) => {
                    writeln!(f, "{indent}Fork")?;
                    stack.push((right.as_ref(), depth + 1));
                    stack.push((left.as_ref(), depth + 1));
                }
                HashTree::Labeled(label, subtree) => {
                    writeln!(f, "{indent}Label {}", render_label(label))?;
                    stack.push((subtree.as_ref(), depth + 1));
                }
                HashTree::Leaf(value) => {
                    writeln!(f, "{indent}Leaf {}", render_value(value))?;
                }
                HashTree::Pruned(digest) => {
                    writeln!(f, "{indent}Pruned 0x{}", hex::encode(digest))?;
                }
            }
        }
        Ok(())
    }
}

fn render_label(label: &[u8]) -> String {
    match std::str::from_utf8(label) {
        Ok(text) if !text.is_empty() && text.chars().all(|c| c.is_ascii_graphic()) => {
            format!("\"{text}\"")
        }
        _ => format!("0x{}", hex::encode(label)),
    }
}

fn render_value(value: &[u8]) -> String {
    if value.len() <= PREVIEW_BYTES {
        format!("0x{} ({} bytes)", hex::encode(value), value.len())
    } else {
        format!(
            "0x{}… ({} bytes)",
            hex::encode(&value[..PREVIEW_BYTES]),
            value.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_indents_children() {
        let tree = HashTree::fork(
            HashTree::labeled("time", HashTree::leaf(vec![0x01])),
            HashTree::labeled(vec![0xff, 0x00], HashTree::Empty),
        );
        let rendered = tree.to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Fork",
                "  Label \"time\"",
                "    Leaf 0x01 (1 bytes)",
                "  Label 0xff00",
                "    Empty",
            ]
        );
    }

    #[test]
    fn test_long_leaf_is_truncated() {
        let rendered = HashTree::leaf(vec![0xab; 40]).to_string();
        assert!(rendered.contains("(40 bytes)"));
        assert!(rendered.contains('…'));
    }
}
