//! YAML adapter for the syntax tree.
//!
//! Bridges `marked_yaml` (position-tracked parsing) into the [`SyntaxTree`]
//! arena, and serializes a tree back to deterministic YAML text. The actual
//! parsing is the library's job; this module only converts shapes.

use super::{MapEntry, NodeHandle, NodeKind, Pos, SyntaxTree};
use crate::error::Result;

/// Build a [`SyntaxTree`] from YAML text, keeping source positions.
pub fn from_str(text: &str) -> Result<SyntaxTree> {
    let doc = marked_yaml::parse_yaml(0, text)
        .map_err(|e| anyhow::anyhow!("YAML parse failed: {e}"))?;
    let mut tree = SyntaxTree::new();
    let root = convert(&doc, &mut tree);
    tree.set_root(root);
    Ok(tree)
}

fn convert(node: &marked_yaml::Node, tree: &mut SyntaxTree) -> NodeHandle {
    let pos = pos_of(node.span());
    match node {
        marked_yaml::Node::Scalar(scalar) => {
            tree.alloc(NodeKind::Scalar(scalar.as_str().to_string()), pos)
        }
        marked_yaml::Node::Mapping(mapping) => {
            let mut entries = Vec::new();
            for (key, value) in mapping.iter() {
                let value_handle = convert(value, tree);
                entries.push(MapEntry {
                    key: key.as_str().to_string(),
                    key_pos: pos_of(key.span()),
                    value: value_handle,
                });
            }
            tree.alloc(NodeKind::Mapping(entries), pos)
        }
        marked_yaml::Node::Sequence(sequence) => {
            let items = sequence.iter().map(|item| convert(item, tree)).collect();
            tree.alloc(NodeKind::Sequence(items), pos)
        }
    }
}

fn pos_of(span: &marked_yaml::Span) -> Pos {
    span.start()
        .map(|marker| Pos::new(marker.line(), marker.column()))
        .unwrap_or_default()
}

/// Serialize a tree to YAML text.
///
/// Output is deterministic: 2-space indent, entries in document order,
/// scalars quoted only when they contain characters outside a plain-safe set.
pub fn serialize(tree: &SyntaxTree) -> String {
    let mut out = String::new();
    if let Some(root) = tree.root() {
        write_node(tree, root, 0, &mut out);
    }
    out
}

fn write_node(tree: &SyntaxTree, handle: NodeHandle, indent: usize, out: &mut String) {
    match tree.kind(handle) {
        Some(NodeKind::Scalar(text)) => {
            out.push_str(&pad(indent));
            out.push_str(&quote(text));
            out.push('\n');
        }
        Some(NodeKind::Mapping(entries)) => {
            if entries.is_empty() {
                out.push_str(&pad(indent));
                out.push_str("{}\n");
                return;
            }
            for entry in entries {
                write_entry(tree, entry, indent, out);
            }
        }
        Some(NodeKind::Sequence(items)) => {
            if items.is_empty() {
                out.push_str(&pad(indent));
                out.push_str("[]\n");
                return;
            }
            for item in items {
                if let Some(NodeKind::Scalar(text)) = tree.kind(*item) {
                    out.push_str(&pad(indent));
                    out.push_str("- ");
                    out.push_str(&quote(text));
                    out.push('\n');
                } else {
                    out.push_str(&pad(indent));
                    out.push_str("-\n");
                    write_node(tree, *item, indent + 1, out);
                }
            }
        }
        None => {}
    }
}

fn write_entry(tree: &SyntaxTree, entry: &MapEntry, indent: usize, out: &mut String) {
    match tree.kind(entry.value) {
        Some(NodeKind::Scalar(text)) => {
            out.push_str(&pad(indent));
            out.push_str(&entry.key);
            out.push_str(": ");
            out.push_str(&quote(text));
            out.push('\n');
        }
        Some(NodeKind::Mapping(entries)) if entries.is_empty() => {
            out.push_str(&pad(indent));
            out.push_str(&entry.key);
            out.push_str(": {}\n");
        }
        Some(NodeKind::Sequence(items)) if items.is_empty() => {
            out.push_str(&pad(indent));
            out.push_str(&entry.key);
            out.push_str(": []\n");
        }
        Some(_) => {
            out.push_str(&pad(indent));
            out.push_str(&entry.key);
            out.push_str(":\n");
            write_node(tree, entry.value, indent + 1, out);
        }
        None => {}
    }
}

fn pad(indent: usize) -> String {
    "  ".repeat(indent)
}

fn quote(text: &str) -> String {
    if !text.is_empty() && text.chars().all(plain_safe) && !needs_quoting(text) {
        text.to_string()
    } else {
        let escaped = text.replace('\\', "\\\\").replace('"', "\\\"");
        format!("\"{escaped}\"")
    }
}

fn plain_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '/' | ':' | ' ')
}

fn needs_quoting(text: &str) -> bool {
    // Keywords and number-likes must stay strings on a re-parse.
    matches!(text, "null" | "true" | "false" | "~" | "yes" | "no")
        || text.parse::<f64>().is_ok()
        || text.starts_with(' ')
        || text.ends_with(' ')
        || text.starts_with('-')
}
