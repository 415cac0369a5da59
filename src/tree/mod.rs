//! Mutable syntax tree with source positions.
//!
//! This module provides the arena-backed [`SyntaxTree`] that fixes mutate.
//! Nodes are addressed by [`NodeHandle`], a stable arena slot captured once
//! (at index-build time) and reused for the lifetime of a fix batch. Removing
//! a subtree tombstones its slots rather than reusing them, so a handle whose
//! node has vanished simply stops resolving — the basis of the "stale handle
//! is a safe no-op" guarantee in the fix engine.

pub mod yaml;

/// A source position, 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Pos {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub col: usize,
}

impl Pos {
    /// Create a new position.
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Default for Pos {
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}

/// Stable handle to a node in a [`SyntaxTree`].
///
/// Handles stay valid across mutations of *other* parts of the tree. A handle
/// whose node was removed resolves to nothing; it never aliases a new node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(usize);

/// One `key: value` entry of a mapping node, in document order.
#[derive(Debug, Clone)]
pub struct MapEntry {
    /// Key text.
    pub key: String,
    /// Position of the key itself (for anchoring "this entry").
    pub key_pos: Pos,
    /// Handle of the value node.
    pub value: NodeHandle,
}

/// The shape of a tree node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// A scalar value, stored as its text.
    Scalar(String),
    /// A mapping with ordered entries.
    Mapping(Vec<MapEntry>),
    /// A sequence of nodes.
    Sequence(Vec<NodeHandle>),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    pos: Pos,
}

/// Arena-backed document syntax tree.
///
/// The tree is exclusively owned by the caller during a fix batch; the core
/// borrows it per fix call and never retains the borrow.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<Option<NodeData>>,
    root: Option<NodeHandle>,
}

impl SyntaxTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node and return its handle.
    pub fn alloc(&mut self, kind: NodeKind, pos: Pos) -> NodeHandle {
        let handle = NodeHandle(self.nodes.len());
        self.nodes.push(Some(NodeData { kind, pos }));
        handle
    }

    /// Set the document root.
    pub fn set_root(&mut self, handle: NodeHandle) {
        self.root = Some(handle);
    }

    /// The document root, if any.
    pub fn root(&self) -> Option<NodeHandle> {
        self.root
    }

    /// Whether a handle no longer resolves to a live node.
    pub fn is_stale(&self, handle: NodeHandle) -> bool {
        self.data(handle).is_none()
    }

    fn data(&self, handle: NodeHandle) -> Option<&NodeData> {
        self.nodes.get(handle.0).and_then(|n| n.as_ref())
    }

    fn data_mut(&mut self, handle: NodeHandle) -> Option<&mut NodeData> {
        self.nodes.get_mut(handle.0).and_then(|n| n.as_mut())
    }

    /// The kind of a node, or `None` for a stale handle.
    pub fn kind(&self, handle: NodeHandle) -> Option<&NodeKind> {
        self.data(handle).map(|d| &d.kind)
    }

    /// The position of a node, or `None` for a stale handle.
    pub fn pos(&self, handle: NodeHandle) -> Option<Pos> {
        self.data(handle).map(|d| d.pos)
    }

    /// Scalar text of a node, or `None` if stale or not a scalar.
    pub fn scalar(&self, handle: NodeHandle) -> Option<&str> {
        match self.kind(handle)? {
            NodeKind::Scalar(text) => Some(text),
            _ => None,
        }
    }

    /// Overwrite a scalar's text. Returns `false` (and leaves the tree
    /// untouched) for a stale handle or a non-scalar node.
    pub fn set_scalar(&mut self, handle: NodeHandle, text: impl Into<String>) -> bool {
        match self.data_mut(handle) {
            Some(NodeData {
                kind: NodeKind::Scalar(current),
                ..
            }) => {
                *current = text.into();
                true
            }
            _ => false,
        }
    }

    /// Replace a node's kind in place, keeping its position and handle.
    /// Returns `false` for a stale handle.
    pub fn replace_kind(&mut self, handle: NodeHandle, kind: NodeKind) -> bool {
        match self.data_mut(handle) {
            Some(data) => {
                data.kind = kind;
                true
            }
            None => false,
        }
    }

    /// Entries of a mapping node, empty for anything else.
    pub fn entries(&self, handle: NodeHandle) -> &[MapEntry] {
        match self.kind(handle) {
            Some(NodeKind::Mapping(entries)) => entries,
            _ => &[],
        }
    }

    /// Items of a sequence node, empty for anything else.
    pub fn items(&self, handle: NodeHandle) -> &[NodeHandle] {
        match self.kind(handle) {
            Some(NodeKind::Sequence(items)) => items,
            _ => &[],
        }
    }

    /// Look up a mapping entry's value by key.
    pub fn child(&self, handle: NodeHandle, key: &str) -> Option<NodeHandle> {
        self.entries(handle)
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value)
    }

    /// Position of a mapping entry's key.
    pub fn key_pos(&self, handle: NodeHandle, key: &str) -> Option<Pos> {
        self.entries(handle)
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.key_pos)
    }

    /// Append a new entry to a mapping, allocating the value node.
    ///
    /// Returns `None` without mutating anything if the handle is stale, the
    /// node is not a mapping, or the key is already present. The synthetic
    /// entry inherits the mapping's own position.
    pub fn insert_entry(
        &mut self,
        mapping: NodeHandle,
        key: &str,
        value: NodeKind,
    ) -> Option<NodeHandle> {
        let pos = match self.data(mapping) {
            Some(NodeData {
                kind: NodeKind::Mapping(entries),
                pos,
            }) => {
                if entries.iter().any(|e| e.key == key) {
                    return None;
                }
                *pos
            }
            _ => return None,
        };
        let value_handle = self.alloc(value, pos);
        if let Some(NodeData {
            kind: NodeKind::Mapping(entries),
            ..
        }) = self.data_mut(mapping)
        {
            entries.push(MapEntry {
                key: key.to_string(),
                key_pos: pos,
                value: value_handle,
            });
        }
        Some(value_handle)
    }

    /// Append an already-allocated node to a sequence.
    ///
    /// Returns `false` for a stale handle or a non-sequence node.
    pub fn push_item(&mut self, sequence: NodeHandle, item: NodeHandle) -> bool {
        match self.data_mut(sequence) {
            Some(NodeData {
                kind: NodeKind::Sequence(items),
                ..
            }) => {
                items.push(item);
                true
            }
            _ => false,
        }
    }

    /// Remove a mapping entry and tombstone its entire value subtree.
    ///
    /// Returns `true` if an entry was removed. Handles into the removed
    /// subtree become stale; their slots are never reused.
    pub fn remove_entry(&mut self, mapping: NodeHandle, key: &str) -> bool {
        let value = match self.data_mut(mapping) {
            Some(NodeData {
                kind: NodeKind::Mapping(entries),
                ..
            }) => match entries.iter().position(|e| e.key == key) {
                Some(idx) => entries.remove(idx).value,
                None => return false,
            },
            _ => return false,
        };
        self.tombstone(value);
        true
    }

    fn tombstone(&mut self, handle: NodeHandle) {
        let children: Vec<NodeHandle> = match self.kind(handle) {
            Some(NodeKind::Mapping(entries)) => entries.iter().map(|e| e.value).collect(),
            Some(NodeKind::Sequence(items)) => items.clone(),
            Some(NodeKind::Scalar(_)) => Vec::new(),
            None => return,
        };
        if let Some(slot) = self.nodes.get_mut(handle.0) {
            *slot = None;
        }
        for child in children {
            self.tombstone(child);
        }
    }

    /// Serialize to deterministic YAML text.
    ///
    /// The output is stable across calls, so an idempotent fix can be checked
    /// byte-for-byte: serialize, apply, serialize, compare.
    pub fn to_yaml(&self) -> String {
        yaml::serialize(self)
    }
}
