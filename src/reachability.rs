//! Used/orphaned classification of reusable components.
//!
//! Builds the used-component set backing the `semantic-unused-component`
//! rule. The reference graph is partitioned by document identity: only edges
//! originating from *this* document count toward *this* document's used-set,
//! and no fixed point is computed across fetched documents — each hop of a
//! resolved chain records its own inbound edge against its own document.
//!
//! Liveness here deliberately means "has any inbound edge recorded in the
//! index", not "reachable from an operation root". A cluster of components
//! referencing only each other is therefore classified as used. Changing
//! this would change observable violation counts; keep it.

use std::collections::HashSet;

use tracing::debug;

use crate::index::{ComponentKind, DocumentIndex};

/// The used-component set for one document.
#[derive(Debug)]
pub struct Reachability {
    used: HashSet<(ComponentKind, String)>,
}

impl Reachability {
    /// Whether any inbound edge targets this component.
    pub fn is_used(&self, kind: ComponentKind, name: &str) -> bool {
        self.used.contains(&(kind, name.to_string()))
    }

    /// Number of distinct used components.
    pub fn used_count(&self) -> usize {
        self.used.len()
    }
}

/// Build the used-set from a document's reference edges and security
/// requirements.
pub fn analyze(index: &DocumentIndex) -> Reachability {
    let mut used = HashSet::new();

    for edge in &index.edges {
        if edge.source_document != index.identity {
            continue;
        }
        let Some(fragment) = internal_fragment(&edge.target, &index.identity) else {
            continue;
        };
        if let Some(target) = normalize_component_pointer(&fragment) {
            used.insert(target);
        }
    }

    // Security requirements name schemes by key, the only non-$ref usage path.
    for requirement in &index.security_requirements {
        used.insert((ComponentKind::SecuritySchemes, requirement.scheme.clone()));
    }

    debug!(
        "reachability: {} edges, {} used components",
        index.edges.len(),
        used.len()
    );
    Reachability { used }
}

/// Resolve an edge target against the document identity, returning the
/// fragment pointer for internal edges and `None` for external or
/// unresolvable ones.
fn internal_fragment(target: &str, identity: &str) -> Option<String> {
    match target.split_once('#') {
        Some((uri, fragment)) if uri.is_empty() || uri == identity => Some(fragment.to_string()),
        // Another document's component liveness is that document's analysis.
        Some(_) => None,
        // Whole-document reference or malformed target.
        None => None,
    }
}

/// Normalize a fragment pointer to its nearest `/components/{kind}/{name}`
/// ancestor, dropping any sub-path
/// (`/components/schemas/Pet/properties/name` -> `schemas`, `Pet`).
pub fn normalize_component_pointer(pointer: &str) -> Option<(ComponentKind, String)> {
    let mut segments = pointer.strip_prefix('/')?.split('/');
    if segments.next()? != "components" {
        return None;
    }
    let kind = ComponentKind::from_segment(segments.next()?)?;
    let name = unescape(segments.next()?);
    if name.is_empty() {
        return None;
    }
    Some((kind, name))
}

// RFC 6901 token unescaping; order matters.
fn unescape(token: &str) -> String {
    token.replace("~1", "/").replace("~0", "~")
}
