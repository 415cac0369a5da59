//! Read-only document index consumed by lint rules.
//!
//! The [`DocumentIndex`] is a pre-built catalog of the interesting nodes of
//! one specification document: operations, servers, reusable components,
//! schemas, responses, reference edges, and security requirements, each with
//! its syntax-tree position and (where fixes need one) a captured
//! [`NodeHandle`].
//!
//! Index construction is the caller's job (it may involve file or network
//! resolution); the core only reads it. Any tree mutation invalidates the
//! index until the caller rebuilds it.

use std::collections::BTreeMap;

use crate::tree::{NodeHandle, Pos};

/// The kinds of reusable components under `/components/{kind}/{name}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Schemas,
    Parameters,
    Responses,
    RequestBodies,
    Headers,
    Examples,
    Links,
    Callbacks,
    PathItems,
    SecuritySchemes,
}

impl ComponentKind {
    /// The pointer segment for this kind, e.g. `schemas`.
    pub fn segment(&self) -> &'static str {
        match self {
            ComponentKind::Schemas => "schemas",
            ComponentKind::Parameters => "parameters",
            ComponentKind::Responses => "responses",
            ComponentKind::RequestBodies => "requestBodies",
            ComponentKind::Headers => "headers",
            ComponentKind::Examples => "examples",
            ComponentKind::Links => "links",
            ComponentKind::Callbacks => "callbacks",
            ComponentKind::PathItems => "pathItems",
            ComponentKind::SecuritySchemes => "securitySchemes",
        }
    }

    /// Parse a pointer segment back into a kind.
    pub fn from_segment(segment: &str) -> Option<Self> {
        Some(match segment {
            "schemas" => ComponentKind::Schemas,
            "parameters" => ComponentKind::Parameters,
            "responses" => ComponentKind::Responses,
            "requestBodies" => ComponentKind::RequestBodies,
            "headers" => ComponentKind::Headers,
            "examples" => ComponentKind::Examples,
            "links" => ComponentKind::Links,
            "callbacks" => ComponentKind::Callbacks,
            "pathItems" => ComponentKind::PathItems,
            "securitySchemes" => ComponentKind::SecuritySchemes,
            _ => return None,
        })
    }
}

impl std::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.segment())
    }
}

/// A declared reusable component.
#[derive(Debug, Clone)]
pub struct ComponentEntry {
    pub kind: ComponentKind,
    /// Declaration key, e.g. `Pet`.
    pub name: String,
    /// Normalized pointer, e.g. `#/components/schemas/Pet`.
    pub pointer: String,
    /// Position of the declaration key (anchors "this entry").
    pub key_pos: Pos,
    /// Handle of the component's value node.
    pub handle: NodeHandle,
    /// `x-*` extension annotations captured by the index builder.
    pub annotations: BTreeMap<String, String>,
}

/// One operation (method under a path item).
#[derive(Debug, Clone)]
pub struct OperationEntry {
    pub method: String,
    pub path: String,
    /// Pointer to the operation node, e.g. `#/paths/~1pets/get`.
    pub pointer: String,
    pub pos: Pos,
    pub handle: NodeHandle,
    pub operation_id: Option<String>,
    pub has_description: bool,
}

/// One entry of the top-level `servers` list.
#[derive(Debug, Clone)]
pub struct ServerEntry {
    pub url: String,
    pub pos: Pos,
    /// Handle of the `url` scalar node.
    pub url_handle: NodeHandle,
}

/// One schema node (component or inline).
#[derive(Debug, Clone)]
pub struct SchemaEntry {
    /// Pointer to the schema node, e.g. `#/components/schemas/Pet`.
    pub pointer: String,
    pub pos: Pos,
    /// Handle of the schema mapping node.
    pub handle: NodeHandle,
    /// Declared `type`, when it is a single scalar.
    pub schema_type: Option<String>,
    /// Whether the 3.0-style `nullable: true` marker is present.
    pub nullable: bool,
    pub has_minimum: bool,
    pub has_maximum: bool,
    pub has_additional_properties: bool,
}

/// One response node under an operation.
#[derive(Debug, Clone)]
pub struct ResponseEntry {
    pub pointer: String,
    /// Status code key, e.g. `200` or `default`.
    pub status: String,
    pub pos: Pos,
    pub handle: NodeHandle,
    pub has_description: bool,
    pub has_content: bool,
}

/// A `$ref` edge recorded by the index builder.
#[derive(Debug, Clone)]
pub struct RefEdge {
    /// Identity (URI) of the document the edge originates from.
    pub source_document: String,
    /// Position of the `$ref` entry.
    pub pos: Pos,
    /// Raw target, `uri#/pointer` or `#/pointer`.
    pub target: String,
}

/// A security requirement naming a scheme by key (not a `$ref`).
#[derive(Debug, Clone)]
pub struct SecurityRequirementEntry {
    pub scheme: String,
    pub pos: Pos,
}

/// A reference the index builder could not resolve.
#[derive(Debug, Clone)]
pub struct ResolutionFailure {
    pub target: String,
    pub pos: Pos,
    pub reason: String,
}

/// Pre-built, caller-owned catalog of one document's nodes and edges.
///
/// All fields are plain data so the caller (or a test) can assemble an index
/// directly; the core treats the whole structure as read-only.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    /// Document identity URI used to classify edges as internal or external.
    pub identity: String,
    /// Document version string, e.g. `3.0.3`.
    pub version: String,
    pub operations: Vec<OperationEntry>,
    pub servers: Vec<ServerEntry>,
    pub components: Vec<ComponentEntry>,
    pub schemas: Vec<SchemaEntry>,
    pub responses: Vec<ResponseEntry>,
    pub edges: Vec<RefEdge>,
    pub security_requirements: Vec<SecurityRequirementEntry>,
    pub resolution_failures: Vec<ResolutionFailure>,
}

impl DocumentIndex {
    /// Create an empty index for a document.
    pub fn new(identity: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            version: version.into(),
            ..Self::default()
        }
    }

    /// Whether the document version matches any of the given prefixes.
    pub fn version_matches(&self, prefixes: &[&str]) -> bool {
        prefixes.iter().any(|p| self.version.starts_with(p))
    }
}
