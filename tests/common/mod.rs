//! Shared test fixtures.
//!
//! A miniature index builder over the syntax tree, covering exactly the
//! document shapes the integration scenarios use. Production index
//! construction (with reference resolution and fetching) is the embedding
//! tool's job, not this crate's.

use std::collections::BTreeMap;

use oaslint::index::{
    ComponentEntry, ComponentKind, DocumentIndex, OperationEntry, RefEdge, ResponseEntry,
    SchemaEntry, SecurityRequirementEntry, ServerEntry,
};
use oaslint::tree::{NodeHandle, NodeKind, SyntaxTree};

const METHODS: &[&str] = &[
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

pub fn parse(text: &str) -> SyntaxTree {
    oaslint::tree::yaml::from_str(text).expect("fixture must parse")
}

pub fn build_index(tree: &SyntaxTree, identity: &str) -> DocumentIndex {
    let root = tree.root().expect("fixture has a root");
    let version = tree
        .child(root, "openapi")
        .and_then(|h| tree.scalar(h))
        .unwrap_or("3.0.0")
        .to_string();
    let mut index = DocumentIndex::new(identity, version);

    collect_servers(tree, root, &mut index);
    collect_components(tree, root, &mut index);
    collect_operations(tree, root, &mut index);
    collect_security(tree, root, &mut index);
    collect_edges(tree, root, identity, &mut index);

    index
}

fn collect_servers(tree: &SyntaxTree, root: NodeHandle, index: &mut DocumentIndex) {
    let Some(servers) = tree.child(root, "servers") else {
        return;
    };
    for item in tree.items(servers) {
        if let Some(url_handle) = tree.child(*item, "url") {
            if let Some(url) = tree.scalar(url_handle) {
                index.servers.push(ServerEntry {
                    url: url.to_string(),
                    pos: tree.pos(url_handle).unwrap_or_default(),
                    url_handle,
                });
            }
        }
    }
}

fn collect_components(tree: &SyntaxTree, root: NodeHandle, index: &mut DocumentIndex) {
    let Some(components) = tree.child(root, "components") else {
        return;
    };
    for kind_entry in tree.entries(components) {
        let Some(kind) = ComponentKind::from_segment(&kind_entry.key) else {
            continue;
        };
        for entry in tree.entries(kind_entry.value) {
            let mut annotations = BTreeMap::new();
            for child in tree.entries(entry.value) {
                if child.key.starts_with("x-") {
                    let value = tree.scalar(child.value).unwrap_or_default().to_string();
                    annotations.insert(child.key.clone(), value);
                }
            }
            index.components.push(ComponentEntry {
                kind,
                name: entry.key.clone(),
                pointer: format!("#/components/{}/{}", kind.segment(), entry.key),
                key_pos: entry.key_pos,
                handle: entry.value,
                annotations,
            });
            if kind == ComponentKind::Schemas {
                index.schemas.push(schema_entry(
                    tree,
                    entry.value,
                    format!("#/components/schemas/{}", entry.key),
                ));
            }
        }
    }
}

fn schema_entry(tree: &SyntaxTree, handle: NodeHandle, pointer: String) -> SchemaEntry {
    let schema_type = tree
        .child(handle, "type")
        .and_then(|h| tree.scalar(h))
        .map(str::to_string);
    let nullable = tree
        .child(handle, "nullable")
        .and_then(|h| tree.scalar(h))
        .map(|v| v == "true")
        .unwrap_or(false);
    SchemaEntry {
        pointer,
        pos: tree.pos(handle).unwrap_or_default(),
        handle,
        schema_type,
        nullable,
        has_minimum: tree.child(handle, "minimum").is_some(),
        has_maximum: tree.child(handle, "maximum").is_some(),
        has_additional_properties: tree.child(handle, "additionalProperties").is_some(),
    }
}

fn collect_operations(tree: &SyntaxTree, root: NodeHandle, index: &mut DocumentIndex) {
    let Some(paths) = tree.child(root, "paths") else {
        return;
    };
    for path_entry in tree.entries(paths) {
        for method_entry in tree.entries(path_entry.value) {
            if !METHODS.contains(&method_entry.key.as_str()) {
                continue;
            }
            let pointer = format!(
                "#/paths/{}/{}",
                escape_pointer(&path_entry.key),
                method_entry.key
            );
            index.operations.push(OperationEntry {
                method: method_entry.key.clone(),
                path: path_entry.key.clone(),
                pointer: pointer.clone(),
                pos: method_entry.key_pos,
                handle: method_entry.value,
                operation_id: tree
                    .child(method_entry.value, "operationId")
                    .and_then(|h| tree.scalar(h))
                    .map(str::to_string),
                has_description: tree.child(method_entry.value, "description").is_some(),
            });
            if let Some(responses) = tree.child(method_entry.value, "responses") {
                for response_entry in tree.entries(responses) {
                    index.responses.push(ResponseEntry {
                        pointer: format!("{}/responses/{}", pointer, response_entry.key),
                        status: response_entry.key.clone(),
                        pos: response_entry.key_pos,
                        handle: response_entry.value,
                        has_description: tree
                            .child(response_entry.value, "description")
                            .is_some(),
                        has_content: tree.child(response_entry.value, "content").is_some(),
                    });
                }
            }
        }
    }
}

fn collect_security(tree: &SyntaxTree, root: NodeHandle, index: &mut DocumentIndex) {
    let Some(security) = tree.child(root, "security") else {
        return;
    };
    for item in tree.items(security) {
        for entry in tree.entries(*item) {
            index.security_requirements.push(SecurityRequirementEntry {
                scheme: entry.key.clone(),
                pos: entry.key_pos,
            });
        }
    }
}

fn collect_edges(tree: &SyntaxTree, handle: NodeHandle, identity: &str, index: &mut DocumentIndex) {
    for entry in tree.entries(handle) {
        if entry.key == "$ref" {
            if let Some(target) = tree.scalar(entry.value) {
                index.edges.push(RefEdge {
                    source_document: identity.to_string(),
                    pos: tree.pos(entry.value).unwrap_or_default(),
                    target: target.to_string(),
                });
            }
        }
        collect_edges(tree, entry.value, identity, index);
    }
    for item in tree.items(handle).to_vec() {
        collect_edges(tree, item, identity, index);
    }
}

fn escape_pointer(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

/// Decode the tree into an object model for object-mutating fixes.
pub fn tree_to_json(tree: &SyntaxTree) -> serde_json::Value {
    match tree.root() {
        Some(root) => node_to_json(tree, root),
        None => serde_json::Value::Null,
    }
}

fn node_to_json(tree: &SyntaxTree, handle: NodeHandle) -> serde_json::Value {
    match tree.kind(handle) {
        Some(NodeKind::Scalar(text)) => scalar_to_json(text),
        Some(NodeKind::Mapping(entries)) => {
            let mut object = serde_json::Map::new();
            for entry in entries {
                object.insert(entry.key.clone(), node_to_json(tree, entry.value));
            }
            serde_json::Value::Object(object)
        }
        Some(NodeKind::Sequence(items)) => {
            serde_json::Value::Array(items.iter().map(|i| node_to_json(tree, *i)).collect())
        }
        None => serde_json::Value::Null,
    }
}

fn scalar_to_json(text: &str) -> serde_json::Value {
    if text == "true" {
        return serde_json::Value::Bool(true);
    }
    if text == "false" {
        return serde_json::Value::Bool(false);
    }
    if let Ok(n) = text.parse::<i64>() {
        return serde_json::Value::Number(n.into());
    }
    serde_json::Value::String(text.to_string())
}
