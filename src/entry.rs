//! Documentation records produced by the pass.

use serde::Serialize;

/// Resolved, renderer-ready documentation for one configuration key.
///
/// Entries are immutable once produced and appear in the output sequence in
/// visitation order. The serialized form uses camelCase attribute names and
/// `null` for absent optional attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
    /// The configuration key, byte-for-byte the field's constant text value.
    pub key: String,
    /// Identifier of the declaring type, as resolved by the host.
    pub source: String,
    /// Human-readable description. Empty when no usable text existed.
    pub description: String,
    /// Default value of the key. Annotation-provided only.
    pub default_value: Option<String>,
    /// Version the key was introduced in.
    pub since: Option<String>,
}

/// Serialize an ordered record sequence as pretty-printed JSON for
/// downstream renderers.
pub fn entries_to_json(entries: &[DocEntry]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(entries)
}
