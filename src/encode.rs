//! Item encoding: the single place the wire format's content-type convention
//! is enforced.

use crate::types::{KEYVAULT_REF_CONTENT_TYPE, KvItem, Scalar};
use serde_json::json;
use std::collections::BTreeMap;

/// Effective type of a resolved value.
///
/// Source type strings other than `kv-reference` carry no encoding behavior
/// and all collapse to `String`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    String,
    KvReference,
}

impl ValueKind {
    /// Interpret an optional source `type` field. Absent defaults to
    /// "string".
    pub fn from_source(kind: Option<&str>) -> Self {
        match kind {
            Some("kv-reference") => ValueKind::KvReference,
            _ => ValueKind::String,
        }
    }
}

/// Encode one resolved `(key, value, kind)` triple as an output item.
///
/// Key vault references are re-serialized as the compact JSON object
/// `{"uri":<value>}` and tagged with the fixed content type; everything else
/// passes through as the scalar's string rendering with an empty content
/// type. `label` and `tags` are reserved and always empty.
pub fn encode_item(key: &str, value: &Scalar, kind: ValueKind) -> KvItem {
    let (value, content_type) = match kind {
        ValueKind::KvReference => (
            json!({ "uri": value.to_string() }).to_string(),
            KEYVAULT_REF_CONTENT_TYPE.to_string(),
        ),
        ValueKind::String => (value.to_string(), String::new()),
    };
    KvItem {
        key: key.to_string(),
        value,
        label: None,
        content_type,
        tags: BTreeMap::new(),
    }
}
