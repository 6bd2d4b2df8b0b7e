//! Source and output data model shared by both pipelines.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::collections::BTreeMap;
use std::fmt;

/// Content type tagged onto key vault reference items.
///
/// Part of the wire contract with the downstream configuration store; must be
/// reproduced byte-for-byte.
pub const KEYVAULT_REF_CONTENT_TYPE: &str =
    "application/vnd.microsoft.appconfig.keyvaultref+json;charset=utf-8";

/// A scalar source value: JSON string, number, or boolean.
///
/// Arrays and objects are not scalars; a source holding one in a value
/// position fails to parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::String(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// One entry in a JSON configuration source.
///
/// Resolved through one explicit match in
/// [`crate::resolve::resolve_entry`]; the variants mirror the shapes a
/// source file may use.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConfigEntry {
    /// Bare scalar: implicit "string" type, the same value for every
    /// environment.
    Scalar(Scalar),
    /// Object form: optional default plus per-environment overrides.
    Table(EntryTable),
}

/// Object form of a [`ConfigEntry`].
#[derive(Debug, Clone, Deserialize)]
pub struct EntryTable {
    /// Default value, used when the requested environment has no override.
    #[serde(default)]
    pub value: Option<Scalar>,

    /// Default type; "string" when absent.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,

    /// Environment-keyed overrides. An explicit JSON `null` suppresses the
    /// key for that environment.
    #[serde(flatten)]
    pub overrides: BTreeMap<String, Option<EnvOverride>>,
}

/// A per-environment override inside an entry object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnvOverride {
    /// Bare scalar override, implicit "string" type.
    Scalar(Scalar),
    /// Object override with its own value and optional type. Type defaults
    /// to "string" here even when the entry's default type says otherwise;
    /// types are never inherited across the default/override boundary.
    Detailed {
        #[serde(default)]
        value: Option<Scalar>,
        #[serde(rename = "type", default)]
        kind: Option<String>,
    },
}

/// A JSON configuration source: key name to entry, in document order.
///
/// Document order matters: emitted items must follow the source's original
/// iteration order, which a sorted map would destroy.
pub type SourceMap = IndexMap<String, ConfigEntry>;

/// One emitted configuration entry in the import format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KvItem {
    pub key: String,
    pub value: String,
    /// Reserved; always null in this tool's output.
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub content_type: String,
    /// Reserved; always empty in this tool's output.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

/// An importable document: the unit written per target environment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KvDocument {
    pub items: Vec<KvItem>,
}

impl KvDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Load a document from JSON data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON with pretty formatting.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
