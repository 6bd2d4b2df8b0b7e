//! Environment resolution: picks the effective (value, type) pair for a key,
//! or decides the key must be omitted.

use crate::encode::ValueKind;
use crate::env::Environment;
use crate::types::{ConfigEntry, EnvOverride, Scalar};

/// Outcome of resolving one entry for one environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    pub value: Scalar,
    pub kind: ValueKind,
}

impl Resolved {
    fn string(value: Scalar) -> Self {
        Self {
            value,
            kind: ValueKind::String,
        }
    }
}

/// Resolve a map-pipeline entry for the requested environment.
///
/// Precedence, first match wins:
/// 1. bare scalar entries are environment-invariant;
/// 2. an override named after the environment — `null` suppresses the key,
///    beating any default; a scalar is a "string"-typed value; an object
///    carries its own value and type;
/// 3. the entry's default value and type;
/// 4. otherwise the key is omitted.
///
/// Only the requested environment's override is ever consulted. `None` means
/// the key produces no item; it is a policy outcome, not an error.
pub fn resolve_entry(entry: &ConfigEntry, env: Environment) -> Option<Resolved> {
    match entry {
        ConfigEntry::Scalar(value) => Some(Resolved::string(value.clone())),
        ConfigEntry::Table(table) => match table.overrides.get(env.as_str()) {
            // Explicit null: suppressed for this environment.
            Some(None) => None,
            Some(Some(EnvOverride::Scalar(value))) => Some(Resolved::string(value.clone())),
            Some(Some(EnvOverride::Detailed { value, kind })) => {
                // An override object without a value has nothing to emit.
                // Its type is its own; the entry default type does not leak in.
                let value = value.clone()?;
                Some(Resolved {
                    value,
                    kind: ValueKind::from_source(kind.as_deref()),
                })
            }
            None => {
                let value = table.value.clone()?;
                Some(Resolved {
                    value,
                    kind: ValueKind::from_source(table.kind.as_deref()),
                })
            }
        },
    }
}

/// Resolve one tabular row against a located environment column.
///
/// A missing or empty cell omits the key. Tabular data carries no type
/// information, so the caller supplies `kind` uniformly for the whole run.
pub fn resolve_row(fields: &[String], column: usize, kind: ValueKind) -> Option<Resolved> {
    let value = fields.get(column)?;
    if value.is_empty() {
        return None;
    }
    Some(Resolved {
        value: Scalar::String(value.clone()),
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(json: &str) -> ConfigEntry {
        serde_json::from_str(json).expect("test entry must parse")
    }

    #[test]
    fn test_bare_scalar_is_environment_invariant() {
        let e = entry("\"42\"");
        for env in Environment::ALL {
            let resolved = resolve_entry(&e, env).unwrap();
            assert_eq!(resolved.value, Scalar::String("42".into()));
            assert_eq!(resolved.kind, ValueKind::String);
        }
    }

    #[test]
    fn test_null_override_suppresses_despite_default() {
        let e = entry(r#"{"prod": null, "value": "4"}"#);
        assert_eq!(resolve_entry(&e, Environment::Prod), None);
        // Other environments still see the default.
        let resolved = resolve_entry(&e, Environment::Dev).unwrap();
        assert_eq!(resolved.value, Scalar::String("4".into()));
    }

    #[test]
    fn test_scalar_override_wins_over_default() {
        let e = entry(r#"{"value": "2", "dev": "3"}"#);
        let resolved = resolve_entry(&e, Environment::Dev).unwrap();
        assert_eq!(resolved.value, Scalar::String("3".into()));
        assert_eq!(resolved.kind, ValueKind::String);
        let resolved = resolve_entry(&e, Environment::Test).unwrap();
        assert_eq!(resolved.value, Scalar::String("2".into()));
    }

    #[test]
    fn test_detailed_override_carries_own_type() {
        let e = entry(r#"{"dev": {"value": "x", "type": "kv-reference"}}"#);
        let resolved = resolve_entry(&e, Environment::Dev).unwrap();
        assert_eq!(resolved.value, Scalar::String("x".into()));
        assert_eq!(resolved.kind, ValueKind::KvReference);
        // No default: every other environment skips.
        assert_eq!(resolve_entry(&e, Environment::Prod), None);
    }

    #[test]
    fn test_override_type_not_inherited_from_default() {
        // Entry default is kv-reference, but the dev override object has no
        // type of its own, so it resolves as a plain string.
        let e = entry(r#"{"value": "v", "type": "kv-reference", "dev": {"value": "d"}}"#);
        let resolved = resolve_entry(&e, Environment::Dev).unwrap();
        assert_eq!(resolved.kind, ValueKind::String);
        let resolved = resolve_entry(&e, Environment::Prod).unwrap();
        assert_eq!(resolved.kind, ValueKind::KvReference);
    }

    #[test]
    fn test_override_without_value_is_skipped() {
        let e = entry(r#"{"dev": {"type": "kv-reference"}, "value": "fallback"}"#);
        assert_eq!(resolve_entry(&e, Environment::Dev), None);
    }

    #[test]
    fn test_no_default_no_override_is_skipped() {
        let e = entry(r#"{"stage": "only-stage"}"#);
        assert_eq!(resolve_entry(&e, Environment::Dev), None);
        assert!(resolve_entry(&e, Environment::Stage).is_some());
    }

    #[test]
    fn test_default_type_string_when_absent() {
        let e = entry(r#"{"value": "v"}"#);
        let resolved = resolve_entry(&e, Environment::Auto).unwrap();
        assert_eq!(resolved.kind, ValueKind::String);
    }

    #[test]
    fn test_resolve_row() {
        let fields: Vec<String> = ["key1", "dev-val", ""].iter().map(|s| s.to_string()).collect();
        let resolved = resolve_row(&fields, 1, ValueKind::String).unwrap();
        assert_eq!(resolved.value, Scalar::String("dev-val".into()));
        // Empty cell and out-of-range column both skip.
        assert_eq!(resolve_row(&fields, 2, ValueKind::String), None);
        assert_eq!(resolve_row(&fields, 9, ValueKind::String), None);
    }

    #[test]
    fn test_resolve_row_uniform_kind() {
        let fields: Vec<String> = ["k", "uri-here"].iter().map(|s| s.to_string()).collect();
        let resolved = resolve_row(&fields, 1, ValueKind::KvReference).unwrap();
        assert_eq!(resolved.kind, ValueKind::KvReference);
    }
}
