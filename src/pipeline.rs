//! The two conversion pipelines and the per-environment writer.
//!
//! Both pipelines read the whole source into memory, resolve every key once
//! per target environment, and write one document per environment. Writes
//! are not atomic; a crash mid-write can leave a truncated output file.

use crate::config::Config;
use crate::csv::CsvTable;
use crate::encode::{ValueKind, encode_item};
use crate::env::Environment;
use crate::error::{ConvertError, ConvertResult};
use crate::resolve::{resolve_entry, resolve_row};
use crate::types::{KvDocument, SourceMap};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Build one environment's document from a parsed CSV table.
///
/// An environment with no matching column yields an empty document; the
/// batch writer still writes it, merged with any prior items.
pub fn convert_table(table: &CsvTable, env: Environment, kind: ValueKind) -> KvDocument {
    let mut doc = KvDocument::new();
    let Some(column) = table.env_column(env) else {
        debug!(env = %env, "no matching column; document will be empty");
        return doc;
    };
    for fields in &table.rows {
        let Some(key) = fields.first().filter(|key| !key.is_empty()) else {
            continue;
        };
        match resolve_row(fields, column, kind) {
            Some(resolved) => doc
                .items
                .push(encode_item(key, &resolved.value, resolved.kind)),
            None => debug!(key = %key, env = %env, "empty cell; key skipped"),
        }
    }
    doc
}

/// Build one environment's document from a JSON source map.
///
/// Items are emitted in the source's original iteration order.
pub fn convert_map(source: &SourceMap, env: Environment) -> KvDocument {
    let mut doc = KvDocument::new();
    for (key, entry) in source {
        if key.is_empty() {
            debug!(env = %env, "entry with empty key skipped");
            continue;
        }
        match resolve_entry(entry, env) {
            Some(resolved) => doc
                .items
                .push(encode_item(key, &resolved.value, resolved.kind)),
            None => debug!(key = %key, env = %env, "no value for environment; key skipped"),
        }
    }
    doc
}

/// Run the tabular pipeline: one output document per selected environment,
/// appended onto any previously written document at the same path.
///
/// Documents land next to the source CSV unless `out_dir` overrides the
/// destination. Returns the written paths in environment order.
pub fn run_csv_file(
    config: &Config,
    csv_path: &Path,
    envs: &[Environment],
    kind: ValueKind,
    out_dir: Option<&Path>,
) -> ConvertResult<Vec<PathBuf>> {
    let text =
        fs::read_to_string(csv_path).map_err(|err| ConvertError::read(csv_path, err))?;
    let table = CsvTable::parse(&text).ok_or_else(|| ConvertError::EmptyCsv {
        path: csv_path.to_path_buf(),
    })?;

    let dir = match out_dir {
        Some(dir) => dir.to_path_buf(),
        None => csv_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf(),
    };

    let mut written = Vec::with_capacity(envs.len());
    for &env in envs {
        let doc = convert_table(&table, env, kind);
        let out_path = dir.join(config.output.file_name(env));
        let merged = merge_existing(&out_path, doc, config.output.strict_merge)?;
        write_document(&out_path, &merged)?;
        info!(path = %out_path.display(), items = merged.items.len(), env = %env, "wrote output document");
        written.push(out_path);
    }
    Ok(written)
}

/// Run the map pipeline: resolve one environment from a JSON source and
/// write a single document to the caller-supplied path. No merge with prior
/// output.
pub fn run_map_file(
    source_path: &Path,
    env: Environment,
    output: &Path,
) -> ConvertResult<PathBuf> {
    let text =
        fs::read_to_string(source_path).map_err(|err| ConvertError::read(source_path, err))?;
    let source: SourceMap =
        serde_json::from_str(&text).map_err(|err| ConvertError::parse(source_path, &err))?;

    let doc = convert_map(&source, env);
    write_document(output, &doc)?;
    info!(path = %output.display(), items = doc.items.len(), env = %env, "wrote output document");
    Ok(output.to_path_buf())
}

/// Prepend any previously written items at `path` ahead of `doc`'s items.
///
/// A missing prior file is an empty document. An unparsable one is too,
/// unless `strict` is set, in which case the run aborts.
fn merge_existing(path: &Path, doc: KvDocument, strict: bool) -> ConvertResult<KvDocument> {
    let mut merged = match fs::read_to_string(path) {
        Ok(text) => match KvDocument::from_json(&text) {
            Ok(prior) => prior,
            Err(err) if strict => {
                return Err(ConvertError::CorruptExisting {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                });
            }
            Err(err) => {
                debug!(path = %path.display(), error = %err, "existing output unparsable; starting fresh");
                KvDocument::new()
            }
        },
        Err(_) => KvDocument::new(),
    };
    merged.items.extend(doc.items);
    Ok(merged)
}

/// Pretty-print a document to disk.
fn write_document(path: &Path, doc: &KvDocument) -> ConvertResult<()> {
    let json = doc.to_json_pretty().map_err(|err| ConvertError::Encode {
        path: path.to_path_buf(),
        source: err,
    })?;
    fs::write(path, json).map_err(|err| ConvertError::write(path, err))
}
