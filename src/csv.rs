//! CSV reading for the tabular pipeline.
//!
//! Deliberately not an RFC 4180 parser: a `"` always toggles the in-quotes
//! flag and is never appended to the field, so commas inside quoted spans
//! survive but `""` escapes do not exist. The source files this tool
//! consumes rely on exactly that behavior.

use crate::env::Environment;

/// A parsed CSV source: header row plus data rows.
///
/// Row lengths are not reconciled with the header; missing trailing fields
/// are simply absent when indexed.
#[derive(Debug, Clone, PartialEq)]
pub struct CsvTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    /// Parse raw CSV text.
    ///
    /// Line breaks are CR/LF tolerant, blank lines are discarded, and the
    /// first remaining line is the header. Returns `None` when no header
    /// line exists.
    pub fn parse(text: &str) -> Option<CsvTable> {
        let mut lines = text.lines().filter(|line| !line.is_empty());
        let header = split_line(lines.next()?);
        let rows = lines.map(split_line).collect();
        Some(CsvTable { header, rows })
    }

    /// Index of the column holding `env`'s values, if any.
    ///
    /// Headers are matched by case-insensitive prefix; the first matching
    /// header wins.
    pub fn env_column(&self, env: Environment) -> Option<usize> {
        self.header.iter().position(|h| env.matches_column(h))
    }
}

/// Split one line into fields on commas, honoring quoted spans.
fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}
