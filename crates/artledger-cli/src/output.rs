// crates/artledger-cli/src/output.rs
//
// Output formatting utilities for the ArtLedger CLI.
// Supports table and JSON output modes.

use serde::Serialize;
use tabled::{Table, Tabled};

use artledger_core::{Artist, Artwork, Authentication, Authenticator};

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed table output (default).
    Table,
    /// JSON output for machine consumption.
    Json,
}

/// One field of a record, as a table row.
#[derive(Debug, Tabled)]
pub struct FieldRow {
    pub field: &'static str,
    pub value: String,
}

fn row(field: &'static str, value: impl ToString) -> FieldRow {
    FieldRow {
        field,
        value: value.to_string(),
    }
}

/// Records that can be shown as a field/value table.
pub trait Record: Serialize {
    fn rows(&self) -> Vec<FieldRow>;
}

impl Record for Artist {
    fn rows(&self) -> Vec<FieldRow> {
        vec![
            row("name", &self.name),
            row("biography", &self.biography),
            row("verified", self.verified),
        ]
    }
}

impl Record for Authenticator {
    fn rows(&self) -> Vec<FieldRow> {
        vec![
            row("name", &self.name),
            row("credentials", &self.credentials),
            row("verified", self.verified),
        ]
    }
}

impl Record for Artwork {
    fn rows(&self) -> Vec<FieldRow> {
        vec![
            row("title", &self.title),
            row("artist", self.artist_id),
            row("creation_date", self.creation_date),
            row("medium", &self.medium),
            row("dimensions", &self.dimensions),
            row("description", &self.description),
            row("registered_at", self.registered_at),
        ]
    }
}

impl Record for Authentication {
    fn rows(&self) -> Vec<FieldRow> {
        vec![
            row("authenticator", self.authenticator),
            row("is_authentic", self.is_authentic),
            row("assessment_date", self.assessment_date),
            row("assessment_notes", &self.assessment_notes),
            row("evidence_hash", hex::encode(self.evidence_hash)),
        ]
    }
}

/// Format a slice of Tabled items as a table string.
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    Table::new(data).to_string()
}

/// Format a serializable value as a pretty-printed JSON string.
pub fn format_json<T: Serialize>(data: &T) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|e| format!("JSON serialization error: {}", e))
}

/// Render a query result. Absent records print `not found` (or `null`).
pub fn render<T: Record>(record: Option<&T>, format: OutputFormat) -> String {
    match (record, format) {
        (Some(r), OutputFormat::Table) => format_table(&r.rows()),
        (Some(r), OutputFormat::Json) => format_json(r),
        (None, OutputFormat::Table) => "not found".to_string(),
        (None, OutputFormat::Json) => "null".to_string(),
    }
}
