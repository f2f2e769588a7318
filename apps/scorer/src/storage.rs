//! CSV persistence for the pipeline stages.
//!
//! Every stage reads one file and writes one file. Writes happen once, after
//! the whole batch is in memory.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;

/// A reloaded CSV file: the header row plus every data row keyed by column name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<HashMap<String, String>>,
}

impl Table {
    /// Columns from `required` that the header row lacks, in `required` order.
    pub fn missing_columns(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|col| !self.headers.iter().any(|h| h.as_str() == **col))
            .map(|col| col.to_string())
            .collect()
    }

    pub fn require_columns(&self, required: &[&str]) -> Result<(), AppError> {
        let missing = self.missing_columns(required);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingColumns(missing))
        }
    }
}

/// Reads a CSV file with a header row. Short rows are allowed; their missing
/// cells are simply absent from the row map.
pub fn read_table(path: &Path) -> Result<Table, AppError> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: HashMap<String, String> = headers
            .iter()
            .zip(record.iter())
            .map(|(h, v)| (h.clone(), v.to_string()))
            .collect();
        rows.push(row);
    }

    debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(Table { headers, rows })
}

/// Writes `records` under an explicit header row, creating parent directories.
/// The header is written even when there are no records.
pub fn write_records<T: Serialize>(
    path: &Path,
    headers: &[&str],
    records: &[T],
) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    writer.write_record(headers)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    debug!(path = %path.display(), rows = records.len(), "wrote table");
    Ok(())
}
