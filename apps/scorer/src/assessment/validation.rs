use std::path::Path;

use tracing::info;

use crate::errors::AppError;
use crate::models::assessment::{ValidatedRecord, RECORD_FIELDS};
use crate::storage::{read_table, write_records, Table};

/// Checks a reloaded batch for the nine record fields and
/// normalizes every field to trimmed text.
///
/// Schema problems fail the whole batch before anything is produced. Values
/// are not re-parsed: scores stay text and no range check happens here.
/// Row order is preserved and extra columns are dropped.
pub fn validate(table: &Table) -> Result<Vec<ValidatedRecord>, AppError> {
    table.require_columns(&RECORD_FIELDS)?;

    Ok(table
        .rows
        .iter()
        .map(|row| {
            let field = |name: &str| {
                row.get(name)
                    .map(|v| v.trim().to_string())
                    .unwrap_or_default()
            };
            ValidatedRecord {
                report: field("report"),
                mood_score: field("mood_score"),
                mood_justification: field("mood_justification"),
                anxiety_score: field("anxiety_score"),
                anxiety_justification: field("anxiety_justification"),
                depression_score: field("depression_score"),
                depression_justification: field("depression_justification"),
                suicidality_score: field("suicidality_score"),
                suicidality_justification: field("suicidality_justification"),
            }
        })
        .collect())
}

/// Validation stage: reload the inference output, validate, write the result.
pub fn run_validation(input: &Path, output: &Path) -> Result<usize, AppError> {
    let table = read_table(input)?;
    let records = validate(&table)?;
    write_records(output, &RECORD_FIELDS, &records)?;

    info!(
        rows = records.len(),
        "Validated results saved to {}.",
        output.display()
    );
    Ok(records.len())
}
