//! Reads raw clinical notes and turns each into a prompt.

pub mod prompts;

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::assessment::inference::PROMPT_FIELDS;
use crate::errors::AppError;
use crate::models::assessment::ReplyFormat;
use crate::preprocess::prompts::{JSON_PROMPT_TEMPLATE, LABELED_PROMPT_TEMPLATE};
use crate::storage::{read_table, write_records};

#[derive(Debug, Serialize)]
struct FormattedPrompt<'a> {
    report: &'a str,
    prompt: String,
}

/// Reads input notes.
///
/// - `.csv`: one report per row, taken from the `report` column
/// - `.txt`: the whole file is a single report
pub fn read_reports(path: &Path) -> Result<Vec<String>, AppError> {
    if !path.exists() {
        return Err(AppError::InputNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("csv") => {
            let table = read_table(path)?;
            table.require_columns(&["report"])?;
            Ok(table
                .rows
                .into_iter()
                .map(|mut row| row.remove("report").unwrap_or_default())
                .collect())
        }
        Some("txt") => {
            let content = fs::read_to_string(path)?;
            Ok(vec![content.trim().to_string()])
        }
        _ => Err(AppError::UnsupportedInput(path.display().to_string())),
    }
}

/// Flattens a note onto one line.
pub fn clean_text(text: &str) -> String {
    text.replace('\n', " ").trim().to_string()
}

pub fn format_prompt(report: &str, format: ReplyFormat) -> String {
    let template = match format {
        ReplyFormat::StructuredJson => JSON_PROMPT_TEMPLATE,
        ReplyFormat::LabeledText => LABELED_PROMPT_TEMPLATE,
    };
    template.replace("{report}", report)
}

/// Preprocessing stage: notes in, `report`/`prompt` CSV out.
/// The `report` column keeps the original text; only the prompt is cleaned.
pub fn preprocess(input: &Path, output: &Path, format: ReplyFormat) -> Result<usize, AppError> {
    let reports = read_reports(input)?;

    let rows: Vec<FormattedPrompt> = reports
        .iter()
        .map(|report| FormattedPrompt {
            report,
            prompt: format_prompt(&clean_text(report), format),
        })
        .collect();

    write_records(output, &PROMPT_FIELDS, &rows)?;
    info!(
        rows = rows.len(),
        "Formatted prompts saved to {}.",
        output.display()
    );
    Ok(rows.len())
}
