use std::path::Path;

use tracing::{debug, info};

use crate::assessment::assembler::assemble;
use crate::assessment::extractor::extract;
use crate::errors::AppError;
use crate::llm_client::CompletionClient;
use crate::models::assessment::{AssessmentRecord, ReplyFormat, RECORD_FIELDS};
use crate::storage::{read_table, write_records};

/// Columns the inference stage needs from the preprocessed file.
pub const PROMPT_FIELDS: [&str; 2] = ["report", "prompt"];

/// One row of the preprocessed prompts file.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRow {
    pub report: String,
    pub prompt: String,
}

/// Sends each prompt in order and assembles one record per reply.
///
/// Strictly sequential. Any completion failure aborts the batch and is
/// returned as-is; extraction problems never abort (they become sentinels).
pub async fn assess_all(
    rows: &[PromptRow],
    client: &dyn CompletionClient,
    format: ReplyFormat,
) -> Result<Vec<AssessmentRecord>, AppError> {
    let mut records = Vec::with_capacity(rows.len());

    for (idx, row) in rows.iter().enumerate() {
        let reply = client.send(&row.prompt).await?;
        debug!(row = idx, reply_len = reply.len(), "received reply");

        let results = extract(&reply, format);
        records.push(assemble(&row.report, &results));
    }

    Ok(records)
}

/// Inference stage: read prompts, query the model, write all records once.
/// Nothing is written if any call fails.
pub async fn run_inference(
    input: &Path,
    output: &Path,
    client: &dyn CompletionClient,
    format: ReplyFormat,
) -> Result<usize, AppError> {
    let table = read_table(input)?;
    table.require_columns(&PROMPT_FIELDS)?;

    let rows: Vec<PromptRow> = table
        .rows
        .iter()
        .map(|r| PromptRow {
            report: r.get("report").cloned().unwrap_or_default(),
            prompt: r.get("prompt").cloned().unwrap_or_default(),
        })
        .collect();

    info!(rows = rows.len(), reply_format = %format, "running inference");
    let records = assess_all(&rows, client, format).await?;
    write_records(output, &RECORD_FIELDS, &records)?;

    info!("Results saved to {}.", output.display());
    Ok(records.len())
}
