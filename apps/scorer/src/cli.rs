use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::assessment::ReplyFormat;

pub const DEFAULT_NOTES: &str = "admission_notes/patient_notes_1.txt";
pub const DEFAULT_PROMPTS: &str = "output/formatted_prompts.csv";
pub const DEFAULT_RESULTS: &str = "output/results.csv";
pub const DEFAULT_PARSED: &str = "output/parsed_results.csv";

#[derive(Parser, Debug)]
#[command(
    name = "scorer",
    version,
    about = "Scores clinical notes for mood, anxiety, depression and suicidality"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        value_enum,
        help = "Reply format the model is asked for and parsed as (overrides REPLY_FORMAT)"
    )]
    pub reply_format: Option<ReplyFormat>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn raw notes (.csv with a `report` column, or .txt) into prompts
    Preprocess {
        #[arg(long, default_value = DEFAULT_NOTES)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_PROMPTS)]
        output: PathBuf,
    },
    /// Send every prompt to the model and write one record per report
    Infer {
        #[arg(long, default_value = DEFAULT_PROMPTS)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_RESULTS)]
        output: PathBuf,
    },
    /// Check the inference output schema and normalize its fields
    Validate {
        #[arg(long, default_value = DEFAULT_RESULTS)]
        input: PathBuf,
        #[arg(long, default_value = DEFAULT_PARSED)]
        output: PathBuf,
    },
    /// Preprocess, infer and validate in one go
    Run {
        #[arg(long, default_value = DEFAULT_NOTES)]
        input: PathBuf,
        #[arg(long, default_value = "output")]
        output_dir: PathBuf,
    },
}
