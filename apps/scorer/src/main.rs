mod assessment;
mod cli;
mod config;
mod errors;
mod llm_client;
mod models;
mod preprocess;
mod storage;

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::assessment::inference::run_inference;
use crate::assessment::validation::run_validation;
use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::assessment::ReplyFormat;
use crate::preprocess::preprocess;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let reply_format = cli.reply_format.unwrap_or(config.reply_format);
    info!(
        "Starting scorer v{} (reply format: {})",
        env!("CARGO_PKG_VERSION"),
        reply_format
    );

    match cli.command {
        Commands::Preprocess { input, output } => {
            preprocess(&input, &output, reply_format)?;
        }
        Commands::Infer { input, output } => {
            infer(&config, &input, &output, reply_format).await?;
        }
        Commands::Validate { input, output } => {
            run_validation(&input, &output)?;
        }
        Commands::Run { input, output_dir } => {
            let prompts = output_dir.join("formatted_prompts.csv");
            let results = output_dir.join("results.csv");
            let parsed = output_dir.join("parsed_results.csv");

            // Fail on a missing key before doing any work.
            let completion = config.completion_config()?;

            info!("Preprocessing data...");
            preprocess(&input, &prompts, reply_format)?;

            info!("Running inference...");
            let llm = LlmClient::new(completion)?;
            run_inference(&prompts, &results, &llm, reply_format).await?;

            info!("Postprocessing results...");
            run_validation(&results, &parsed)?;

            info!(
                "Pipeline completed successfully. Results saved to: {}",
                parsed.display()
            );
        }
    }

    Ok(())
}

async fn infer(config: &Config, input: &Path, output: &Path, format: ReplyFormat) -> Result<()> {
    let llm = LlmClient::new(config.completion_config()?)?;
    info!("LLM client initialized (model: {})", llm.model());
    run_inference(input, output, &llm, format).await?;
    Ok(())
}
