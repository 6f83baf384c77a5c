mod config;
mod errors;
mod extract;
mod llm_client;
mod models;
mod recommend;
mod report;
mod search;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::models::profile::JobPreference;
use crate::search::SearchClient;

/// Turn a PDF résumé into ranked job recommendations.
#[derive(Parser, Debug)]
#[command(name = "jobscout", version)]
struct Cli {
    /// Path to the résumé PDF
    cv_pdf: PathBuf,

    /// Location filter, e.g. "Berlin", "Remote", or "Shanghai OR Remote"
    #[arg(long)]
    location: Option<String>,

    /// How many recommendations to keep after ranking
    #[arg(long, default_value_t = 8)]
    top_k: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Structured logging goes to stderr; stdout is reserved for the report
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting jobscout v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::anthropic(config.anthropic_api_key.clone(), config.model.clone());
    info!("LLM client initialized (model: {})", config.model);

    let search = SearchClient::tavily(config.tavily_api_key.clone());

    let cv_text = extract::read_pdf_text(&cli.cv_pdf)?;
    info!(
        "Extracted {} characters from {}",
        cv_text.len(),
        cli.cv_pdf.display()
    );

    let pref = JobPreference {
        target_roles: Vec::new(),
        location: cli.location,
        constraints: Vec::new(),
    };

    let postings = recommend::recommend(&llm, &search, &cv_text, pref, cli.top_k).await?;

    println!("{}", report::render_json(&postings)?);
    println!();
    print!("{}", report::render_table(&postings, cli.top_k));

    Ok(())
}
