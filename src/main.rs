//! Bias Lens command-line entry point.
//!
//! Logs go to stderr; stdout carries only the report.
//!
//! Coverage is excluded because the binary needs a live API key.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::Read;

use clap::Parser;

use bias_lens::analysis::Context;
use bias_lens::error::InputError;
use bias_lens::{presets, report};

/// Audit a decision narrative for cognitive biases.
#[derive(Debug, Parser)]
#[command(name = "bias-lens", version, about)]
struct Cli {
    /// Situational context: none, high-stakes, time-pressure or peer-pressure.
    #[arg(short, long, default_value = "none")]
    context: Context,

    /// Analyze a built-in scenario (hiring, investment, pricing).
    #[arg(short, long, conflicts_with = "text")]
    preset: Option<String>,

    /// Print the result as JSON instead of a report.
    #[arg(long)]
    json: bool,

    /// Decision text. Read from stdin when omitted.
    text: Option<String>,
}

fn read_text(cli: &Cli) -> Result<String, InputError> {
    if let Some(name) = cli.preset.as_deref() {
        return presets::lookup(name).map(|s| s.text.to_string());
    }
    if let Some(text) = cli.text.clone() {
        return Ok(text);
    }
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Initialize logging to stderr only (stdout is for the report)
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string())
                .parse()
                .unwrap_or_else(|_| tracing_subscriber::filter::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    let text = match read_text(&cli) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    tracing::debug!(context = %cli.context, text_bytes = text.len(), "Starting analysis");

    let result = match bias_lens::analyze(&text, cli.context).await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!("Analysis error: {e}");
            eprintln!("{}", e.user_message());
            std::process::exit(1);
        }
    };

    if cli.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                tracing::error!("Failed to serialize result: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", report::render(&result));
    }
}
