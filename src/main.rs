use std::collections::HashMap;
use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use console::style;
use tracing_subscriber::EnvFilter;

mod api;
mod config;

use api::NewsClient;

/// Fetch headlines from a news API and print the raw response.
#[derive(Parser)]
#[command(name = "headlines", version, about)]
struct Cli {
    /// Env-style file holding the API credential
    #[arg(long, default_value = ".env", value_name = "FILE")]
    env_file: PathBuf,

    /// Base URL requests are issued against
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    base_url: String,

    /// Endpoint path appended to the base URL
    #[arg(long, default_value = "top-headlines/")]
    endpoint: String,

    /// Restrict headlines to a two-letter country code
    #[arg(long, default_value = "us")]
    country: String,

    /// Restrict headlines to a category
    #[arg(long, default_value = "technology")]
    category: String,

    /// Extra query parameter; repeatable, overrides built-in filters
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    params: Vec<(String, String)>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{raw}'")),
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Diagnostics go to stderr; stdout is reserved for the response.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let api_key = config::load_credential(&cli.env_file, config::API_KEY_VAR)?;
    let client = NewsClient::new(&cli.base_url, &api_key)?;

    let mut params = HashMap::new();
    params.insert("country".to_string(), cli.country);
    params.insert("category".to_string(), cli.category);
    for (key, value) in cli.params {
        params.insert(key, value);
    }

    let response = client.fetch_news(&cli.endpoint, &params).await?;

    println!("Status: {}", response.status);
    println!("Body:\n{}", response.body);

    Ok(())
}
