//! Command-line front end for the Eagle local HTTP API.
//!
//! Every subcommand maps onto one API call and prints Eagle's JSON reply.

use std::time::Duration;

use clap::Parser;
use eagle::EagleClient;
use tracing::{debug, info};

mod commands;

use commands::{Command, Output};

// ============================================================================
// CLI Arguments
// ============================================================================

/// Talk to a running Eagle app from the command line.
#[derive(Parser, Debug)]
#[command(name = "eagle")]
#[command(version, about, long_about = None)]
struct Args {
    /// Full Eagle API address (overrides --host and --port)
    #[arg(long, env = "EAGLE_URL")]
    url: Option<String>,

    /// Eagle API host
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Eagle API port
    #[arg(long, default_value_t = 41595)]
    port: u16,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    /// The API address to use.
    fn base_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!("http://{}:{}", self.host, self.port),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing
    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();

    let url = args.base_url();
    info!(eagle_url = %url, timeout = args.timeout, "Connecting to Eagle");

    let client = EagleClient::builder()
        .url(url)
        .timeout(Duration::from_secs(args.timeout))
        .try_build()?;

    debug!(command = ?args.command, "Running command");
    match commands::execute(&client, &args.command).await? {
        Output::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
        Output::Text(text) => println!("{}", text),
    }

    Ok(())
}
