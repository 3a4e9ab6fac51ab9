//! Main entry point for the translation relay CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use translate_relay::cli::commands::{self, Commands};

/// Translation Relay - bidirectional zh/en translation service
#[derive(Parser, Debug)]
#[command(name = "translate-relay", version, about, long_about = None)]
struct Args {
    /// Provider endpoint (optional, defaults to TRANSLATE_API_ENDPOINT env var)
    #[arg(long)]
    endpoint: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("translate_relay={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    // Override config with CLI args if provided
    if let Some(endpoint) = args.endpoint {
        std::env::set_var("TRANSLATE_API_ENDPOINT", endpoint);
    }

    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    }

    // Execute command
    match args.command {
        Some(Commands::Server { host, port, debug }) => {
            commands::handle_server(host, port, debug).await?;
        }
        Some(Commands::Translate { text, direction }) => {
            commands::handle_translate(text, direction).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
