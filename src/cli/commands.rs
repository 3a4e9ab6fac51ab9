//! CLI command definitions and handlers

use clap::Subcommand;

/// Commands for the translation relay
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP relay server
    Server {
        /// Bind address (default: 0.0.0.0)
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port (default: 3001)
        #[arg(short, long, default_value_t = 3001)]
        port: u16,

        /// Enable debug mode
        #[arg(long)]
        debug: bool,
    },

    /// Translate a single text from the command line
    Translate {
        /// Text to translate
        #[arg(short, long)]
        text: String,

        /// Direction tag: zh2en or en2zh (anything else passes through)
        #[arg(short, long)]
        direction: String,
    },
}

/// Handle server command
pub async fn handle_server(host: String, port: u16, debug: bool) -> anyhow::Result<()> {
    use crate::core::config::RelayConfig;
    use crate::server::api::run_server;
    use tracing::info;

    if debug {
        std::env::set_var("RUST_LOG", "debug");
    }

    let mut config = RelayConfig::load()?;
    config.host = host;
    config.port = port;

    info!("Starting HTTP server on {}", config.bind_addr());
    println!("🚀 Relay listening on http://{}", config.bind_addr());

    run_server(config).await?;

    Ok(())
}

/// Handle one-shot translate command
pub async fn handle_translate(text: String, direction: String) -> anyhow::Result<()> {
    use crate::core::client::Translator;
    use crate::core::config::RelayConfig;
    use crate::core::models::Direction;
    use std::sync::Arc;
    use tracing::info;

    let config = Arc::new(RelayConfig::load()?);

    let result = match Direction::from_tag(&direction) {
        Some(dir) => {
            let translator = Translator::new(config, dir)?;
            translator.translate(&text).await?
        }
        None => text.clone(),
    };

    info!("Translated '{}' -> '{}' ({})", text, result, direction);
    println!("{}", result);

    Ok(())
}
