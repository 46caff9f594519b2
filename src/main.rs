//! HamGO CLI
//!
//! Command-line client for a HamGO node:
//! - Watch the message cache live
//! - List cached messages once
//! - Spread a CQ message
//! - Generate a config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use hamgo_client::config::{generate_default_config, Config, Environment};
use hamgo_client::logging::init_logging;
use hamgo_client::{ApiClient, AppState, Composer, HomeView, MessageApi, Poller};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "hamgo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Client for the HamGO messaging node")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API endpoint, e.g. http://127.0.0.1:9125/api
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Use the production endpoint defaults
    #[arg(long, global = true)]
    pub production: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Poll the node and redraw the message list on every update
    Watch,

    /// Fetch the message cache once
    List {
        /// Maximum number of messages to request
        #[arg(short, long)]
        max: Option<usize>,
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Spread a CQ message
    Send {
        /// Your callsign
        #[arg(long)]
        callsign: String,
        /// Address you can be reached at
        #[arg(long)]
        ip: String,
        /// Message text
        message: String,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if cli.production {
        config.api.environment = Environment::Production;
    }
    if let Some(endpoint) = &cli.endpoint {
        config.api.endpoint = Some(endpoint.clone());
    }

    init_logging(&config.logging);

    match cli.command {
        Commands::Watch => watch(&config).await?,

        Commands::List { max, format } => {
            let client = ApiClient::new(&config.api)?;
            let messages = match max.or(config.poll.max_messages) {
                Some(max) => client.fetch_recent(max).await,
                None => client.fetch_messages().await,
            }
            .with_context(|| format!("Failed to fetch messages from {}", client.endpoint()))?;

            match format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&messages)?),
                _ => {
                    if messages.is_empty() {
                        println!("No messages yet");
                    }
                    for msg in &messages {
                        println!("{}", msg);
                    }
                }
            }
        }

        Commands::Send {
            callsign,
            ip,
            message,
        } => {
            let api: Arc<dyn MessageApi> = Arc::new(ApiClient::new(&config.api)?);
            let state = AppState::new();
            let composer = Composer::new(api, state.clone());

            let result = composer.send(&callsign, &ip, &message).await;

            let (_, toasts) = state.snapshot().await;
            for toast in &toasts {
                println!("{}", toast.render());
            }

            result?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// Poll until Ctrl-C, redrawing the home view on each state change
async fn watch(config: &Config) -> anyhow::Result<()> {
    let client = ApiClient::new(&config.api)?.with_limit(config.poll.max_messages);
    tracing::info!("HamGO client v{} watching {}", env!("CARGO_PKG_VERSION"), client.endpoint());

    let api: Arc<dyn MessageApi> = Arc::new(client);
    let state = AppState::new();
    let view = HomeView::from_config(config);
    let clear = std::io::stdout().is_terminal();

    let mut updates = state.subscribe();
    let handle = Arc::new(Poller::from_config(api, state.clone(), &config.poll)).start();

    draw(&view, &state, clear).await;

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => break,
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                draw(&view, &state, clear).await;
            }
        }
    }

    handle.dispose();
    tracing::info!("Shutting down...");
    Ok(())
}

async fn draw(view: &HomeView, state: &AppState, clear: bool) {
    let (home, toasts) = state.snapshot().await;
    if clear {
        print!("\x1B[2J\x1B[H");
    }
    println!("{}", view.render(&home, &toasts));
}
