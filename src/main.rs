//! # DocSage — grounded technical Q&A over a document corpus.
//!
//! Usage:
//!   docsage serve                  # start the HTTP gateway
//!   docsage serve --port 8080
//!   docsage ask "What is Lambda?"  # one-shot answer on the CLI

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use docsage_core::config::DocSageConfig;
use docsage_engine::AnswerEngine;
use docsage_retrieval::FsDocumentStore;

#[derive(Parser)]
#[command(name = "docsage", version, about = "📚 DocSage — grounded technical Q&A")]
struct Cli {
    /// Path to config.toml (default: ~/.docsage/config.toml)
    #[arg(long, global = true)]
    config: Option<String>,

    /// Override the document corpus directory
    #[arg(long, global = true)]
    docs_dir: Option<String>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the HTTP gateway (default)
    Serve {
        /// Bind address override
        #[arg(long)]
        host: Option<String>,
        /// Port override
        #[arg(long)]
        port: Option<u16>,
    },
    /// Answer a single question and print the JSON reply
    Ask { prompt: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug,hyper=info" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            let expanded = shellexpand::tilde(path).to_string();
            DocSageConfig::load_from(std::path::Path::new(&expanded))?
        }
        None => DocSageConfig::load()?,
    };
    if let Some(dir) = &cli.docs_dir {
        config.store.docs_dir = dir.clone();
    }

    let store = FsDocumentStore::from_config(&config.store);
    let provider = docsage_providers::create_provider(&config)?;
    match provider.health_check().await {
        Ok(true) => tracing::info!(
            "✅ Provider '{}' ready (model {})",
            provider.name(),
            config.default_model
        ),
        _ => tracing::warn!(
            "⚠️ Provider '{}' not ready — check API key or endpoint",
            provider.name()
        ),
    }

    let engine = Arc::new(AnswerEngine::new(&config, provider, Box::new(store)));

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let mut gateway = config.gateway.clone();
            if let Some(host) = host {
                gateway.host = host;
            }
            if let Some(port) = port {
                gateway.port = port;
            }
            docsage_gateway::start(&gateway, engine).await
        }
        Command::Ask { prompt } => {
            let request_id = uuid::Uuid::new_v4().to_string();
            let reply = engine.ask(&prompt, &request_id).await?;
            println!("{}", serde_json::to_string_pretty(&reply)?);
            Ok(())
        }
    }
}
