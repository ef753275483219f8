//! Postplan - social-media content-plan generator
//!
//! Given a topic, a day count and a posts-per-day count, generates one post
//! idea per (day, slot) pair - via a hosted chat-completions model when an
//! API key is configured, via a local fixed-vocabulary randomizer otherwise -
//! prints the plan as a table and exports it as CSV and XLSX.

use anyhow::Result;
use clap::{Parser, Subcommand};

use postplan_core::ProviderId;

mod commands;
mod config;
mod table;

use commands::generate::GenerateArgs;

/// Postplan - Content Plan Generator
#[derive(Parser)]
#[command(name = "postplan")]
#[command(about = "Generate a social-media content plan for any topic", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a content plan and export it (default)
    Generate(GenerateArgs),

    /// List available providers and their credential status
    Providers,

    /// Manage stored API keys
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
}

#[derive(Subcommand)]
enum AuthCommands {
    /// Store an API key for a provider
    Set { provider: ProviderId, key: String },
    /// Show stored keys (masked)
    Show,
    /// Remove a stored API key
    Clear { provider: ProviderId },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the table and file paths
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let cli = Cli::parse();

    // No subcommand: run generate with its defaults, the single trigger action
    match cli.command {
        Some(Commands::Generate(args)) => commands::generate::run(args).await,
        None => commands::generate::run(GenerateArgs::default()).await,
        Some(Commands::Providers) => commands::providers::run(),
        Some(Commands::Auth { action }) => match action {
            AuthCommands::Set { provider, key } => commands::auth::set(provider, key),
            AuthCommands::Show => commands::auth::show(),
            AuthCommands::Clear { provider } => commands::auth::clear(provider),
        },
    }
}
