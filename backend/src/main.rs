//! Ideation CLI - development backend for the ideation portal
//!
//! # Commands
//!
//! ```bash
//! ideation serve                        # Start HTTP server (port 3000)
//! ideation serve --seed seed.json       # Start with custom content
//! ideation seed -o seed.json            # Write the demo content as JSON
//! ideation suggest-titles "Some text"   # Ask the AI for titles
//! ```

use clap::{Parser, Subcommand};
use ideation::{AiClient, SeedData, ServerConfig};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ideation")]
#[command(about = "Development backend for the ideation portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start HTTP server
    Serve {
        /// Port to listen on (default: IDEATION_PORT or 3000)
        #[arg(short, long)]
        port: Option<u16>,

        /// JSON seed file (default: built-in demo content)
        #[arg(short, long)]
        seed: Option<PathBuf>,

        /// Origin allowed to send credentialed requests
        #[arg(long)]
        frontend_origin: Option<String>,
    },

    /// Print the built-in demo content as a seed file
    Seed {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Suggest titles for a piece of content
    SuggestTitles {
        /// Free-text content
        content: String,

        /// Model override
        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            port,
            seed,
            frontend_origin,
        } => cmd_serve(port, seed, frontend_origin).await,

        Commands::Seed { output } => cmd_seed(output.as_deref()),

        Commands::SuggestTitles { content, model } => {
            cmd_suggest_titles(&content, model.as_deref()).await
        }
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_serve(
    port: Option<u16>,
    seed: Option<PathBuf>,
    frontend_origin: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = ServerConfig::from_env();
    if let Some(port) = port {
        config.port = port;
    }
    if seed.is_some() {
        config.seed = seed;
    }
    if let Some(origin) = frontend_origin {
        config.frontend_origin = origin;
    }

    ideation::server::start_server(config).await
}

fn cmd_seed(output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let seed = SeedData::demo();
    eprintln!(
        "🌱 Demo content: {} ideas, {} sub-ideas, {} proposals, {} prototypes",
        seed.ideas.len(),
        seed.sub_ideas.len(),
        seed.proposals.len(),
        seed.prototypes.len()
    );

    let json = serde_json::to_string_pretty(&seed)?;
    write_output(&json, output)?;
    Ok(())
}

async fn cmd_suggest_titles(
    content: &str,
    model: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = AiClient::from_env()?;
    if let Some(model) = model {
        client = client.with_model(model);
    }

    eprintln!("🤖 Suggesting titles with {}", client.model());
    let titles = client.suggest_titles(content).await?;

    if titles.is_empty() {
        eprintln!("   No suggestions");
    }
    for title in titles {
        println!("{}", title);
    }
    Ok(())
}

fn write_output(content: &str, path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
            eprintln!("💾 Output written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
