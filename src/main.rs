use adk_agents::{cli, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "adk-agents")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "MCP-backed analysis agents for Google ADK projects", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Override the MCP server endpoint
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Override the MCP server name
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review a Rust file for ADK compliance
    Review {
        /// File to review
        file: PathBuf,
    },

    /// Validate architectural patterns in a file
    Architecture {
        /// File to validate
        file: PathBuf,
    },

    /// Query ADK documentation
    Docs {
        /// Documentation query
        query: String,

        /// Current file for context-aware answers
        #[arg(short, long)]
        file: Option<String>,
    },

    /// Get project assistance for a free-form request
    Assist {
        /// What you need help with
        request: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Review { file } => cli::review::run(&file, cli.endpoint, cli.server).await,
        Commands::Architecture { file } => {
            cli::architecture::run(&file, cli.endpoint, cli.server).await
        }
        Commands::Docs { query, file } => {
            cli::docs::run(&query, file, cli.endpoint, cli.server).await
        }
        Commands::Assist { request } => cli::assist::run(&request, cli.endpoint, cli.server).await,
    }
}
