use anyhow::Result;
use clap::{Parser, Subcommand};

/// devconnect - developer social network API
#[derive(Parser)]
#[command(name = "devconnect")]
#[command(about = "Profiles, posts and token auth for a developer community", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run database migrations
    Migrate,
    /// Drop database if exists and recreate with migrations
    Reset,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = devconnect::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    devconnect::observability::init_observability(
        "devconnect",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => devconnect::server::serve(config, host, port).await,
        Commands::Migrate => devconnect::cli::migrate(&config).await,
        Commands::Reset => devconnect::cli::reset(&config).await,
    }
}
