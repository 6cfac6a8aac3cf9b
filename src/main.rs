use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use tracing::info;

use polmap::config::SnapshotArgs;
use polmap::logging::{configure_logging, SERVE_STDOUT_FILTER, VIEW_STDOUT_FILTER};
use polmap::{view, web};

#[derive(Parser)]
#[command(name = "polmap", about = "Political issue map built from clustered news snapshots")]
struct Cli {
    #[command(flatten)]
    source: SnapshotArgs,

    /// Directory for the daily-rolling log file
    #[arg(long, env = "POLMAP_LOG_DIR", default_value = "logs", global = true)]
    log_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the issue board and the JSON API
    Serve {
        /// Address to bind
        #[arg(long, env = "HOST", default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(long, env = "PORT", default_value_t = 8080)]
        port: u16,
    },

    /// Print the current issue board to the terminal
    View,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let provider = cli.source.provider()?;

    match cli.command {
        Commands::Serve { host, port } => {
            configure_logging(&cli.log_dir, SERVE_STDOUT_FILTER)?;
            info!("Starting polmap {}", env!("CARGO_PKG_VERSION"));
            web::serve(SocketAddr::new(host, port), provider).await?;
        }
        Commands::View => {
            configure_logging(&cli.log_dir, VIEW_STDOUT_FILTER)?;
            view::print_issue_board(&provider).await?;
        }
    }

    Ok(())
}
