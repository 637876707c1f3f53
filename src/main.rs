use clap::{Parser, Subcommand};
use renshuu_tracker::config::{Config, Dimensions};
use renshuu_tracker::fetcher::RenshuuClient;
use renshuu_tracker::loader::build_day_table;
use renshuu_tracker::metrics::build_views;
use renshuu_tracker::output::write_views;
use renshuu_tracker::storage::load_snapshots;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "renshuu-tracker", about = "Track Renshuu study progress over time")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the current profile and append it to the log
    Fetch,
    /// Build the derived views from the accumulated log
    Process {
        /// Directory the view files are written to
        #[arg(long, default_value = "views")]
        out: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Fetch => {
            let client = RenshuuClient::new(&config)?;
            client.fetch_and_log(&config.log_path).await?;
        }
        Command::Process { out } => {
            let records = load_snapshots(&config.log_path).await?;
            let table = build_day_table(&records)?;
            info!("loaded {} daily entries", table.len());

            let views = build_views(&table, &Dimensions::default());
            write_views(&out, &views).await?;
        }
    }

    Ok(())
}
