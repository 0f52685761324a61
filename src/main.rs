use anyhow::Result;
use clap::{Parser, Subcommand};
use custintel::{
    generate_dataset, normalize::normalize_rows, rows::read_rows, CustomerCell, Loader,
    LoaderConfig,
};
use std::{
    env,
    io::{self, Write},
    path::PathBuf,
    time::Duration,
};
use tracing::{info, Level};
use tracing_subscriber::{fmt, EnvFilter};
use url::Url;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Customer intelligence by region and end-user segment"
)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the deterministic demo dataset.
    Generate {
        #[arg(long)]
        json: bool,
    },
    /// Normalize spreadsheet rows from a JSON array or CSV file.
    Normalize {
        rows: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Load from the remote endpoint, falling back to generated data.
    Load {
        /// Overrides CUSTINTEL_ENDPOINT.
        #[arg(long)]
        endpoint: Option<Url>,
        #[arg(long)]
        file_path: Option<String>,
        /// Overrides CUSTINTEL_TIMEOUT_SECS.
        #[arg(long)]
        timeout_secs: Option<u64>,
        #[arg(long)]
        json: bool,
    },
}

fn print_cells(cells: &[CustomerCell], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, cells)?;
        writeln!(out)?;
        return Ok(());
    }
    for cell in cells {
        writeln!(
            out,
            "{} / {}: {} customers",
            cell.region, cell.end_user_segment, cell.customer_count
        )?;
    }
    let total: usize = cells.iter().map(|c| c.customer_count).sum();
    writeln!(out, "total: {} customers in {} cells", total, cells.len())?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive(log_level.parse().unwrap_or(Level::INFO.into())),
        )
        .init();

    let args = Args::parse();
    match args.command {
        Command::Generate { json } => print_cells(&generate_dataset(), json)?,
        Command::Normalize { rows, json } => {
            let records = read_rows(&rows)?;
            let report = normalize_rows(&records);
            info!(
                processed = report.processed,
                skipped = report.skipped,
                "normalized {}",
                rows.display()
            );
            print_cells(&report.cells, json)?;
        }
        Command::Load {
            endpoint,
            file_path,
            timeout_secs,
            json,
        } => {
            let mut config = LoaderConfig::from_env()?;
            if let Some(url) = endpoint {
                config.endpoint = Some(url);
            }
            if let Some(secs) = timeout_secs {
                config = config.with_timeout(Duration::from_secs(secs));
            }
            let mut loader = Loader::new(config);
            let loaded = loader.load(file_path.as_deref()).await;
            info!(source = %loaded.source, loaded_at = %loaded.loaded_at, "dataset ready");
            print_cells(&loaded.cells, json)?;
        }
    }
    Ok(())
}
