use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod crawl;
mod export;

#[derive(Debug, Parser)]
#[command(name = "gnavcrawl")]
#[command(about = "Restaurant directory crawler")]
struct Cli {
    /// Number of listings to collect (overrides GNAVCRAWL_LISTING_DEMAND).
    #[arg(long)]
    count: Option<usize>,

    /// Destination CSV path (overrides GNAVCRAWL_OUTPUT_PATH).
    #[arg(long)]
    output: Option<PathBuf>,

    /// Drive a headless browser instead of static HTML fetches.
    #[arg(long)]
    render: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut cfg = gnavcrawl_core::load_app_config_from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_level)),
        )
        .init();

    if let Some(count) = cli.count {
        cfg.listing_demand = count;
    }
    if let Some(output) = cli.output {
        cfg.output_path = output;
    }

    if export::is_file_locked(&cfg.output_path) {
        anyhow::bail!(
            "{} is open in another program; close it and try again",
            cfg.output_path.display()
        );
    }

    tracing::info!(
        demand = cfg.listing_demand,
        render = cli.render,
        "crawl starting"
    );

    let records = if cli.render {
        crawl::run_rendered(&cfg).await?
    } else {
        crawl::run_static(&cfg).await?
    };

    export::write_csv(&records, &cfg.output_path)?;
    tracing::info!(
        path = %cfg.output_path.display(),
        records = records.len(),
        "CSV written"
    );

    Ok(())
}
