//! bookscroll - Entry Point

use bookscroll::config::CliOverrides;
use bookscroll::model::ViewMode;
use bookscroll::view::ColorConfig;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// bookscroll - browse a paginated remote book catalog in the terminal
#[derive(Parser, Debug)]
#[command(name = "bookscroll")]
#[command(version)]
#[command(about = "TUI for browsing, searching and sorting a remote book catalog")]
pub struct Args {
    /// Catalog endpoint URL (overrides config file and BOOKSCROLL_ENDPOINT)
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Records requested per page (must be positive)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..))]
    pub page_size: Option<u32>,

    /// Layout on startup
    #[arg(long, value_enum)]
    pub view: Option<ViewMode>,

    /// Start with search query applied
    #[arg(short, long)]
    pub search: Option<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            endpoint: self.endpoint.clone(),
            page_size: self.page_size,
            view: self.view,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = bookscroll::config::resolve(args.config.clone(), args.overrides())?;

    bookscroll::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let color = ColorConfig::from_env_and_args(args.no_color);
    bookscroll::view::run_with_config(&config, args.search.as_deref(), color)?;

    Ok(())
}
