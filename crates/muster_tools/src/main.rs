//! Crowns Muster - Development Tools

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use muster_core::evaluation::evaluate;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "muster-tools")]
#[command(about = "Development tools for Crowns Muster")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a catalog file for dangling references
    CheckCatalog {
        /// Path to catalog file
        #[arg(default_value = "assets/data/catalog.ron")]
        path: PathBuf,
    },
    /// Price and validate a saved roster
    Evaluate {
        /// Path to roster file
        roster: PathBuf,
        /// Path to catalog file
        #[arg(long, default_value = "assets/data/catalog.ron")]
        catalog: PathBuf,
        /// Print the evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

fn run_evaluate(roster: &Path, catalog: &Path, json: bool) -> Result<bool, String> {
    let catalog = muster_tools::load::load_catalog(catalog).map_err(|e| e.to_string())?;
    let roster =
        muster_tools::load::load_roster(roster, &catalog).map_err(|e| e.to_string())?;
    let evaluation = evaluate(&roster, &catalog);

    if json {
        let text = serde_json::to_string_pretty(&evaluation).map_err(|e| e.to_string())?;
        println!("{text}");
    } else {
        print!(
            "{}",
            muster_tools::report::render_evaluation(&roster, &evaluation)
        );
    }
    Ok(evaluation.report.is_legal())
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::CheckCatalog { path } => {
            tracing::info!("Checking catalog: {}", path.display());
            match muster_tools::validate::check_catalog(&path) {
                Ok(()) => tracing::info!("Catalog is consistent"),
                Err(e) => {
                    tracing::error!("Catalog check failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Evaluate {
            roster,
            catalog,
            json,
        } => match run_evaluate(&roster, &catalog, json) {
            Ok(true) => {}
            Ok(false) => std::process::exit(1),
            Err(e) => {
                tracing::error!("Evaluation failed: {e}");
                std::process::exit(1);
            }
        },
    }
}
