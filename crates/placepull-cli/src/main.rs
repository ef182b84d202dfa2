use std::path::PathBuf;

use clap::Parser;

mod form;
mod prompt;
mod run;

use form::{FormInput, FormSession, FormState};

#[derive(Debug, Parser)]
#[command(name = "placepull")]
#[command(about = "Search the Places API and export enriched results as CSV")]
struct Cli {
    /// Free-text search, e.g. "restaurants in New York".
    #[arg(long)]
    query: Option<String>,

    /// Latitude for a coordinate-based search.
    #[arg(long)]
    lat: Option<String>,

    /// Longitude for a coordinate-based search.
    #[arg(long)]
    lng: Option<String>,

    /// Search radius in meters (honored only with --lat/--lng).
    #[arg(long)]
    radius: Option<u32>,

    /// Output file path (defaults to the configured places_data.csv).
    #[arg(long)]
    output: Option<PathBuf>,
}

impl Cli {
    fn has_criteria_flags(&self) -> bool {
        self.query.is_some() || self.lat.is_some() || self.lng.is_some()
    }

    fn to_form_input(&self) -> FormInput {
        FormInput {
            query: self.query.clone().unwrap_or_default(),
            latitude: self.lat.clone().unwrap_or_default(),
            longitude: self.lng.clone().unwrap_or_default(),
            radius_m: self.radius,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = placepull_core::load_app_config()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();
    tracing::debug!(?config, "loaded configuration");

    let mut input = if cli.has_criteria_flags() {
        cli.to_form_input()
    } else {
        prompt::collect_input()?
    };
    let output = cli.output.unwrap_or_else(|| config.output_path.clone());

    let mut session = FormSession::new();
    let criteria = match session.submit(&mut input) {
        Ok(criteria) => criteria,
        Err(e) => anyhow::bail!("{e}"),
    };

    println!("Fetching places with the given criteria...");
    let outcome = run::run_pipeline(&config, &criteria, &output).await?;

    match session.complete(outcome.count, outcome.search_error.is_some()) {
        FormState::Succeeded { count } => {
            println!("Found {count} places. Wrote {}.", output.display());
            Ok(())
        }
        FormState::EmptyResult => {
            println!("No places found with the specified criteria.");
            Ok(())
        }
        _ => anyhow::bail!(
            "search failed before returning any results{}",
            outcome
                .search_error
                .map(|e| format!(": {e}"))
                .unwrap_or_default()
        ),
    }
}
