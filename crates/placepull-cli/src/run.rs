//! Pipeline driver: search, enrich, tabulate, write the CSV artifact.

use std::path::Path;
use std::time::Duration;

use placepull_core::AppConfig;
use placepull_export::{to_rows, write_csv};
use placepull_places::{enrich, PlacesClient, SearchCriteria};

/// What the pipeline produced, for the form to fold into its terminal state.
pub struct PipelineOutcome {
    pub count: usize,
    pub search_error: Option<String>,
}

/// Runs the full pipeline for one set of criteria and writes the CSV to
/// `output` when at least one place was found.
///
/// A search that fails mid-pagination is reported as a warning and the run
/// continues with the pages already collected. Zero places means no file is
/// written.
///
/// # Errors
///
/// Returns an error if the client cannot be constructed, the rows fail to
/// serialize, or the output file cannot be written.
pub async fn run_pipeline(
    config: &AppConfig,
    criteria: &SearchCriteria,
    output: &Path,
) -> anyhow::Result<PipelineOutcome> {
    let client = PlacesClient::new(
        &config.places_api_key,
        config.request_timeout_secs,
        &config.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build Places client: {e}"))?
    .page_token_delay(Duration::from_millis(config.page_token_delay_ms));

    let outcome = client.search(criteria).await;
    let search_error = outcome.error.as_ref().map(ToString::to_string);
    if let Some(e) = &search_error {
        eprintln!("warning: search ended early: {e}");
    }

    if outcome.places.is_empty() {
        return Ok(PipelineOutcome {
            count: 0,
            search_error,
        });
    }

    println!(
        "Found {} places. Fetching details for each...",
        outcome.places.len()
    );
    let enriched = enrich(&client, outcome.places).await;

    let rows = to_rows(&enriched);
    let bytes = write_csv(&rows)?;
    std::fs::write(output, bytes)
        .map_err(|e| anyhow::anyhow!("failed to write {}: {e}", output.display()))?;

    Ok(PipelineOutcome {
        count: rows.len(),
        search_error,
    })
}
