//! Sequential detail enrichment of search results.

use crate::client::PlacesClient;
use crate::types::{EnrichedPlace, PlaceSummary};

/// Merges the details record into each search result, one place at a time.
///
/// Strictly sequential: each details request is awaited before the next,
/// so total latency is linear in the result count. A failed lookup is
/// logged and skipped — the place keeps its search fields and the run
/// continues with the remaining places.
pub async fn enrich(client: &PlacesClient, places: Vec<PlaceSummary>) -> Vec<EnrichedPlace> {
    let mut enriched = Vec::with_capacity(places.len());

    for summary in places {
        let mut place = EnrichedPlace::from(summary);
        match client.fetch_detail(&place.place_id).await {
            Ok(detail) => place.overlay(detail),
            Err(e) => {
                tracing::warn!(
                    place_id = %place.place_id,
                    error = %e,
                    "details lookup failed — keeping search fields only"
                );
            }
        }
        enriched.push(place);
    }

    enriched
}
