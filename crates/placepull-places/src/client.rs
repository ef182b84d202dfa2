//! HTTP client for the Google Places web API.
//!
//! Wraps `reqwest` with API key management, typed response deserialization,
//! and the token-driven pagination loop of the search endpoints. Every
//! response's `"status"` envelope field is checked and non-success codes are
//! surfaced as [`PlacesError::Api`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::PlacesError;
use crate::types::{DetailResponse, PlaceDetail, PlaceSummary, SearchCriteria, SearchResponse};

const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Hard stop for the pagination loop. The search endpoints serve at most
/// three pages, so the cap is deliberately loose headroom; hitting it means
/// the token is cycling.
const MAX_PAGES: usize = 10;

/// How long a `next_page_token` takes to become valid server-side.
const DEFAULT_PAGE_TOKEN_DELAY: Duration = Duration::from_secs(2);

/// Result of a paginated search.
///
/// `places` holds everything collected before the loop stopped. When the
/// loop was cut short by a failure, `error` carries it; the pages already
/// fetched are still returned rather than discarded.
#[derive(Debug)]
pub struct SearchOutcome {
    pub places: Vec<PlaceSummary>,
    pub error: Option<PlacesError>,
}

/// Client for the Places search and details endpoints.
///
/// Manages the HTTP client, API key, base URL, and the inter-page delay.
/// Use [`PlacesClient::new`] for production or
/// [`PlacesClient::with_base_url`] to point at a mock server in tests.
pub struct PlacesClient {
    client: Client,
    api_key: String,
    base_url: Url,
    page_token_delay: Duration,
}

impl PlacesClient {
    /// Creates a new client pointed at the production Places API.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, PlacesError> {
        Self::with_base_url(api_key, timeout_secs, user_agent, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`PlacesError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        user_agent: &str,
        base_url: &str,
    ) -> Result<Self, PlacesError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Normalise: ensure the base URL ends with exactly one slash so that
        // Url::join appends endpoint paths instead of replacing the last
        // path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalised).map_err(|e| PlacesError::InvalidBaseUrl {
                url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
            page_token_delay: DEFAULT_PAGE_TOKEN_DELAY,
        })
    }

    /// Overrides the wait applied before resubmitting a pagination token.
    ///
    /// Production keeps the 2 s default the API documents; tests inject a
    /// few milliseconds so pagination runs without real time passing.
    #[must_use]
    pub fn page_token_delay(mut self, delay: Duration) -> Self {
        self.page_token_delay = delay;
        self
    }

    /// Runs a search and follows pagination tokens until exhausted.
    ///
    /// Dispatches to the `textsearch` endpoint for [`SearchCriteria::Text`]
    /// and `nearbysearch` for [`SearchCriteria::Nearby`]. After each page
    /// carrying a `next_page_token`, waits the configured delay before
    /// requesting the next page, and stops once no token is present.
    ///
    /// Failure never discards work: a transport or API error aborts the
    /// loop, is logged, and comes back in [`SearchOutcome::error`] alongside
    /// whatever pages were already collected (possibly none). Results are
    /// not de-duplicated; order is page order concatenated.
    pub async fn search(&self, criteria: &SearchCriteria) -> SearchOutcome {
        let mut places: Vec<PlaceSummary> = Vec::new();
        let mut token: Option<String> = None;
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > MAX_PAGES {
                return SearchOutcome {
                    places,
                    error: Some(PlacesError::PaginationLimit {
                        max_pages: MAX_PAGES,
                    }),
                };
            }

            // The token only becomes valid after a short propagation delay
            // on the API side.
            if token.is_some() {
                tokio::time::sleep(self.page_token_delay).await;
            }

            let page = match self.search_page(criteria, token.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(
                        error = %e,
                        pages_collected = page_count - 1,
                        results_collected = places.len(),
                        "search aborted — returning partial results"
                    );
                    return SearchOutcome {
                        places,
                        error: Some(e),
                    };
                }
            };

            places.extend(page.results);
            token = page.next_page_token;
            if token.is_none() {
                break;
            }
        }

        SearchOutcome {
            places,
            error: None,
        }
    }

    /// Fetches one page of search results.
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Api`] if the envelope status is not `OK`/`ZERO_RESULTS`.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    async fn search_page(
        &self,
        criteria: &SearchCriteria,
        pagetoken: Option<&str>,
    ) -> Result<SearchResponse, PlacesError> {
        let url = self.search_url(criteria, pagetoken)?;
        let body = self.request_json(&url).await?;

        let response: SearchResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("search page {}", redact_key(&url)),
                source: e,
            })?;

        check_envelope_status(&response.status, response.error_message.as_deref())?;
        Ok(response)
    }

    /// Fetches the extended detail record for a single place.
    ///
    /// One request, no pagination, no retry. An `OK` envelope with a missing
    /// `result` object yields an empty [`PlaceDetail`].
    ///
    /// # Errors
    ///
    /// - [`PlacesError::Http`] on network failure or non-2xx HTTP status.
    /// - [`PlacesError::Api`] if the envelope status is not `OK`.
    /// - [`PlacesError::Deserialize`] if the body does not match the
    ///   expected shape.
    pub async fn fetch_detail(&self, place_id: &str) -> Result<PlaceDetail, PlacesError> {
        let url = self.detail_url(place_id)?;
        let body = self.request_json(&url).await?;

        let response: DetailResponse =
            serde_json::from_value(body).map_err(|e| PlacesError::Deserialize {
                context: format!("details for place {place_id}"),
                source: e,
            })?;

        if response.status != "OK" {
            return Err(PlacesError::Api {
                status: response.status,
                message: response.error_message,
            });
        }

        Ok(response.result.unwrap_or_default())
    }

    /// Builds the search URL for the given criteria and optional page token.
    ///
    /// All parameters go through [`Url::query_pairs_mut`] so values are
    /// percent-encoded. The radius parameter is included only when the
    /// criteria explicitly carry one.
    fn search_url(
        &self,
        criteria: &SearchCriteria,
        pagetoken: Option<&str>,
    ) -> Result<Url, PlacesError> {
        let path = match criteria {
            SearchCriteria::Text { .. } => "textsearch/json",
            SearchCriteria::Nearby { .. } => "nearbysearch/json",
        };
        let mut url = self.endpoint(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            match criteria {
                SearchCriteria::Text { query } => {
                    pairs.append_pair("query", query);
                }
                SearchCriteria::Nearby {
                    latitude,
                    longitude,
                    radius_m,
                } => {
                    pairs.append_pair("location", &format!("{latitude},{longitude}"));
                    if let Some(radius) = radius_m {
                        pairs.append_pair("radius", &radius.to_string());
                    }
                }
            }
            if let Some(token) = pagetoken {
                pairs.append_pair("pagetoken", token);
            }
        }
        Ok(url)
    }

    /// Builds the details URL for a place identifier.
    fn detail_url(&self, place_id: &str) -> Result<Url, PlacesError> {
        let mut url = self.endpoint("details/json")?;
        url.query_pairs_mut()
            .append_pair("key", &self.api_key)
            .append_pair("place_id", place_id);
        Ok(url)
    }

    fn endpoint(&self, path: &str) -> Result<Url, PlacesError> {
        self.base_url
            .join(path)
            .map_err(|e| PlacesError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: e.to_string(),
            })
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the
    /// response body as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PlacesError::Http`] on network failure or a non-2xx status.
    /// Returns [`PlacesError::Deserialize`] if the body is not valid JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, PlacesError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| PlacesError::Deserialize {
            context: redact_key(url),
            source: e,
        })
    }
}

/// Checks a search envelope status. `OK` and `ZERO_RESULTS` are success;
/// anything else becomes [`PlacesError::Api`].
fn check_envelope_status(status: &str, message: Option<&str>) -> Result<(), PlacesError> {
    if status == "OK" || status == "ZERO_RESULTS" {
        return Ok(());
    }
    Err(PlacesError::Api {
        status: status.to_owned(),
        message: message.map(str::to_owned),
    })
}

/// Renders a URL for error contexts with the API key parameter blanked out.
fn redact_key(url: &Url) -> String {
    let mut redacted = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            if k == "key" {
                (k.into_owned(), "[redacted]".to_owned())
            } else {
                (k.into_owned(), v.into_owned())
            }
        })
        .collect();
    redacted.query_pairs_mut().clear().extend_pairs(pairs);
    redacted.to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
