//! Places API request criteria and response types.
//!
//! The search and details endpoints return places as loosely-populated JSON
//! objects; these structs pin down the fields the exporter consumes, with
//! everything except `place_id` optional. Unknown fields are ignored by
//! serde, so API additions do not break deserialization.

use serde::Deserialize;

/// What to search for: either a free-text query or a coordinate pair with an
/// optional radius in meters.
///
/// When a user supplies both a query and coordinates, the query wins and the
/// coordinates are ignored — the two dispatch to different API endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchCriteria {
    Text {
        query: String,
    },
    Nearby {
        latitude: f64,
        longitude: f64,
        radius_m: Option<u32>,
    },
}

/// Envelope for the `textsearch`/`nearbysearch` endpoints.
///
/// `status` is `"OK"` on success, `"ZERO_RESULTS"` when nothing matched, or
/// an error code (`"REQUEST_DENIED"`, `"INVALID_REQUEST"`, ...) accompanied
/// by `error_message`. `next_page_token` is present while more pages exist.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub results: Vec<PlaceSummary>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

/// Envelope for the `details` endpoint: `{ "status": ..., "result": {...} }`.
#[derive(Debug, Deserialize)]
pub struct DetailResponse {
    pub status: String,
    #[serde(default)]
    pub error_message: Option<String>,
    #[serde(default)]
    pub result: Option<PlaceDetail>,
}

/// A place as returned by the search endpoints.
///
/// `place_id` is the only field the API guarantees; it is the join key for
/// the details lookup. Text search returns `formatted_address`, nearby
/// search returns `vicinity` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceSummary {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub vicinity: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

/// The richer record returned by the `details` endpoint for a single place.
///
/// Superset of the summary fields, adding phone number and website.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlaceDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub formatted_phone_number: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub user_ratings_total: Option<u32>,
    #[serde(default)]
    pub business_status: Option<String>,
    #[serde(default)]
    pub price_level: Option<u8>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub opening_hours: Option<OpeningHours>,
}

/// Opening hours as returned by both search and details responses.
///
/// Search responses usually carry only `open_now`; details add the
/// human-readable `weekday_text` lines.
#[derive(Debug, Clone, Deserialize)]
pub struct OpeningHours {
    #[serde(default)]
    pub open_now: Option<bool>,
    #[serde(default)]
    pub weekday_text: Vec<String>,
}

/// A search result with its details overlaid.
///
/// Starts as a copy of the summary fields; [`EnrichedPlace::overlay`] then
/// replaces each field the detail record actually carries, leaving summary
/// values in place where the detail is silent.
#[derive(Debug, Clone)]
pub struct EnrichedPlace {
    pub place_id: String,
    pub name: Option<String>,
    pub formatted_address: Option<String>,
    pub vicinity: Option<String>,
    pub formatted_phone_number: Option<String>,
    pub website: Option<String>,
    pub rating: Option<f64>,
    pub user_ratings_total: Option<u32>,
    pub business_status: Option<String>,
    pub price_level: Option<u8>,
    pub types: Vec<String>,
    pub opening_hours: Option<OpeningHours>,
}

impl From<PlaceSummary> for EnrichedPlace {
    fn from(summary: PlaceSummary) -> Self {
        Self {
            place_id: summary.place_id,
            name: summary.name,
            formatted_address: summary.formatted_address,
            vicinity: summary.vicinity,
            formatted_phone_number: None,
            website: None,
            rating: summary.rating,
            user_ratings_total: summary.user_ratings_total,
            business_status: summary.business_status,
            price_level: summary.price_level,
            types: summary.types,
            opening_hours: summary.opening_hours,
        }
    }
}

impl EnrichedPlace {
    /// Overlays detail fields onto the summary fields. A detail field that is
    /// present replaces the summary value; an absent one leaves it intact.
    pub fn overlay(&mut self, detail: PlaceDetail) {
        if detail.name.is_some() {
            self.name = detail.name;
        }
        if detail.formatted_address.is_some() {
            self.formatted_address = detail.formatted_address;
        }
        if detail.formatted_phone_number.is_some() {
            self.formatted_phone_number = detail.formatted_phone_number;
        }
        if detail.website.is_some() {
            self.website = detail.website;
        }
        if detail.rating.is_some() {
            self.rating = detail.rating;
        }
        if detail.user_ratings_total.is_some() {
            self.user_ratings_total = detail.user_ratings_total;
        }
        if detail.business_status.is_some() {
            self.business_status = detail.business_status;
        }
        if detail.price_level.is_some() {
            self.price_level = detail.price_level;
        }
        if !detail.types.is_empty() {
            self.types = detail.types;
        }
        if detail.opening_hours.is_some() {
            self.opening_hours = detail.opening_hours;
        }
    }
}
