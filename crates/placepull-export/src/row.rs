//! Projection of enriched places into the fixed eleven-column table.
//!
//! Every column is populated independently: a missing source field becomes
//! the [`SENTINEL`] marker, never an omitted cell, so each row always has
//! exactly eleven values in the same order as [`COLUMNS`].

use placepull_places::{EnrichedPlace, OpeningHours};
use serde::{Deserialize, Serialize};

/// Marker substituted for any absent field at export time.
pub const SENTINEL: &str = "N/A";

/// Column names in export order. [`crate::write_csv`] writes these as the
/// header row; field order in [`ExportRow`] must stay in sync.
pub const COLUMNS: [&str; 11] = [
    "name",
    "address",
    "phone",
    "website",
    "rating",
    "user_ratings_total",
    "place_id",
    "opening_hours",
    "business_status",
    "price_level",
    "types",
];

/// One exported row. All cells are strings; numeric and list fields are
/// rendered before they land here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
    pub rating: String,
    pub user_ratings_total: String,
    pub place_id: String,
    pub opening_hours: String,
    pub business_status: String,
    pub price_level: String,
    pub types: String,
}

/// Projects enriched places into export rows, applying sentinel
/// substitution per column.
#[must_use]
pub fn to_rows(places: &[EnrichedPlace]) -> Vec<ExportRow> {
    places.iter().map(to_row).collect()
}

fn to_row(place: &EnrichedPlace) -> ExportRow {
    ExportRow {
        name: or_sentinel(place.name.as_deref()),
        // Nearby-search results carry only `vicinity` until the details
        // overlay fills in the formatted address.
        address: or_sentinel(
            place
                .formatted_address
                .as_deref()
                .or(place.vicinity.as_deref()),
        ),
        phone: or_sentinel(place.formatted_phone_number.as_deref()),
        website: or_sentinel(place.website.as_deref()),
        rating: place
            .rating
            .map_or_else(|| SENTINEL.to_owned(), |r| r.to_string()),
        user_ratings_total: place
            .user_ratings_total
            .map_or_else(|| SENTINEL.to_owned(), |n| n.to_string()),
        place_id: place.place_id.clone(),
        opening_hours: render_opening_hours(place.opening_hours.as_ref()),
        business_status: or_sentinel(place.business_status.as_deref()),
        price_level: place
            .price_level
            .map_or_else(|| SENTINEL.to_owned(), |p| p.to_string()),
        types: if place.types.is_empty() {
            SENTINEL.to_owned()
        } else {
            place.types.join(", ")
        },
    }
}

fn or_sentinel(value: Option<&str>) -> String {
    value.map_or_else(|| SENTINEL.to_owned(), str::to_owned)
}

/// Renders opening hours as the joined weekday lines, falling back to an
/// open/closed marker when only `open_now` is known.
fn render_opening_hours(hours: Option<&OpeningHours>) -> String {
    let Some(hours) = hours else {
        return SENTINEL.to_owned();
    };
    if !hours.weekday_text.is_empty() {
        return hours.weekday_text.join("; ");
    }
    match hours.open_now {
        Some(true) => "open now".to_owned(),
        Some(false) => "closed now".to_owned(),
        None => SENTINEL.to_owned(),
    }
}
