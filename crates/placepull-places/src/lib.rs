pub mod client;
pub mod enrich;
pub mod error;
pub mod types;

pub use client::{PlacesClient, SearchOutcome};
pub use enrich::enrich;
pub use error::PlacesError;
pub use types::{EnrichedPlace, OpeningHours, PlaceDetail, PlaceSummary, SearchCriteria};
