//! Form state machine for the search criteria.
//!
//! All form state lives in an explicit [`FormSession`] context object passed
//! through the flow — no ambient globals. The session moves
//! `Idle → Validating → Fetching` on submit and lands in one of the three
//! terminal states once the pipeline reports back.

use placepull_places::SearchCriteria;
use thiserror::Error;

/// Raw user inputs as collected from flags or interactive prompts.
/// Coordinates stay strings until validation parses them.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub query: String,
    pub latitude: String,
    pub longitude: String,
    pub radius_m: Option<u32>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Fetching,
    Succeeded { count: usize },
    Failed,
    EmptyResult,
}

/// Validation failures that block the fetch. All of these return the
/// session to `Idle`; none abort the process.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("latitude and longitude must be numbers (got {field}=\"{value}\")")]
    InvalidCoordinate { field: &'static str, value: String },

    /// A radius of zero is rejected outright rather than silently treated
    /// as "no radius".
    #[error("radius must be a positive number of meters")]
    InvalidRadius,

    #[error("enter either a query or both latitude and longitude")]
    InsufficientCriteria,
}

pub struct FormSession {
    state: FormState,
}

impl FormSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: FormState::Idle,
        }
    }

    #[must_use]
    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Validates the input and, on success, enters `Fetching` and returns
    /// the criteria to run. On failure the session returns to `Idle`;
    /// unparseable coordinate fields are reset to absent.
    ///
    /// The query takes precedence when both a query and coordinates are
    /// supplied. The radius is honored only on the coordinate path.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when a coordinate does not parse, the radius is
    /// zero, or neither a query nor a full coordinate pair is present.
    pub fn submit(&mut self, input: &mut FormInput) -> Result<SearchCriteria, FormError> {
        self.state = FormState::Validating;
        match validate(input) {
            Ok(criteria) => {
                self.state = FormState::Fetching;
                Ok(criteria)
            }
            Err(e) => {
                self.state = FormState::Idle;
                Err(e)
            }
        }
    }

    /// Records the pipeline result: one or more places is `Succeeded`, zero
    /// places with a failed search is `Failed`, and a clean zero is
    /// `EmptyResult`.
    pub fn complete(&mut self, count: usize, search_failed: bool) -> &FormState {
        self.state = if count > 0 {
            FormState::Succeeded { count }
        } else if search_failed {
            FormState::Failed
        } else {
            FormState::EmptyResult
        };
        &self.state
    }
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

fn validate(input: &mut FormInput) -> Result<SearchCriteria, FormError> {
    let latitude = match parse_coordinate(&input.latitude) {
        Ok(v) => v,
        Err(value) => {
            reset_coordinates(input);
            return Err(FormError::InvalidCoordinate {
                field: "latitude",
                value,
            });
        }
    };
    let longitude = match parse_coordinate(&input.longitude) {
        Ok(v) => v,
        Err(value) => {
            reset_coordinates(input);
            return Err(FormError::InvalidCoordinate {
                field: "longitude",
                value,
            });
        }
    };

    if input.radius_m == Some(0) {
        return Err(FormError::InvalidRadius);
    }

    let query = input.query.trim();
    if !query.is_empty() {
        return Ok(SearchCriteria::Text {
            query: query.to_owned(),
        });
    }

    match (latitude, longitude) {
        (Some(latitude), Some(longitude)) => Ok(SearchCriteria::Nearby {
            latitude,
            longitude,
            radius_m: input.radius_m,
        }),
        _ => Err(FormError::InsufficientCriteria),
    }
}

/// Empty input means the coordinate is absent; anything else must parse as
/// a number. On failure the offending raw text is returned for the error
/// message.
fn parse_coordinate(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| trimmed.to_owned())
}

fn reset_coordinates(input: &mut FormInput) {
    input.latitude.clear();
    input.longitude.clear();
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
