use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Poster URL substituted when the provider has no image for a title
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// A single catalog entry.
///
/// Its position in the catalog is its row/column index into the similarity
/// matrix, so catalog order is load-bearing and never reordered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub title: String,
}

impl Movie {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Descriptive fields attached to a recommended title by the metadata
/// provider. Every field is defaultable; `available` is false for the
/// sentinel record returned when the provider had no answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieMetadata {
    pub title: String,
    pub year: Option<String>,
    pub directors: Vec<String>,
    pub cast: Vec<String>,
    pub genres: Vec<String>,
    pub rating: Option<f32>,
    pub poster_url: String,
    pub available: bool,
    pub fetched_at: DateTime<Utc>,
}

impl MovieMetadata {
    /// Sentinel record for a title the provider could not resolve
    pub fn unavailable(title: &str) -> Self {
        Self {
            title: title.to_string(),
            year: None,
            directors: Vec::new(),
            cast: Vec::new(),
            genres: Vec::new(),
            rating: None,
            poster_url: PLACEHOLDER_POSTER.to_string(),
            available: false,
            fetched_at: Utc::now(),
        }
    }
}
