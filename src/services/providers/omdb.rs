/// OMDb API provider
///
/// Queries OMDb by free-text title (`GET /?apikey=...&t=<title>&type=movie`).
/// OMDb reports misses with HTTP 200 and `"Response": "False"`, and fills
/// absent fields with the literal string "N/A"; both are normalized here.
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{MovieMetadata, PLACEHOLDER_POSTER},
    services::providers::MetadataProvider,
};

/// Cast members kept per title
const TOP_CAST: usize = 5;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    pub fn new(api_key: String, api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_key,
            api_url,
        }
    }
}

/// Raw OMDb title response
#[derive(Debug, Deserialize)]
struct OmdbMovie {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error", default)]
    error: Option<String>,
    #[serde(rename = "Title", default)]
    title: Option<String>,
    #[serde(rename = "Year", default)]
    year: Option<String>,
    #[serde(rename = "Director", default)]
    director: Option<String>,
    #[serde(rename = "Actors", default)]
    actors: Option<String>,
    #[serde(rename = "Genre", default)]
    genre: Option<String>,
    #[serde(rename = "imdbRating", default)]
    imdb_rating: Option<String>,
    #[serde(rename = "Poster", default)]
    poster: Option<String>,
}

/// Treats OMDb's "N/A" filler and empty strings as missing
fn present(field: Option<String>) -> Option<String> {
    field.filter(|v| !v.is_empty() && v != "N/A")
}

/// Splits an OMDb comma-separated name list ("A, B, C") into names
fn split_names(field: Option<String>) -> Vec<String> {
    present(field)
        .map(|v| {
            v.split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

impl OmdbMovie {
    fn into_metadata(self, requested_title: &str) -> MovieMetadata {
        let mut cast = split_names(self.actors);
        cast.truncate(TOP_CAST);

        MovieMetadata {
            title: present(self.title).unwrap_or_else(|| requested_title.to_string()),
            year: present(self.year),
            directors: split_names(self.director),
            cast,
            genres: split_names(self.genre),
            rating: present(self.imdb_rating).and_then(|r| r.parse().ok()),
            poster_url: present(self.poster).unwrap_or_else(|| PLACEHOLDER_POSTER.to_string()),
            available: true,
            fetched_at: Utc::now(),
        }
    }
}

#[async_trait]
impl MetadataProvider for OmdbProvider {
    async fn lookup(&self, title: &str) -> AppResult<Option<MovieMetadata>> {
        let response = self
            .http_client
            .get(&self.api_url)
            .query(&[
                ("apikey", self.api_key.as_str()),
                ("t", title),
                ("type", "movie"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status, body
            )));
        }

        let movie: OmdbMovie = response.json().await?;

        if movie.response != "True" {
            tracing::debug!(
                title = %title,
                reason = movie.error.as_deref().unwrap_or("unknown"),
                "OMDb lookup found no match"
            );
            return Ok(None);
        }

        let record = movie.into_metadata(title);

        tracing::info!(
            title = %title,
            matched = %record.title,
            provider = "omdb",
            "Metadata fetched"
        );

        Ok(Some(record))
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_omdb_movie_deserialization() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Poster": "https://example.com/inception.jpg",
            "imdbRating": "8.8",
            "Response": "True"
        }"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.response, "True");
        assert_eq!(movie.title.as_deref(), Some("Inception"));
        assert_eq!(movie.imdb_rating.as_deref(), Some("8.8"));
    }

    #[test]
    fn test_omdb_error_response_deserialization() {
        let json = r#"{"Response": "False", "Error": "Movie not found!"}"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.response, "False");
        assert_eq!(movie.error.as_deref(), Some("Movie not found!"));
        assert_eq!(movie.title, None);
    }

    #[test]
    fn test_into_metadata_full_record() {
        let json = r#"{
            "Title": "Inception",
            "Year": "2010",
            "Genre": "Action, Adventure, Sci-Fi",
            "Director": "Christopher Nolan",
            "Actors": "Leonardo DiCaprio, Joseph Gordon-Levitt, Elliot Page",
            "Poster": "https://example.com/inception.jpg",
            "imdbRating": "8.8",
            "Response": "True"
        }"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        let record = movie.into_metadata("Inception");

        assert!(record.available);
        assert_eq!(record.year.as_deref(), Some("2010"));
        assert_eq!(record.directors, vec!["Christopher Nolan"]);
        assert_eq!(
            record.genres,
            vec!["Action", "Adventure", "Sci-Fi"]
        );
        assert_eq!(record.rating, Some(8.8));
        assert_eq!(record.poster_url, "https://example.com/inception.jpg");
    }

    #[test]
    fn test_into_metadata_na_fields_become_defaults() {
        let json = r#"{
            "Title": "Obscure Film",
            "Year": "N/A",
            "Genre": "N/A",
            "Director": "N/A",
            "Actors": "N/A",
            "Poster": "N/A",
            "imdbRating": "N/A",
            "Response": "True"
        }"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        let record = movie.into_metadata("Obscure Film");

        assert!(record.available);
        assert_eq!(record.year, None);
        assert!(record.directors.is_empty());
        assert!(record.cast.is_empty());
        assert!(record.genres.is_empty());
        assert_eq!(record.rating, None);
        assert_eq!(record.poster_url, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_into_metadata_missing_title_falls_back_to_query() {
        let json = r#"{"Response": "True"}"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        let record = movie.into_metadata("Requested Title");
        assert_eq!(record.title, "Requested Title");
    }

    #[test]
    fn test_into_metadata_truncates_cast_to_top_five() {
        let json = r#"{
            "Title": "Ensemble Piece",
            "Actors": "One, Two, Three, Four, Five, Six, Seven",
            "Response": "True"
        }"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        let record = movie.into_metadata("Ensemble Piece");
        assert_eq!(record.cast, vec!["One", "Two", "Three", "Four", "Five"]);
    }

    #[test]
    fn test_into_metadata_unparseable_rating() {
        let json = r#"{
            "Title": "Weird Rating",
            "imdbRating": "not-a-number",
            "Response": "True"
        }"#;

        let movie: OmdbMovie = serde_json::from_str(json).unwrap();
        let record = movie.into_metadata("Weird Rating");
        assert_eq!(record.rating, None);
    }
}
