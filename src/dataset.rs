use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::models::Movie;

/// On-disk shape of the dataset artifact.
///
/// Missing similarity scores are `null` in the file and become NaN in
/// memory, where the ranking treats them as lowest.
#[derive(Debug, Deserialize)]
struct RawDataset {
    movies: Vec<Movie>,
    similarity: Vec<Vec<Option<f64>>>,
}

/// The movie catalog and its precomputed similarity matrix.
///
/// Loaded once at startup and immutable afterwards. Row i of the matrix
/// holds the pairwise similarity scores between catalog entry i and every
/// other entry.
#[derive(Debug)]
pub struct Dataset {
    movies: Vec<Movie>,
    matrix: Vec<Vec<f64>>,
    index: HashMap<String, usize>,
}

impl Dataset {
    /// Loads and validates the dataset artifact from a JSON file.
    ///
    /// Any read, parse, or validation failure is fatal to the caller: the
    /// service cannot run without a catalog and matrix.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dataset file {}", path.display()))?;
        let raw: RawDataset = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse dataset file {}", path.display()))?;

        let matrix = raw
            .similarity
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.unwrap_or(f64::NAN)).collect())
            .collect();

        Self::from_parts(raw.movies, matrix)
    }

    /// Builds a dataset from already-deserialized parts, enforcing the
    /// row-correspondence invariant between catalog and matrix.
    pub fn from_parts(movies: Vec<Movie>, matrix: Vec<Vec<f64>>) -> anyhow::Result<Self> {
        if movies.is_empty() {
            bail!("Dataset contains no movies");
        }
        if matrix.len() != movies.len() {
            bail!(
                "Similarity matrix has {} rows for {} movies",
                matrix.len(),
                movies.len()
            );
        }
        for (i, row) in matrix.iter().enumerate() {
            if row.len() != movies.len() {
                bail!(
                    "Similarity matrix row {} has {} columns, expected {}",
                    i,
                    row.len(),
                    movies.len()
                );
            }
        }

        let mut index = HashMap::with_capacity(movies.len());
        for (i, movie) in movies.iter().enumerate() {
            // First occurrence wins if a title appears twice
            index.entry(movie.title.clone()).or_insert(i);
        }

        Ok(Self {
            movies,
            matrix,
            index,
        })
    }

    /// Number of catalog entries (== matrix dimension)
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Catalog titles in stable catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.movies.iter().map(|m| m.title.as_str())
    }

    /// Row index for a title, or None if the title is not in the catalog
    pub fn index_of(&self, title: &str) -> Option<usize> {
        self.index.get(title).copied()
    }

    pub fn movie(&self, idx: usize) -> &Movie {
        &self.movies[idx]
    }

    /// Similarity scores between catalog entry `idx` and every other entry
    pub fn row(&self, idx: usize) -> &[f64] {
        &self.matrix[idx]
    }
}
