use std::cmp::Ordering;

use crate::dataset::Dataset;
use crate::models::Movie;

/// Default number of neighbors returned when the caller does not ask for a
/// specific count
pub const DEFAULT_NEIGHBORS: usize = 10;

/// A catalog entry paired with its similarity score to the queried title
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<'a> {
    pub movie: &'a Movie,
    pub score: f64,
}

/// Returns up to `k` catalog entries most similar to `title`, most similar
/// first.
///
/// The queried title itself is excluded from the result. An unknown title
/// yields an empty list rather than an error; callers surface that as
/// "no recommendations found". Ties break on catalog index ascending, and
/// NaN scores rank below every real score.
pub fn recommend<'a>(title: &str, dataset: &'a Dataset, k: usize) -> Vec<Ranked<'a>> {
    let Some(idx) = dataset.index_of(title) else {
        tracing::debug!(title = %title, "Title not in catalog");
        return Vec::new();
    };

    let mut scored: Vec<(usize, f64)> = dataset
        .row(idx)
        .iter()
        .copied()
        .enumerate()
        .filter(|&(i, _)| i != idx)
        .collect();

    scored.sort_by(|&(ai, a), &(bi, b)| compare_scores(a, b).then(ai.cmp(&bi)));
    scored.truncate(k);

    scored
        .into_iter()
        .map(|(i, score)| Ranked {
            movie: dataset.movie(i),
            score,
        })
        .collect()
}

/// Descending by score; NaN sorts after every real score
fn compare_scores(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
    }
}
