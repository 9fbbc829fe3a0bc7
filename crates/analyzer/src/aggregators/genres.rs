//! Genre frequency ranking.

use crate::error::{AnalyzerError, Result};
use crate::results::GenreCount;
use data_loader::MovieTable;
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};

/// Rank genres by the number of movies carrying them and keep the top `n`.
///
/// Multi-label: a movie counts once towards each of its genres. Ties are
/// ordered by label so the ranking is stable across calls.
pub fn movie_type(movies: &MovieTable, n: usize) -> Result<Vec<GenreCount>> {
    if n == 0 {
        return Err(AnalyzerError::invalid("n", "must be a positive integer"));
    }

    let counts = movies
        .movies()
        .par_iter()
        .fold(HashMap::<&str, usize>::new, |mut local, movie| {
            for genre in &movie.genres {
                *local.entry(genre.as_str()).or_insert(0) += 1;
            }
            local
        })
        .reduce(HashMap::new, |mut a, b| {
            for (genre, count) in b {
                *a.entry(genre).or_insert(0) += count;
            }
            a
        });

    let mut ranking: Vec<GenreCount> = counts
        .into_iter()
        .map(|(genre, count)| GenreCount {
            genre: genre.to_string(),
            count,
        })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.genre.cmp(&b.genre)));
    ranking.truncate(n);

    Ok(ranking)
}

/// Every distinct genre label in the movie table, sorted
pub fn available_genres(movies: &MovieTable) -> Vec<String> {
    movies
        .movies()
        .iter()
        .flat_map(|movie| movie.genres.iter())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .cloned()
        .collect()
}
