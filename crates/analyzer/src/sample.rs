//! Picking a single movie for the genre classification collaborator.
//!
//! The classifier only ever sees a title, a summary and the ground-truth
//! genres of one movie. Unresolved `Unknown (...)` labels are stripped so
//! they are never compared against a prediction.

use crate::results::MovieSample;
use data_loader::{MovieRecord, MovieTable, is_unknown_genre};
use rand::Rng;
use rand::seq::IndexedRandom;

/// Resolved genres of a movie, sorted
pub fn known_genres(movie: &MovieRecord) -> Vec<String> {
    movie
        .genres
        .iter()
        .filter(|g| !is_unknown_genre(g))
        .cloned()
        .collect()
}

/// Pick one movie uniformly at random; `None` on an empty table
pub fn sample_movie<R: Rng + ?Sized>(movies: &MovieTable, rng: &mut R) -> Option<MovieSample> {
    let movie = movies.movies().choose(rng)?;
    Some(MovieSample {
        movie_id: movie.movie_id,
        title: movie.title.clone(),
        summary: movie.summary.clone(),
        genres: known_genres(movie),
    })
}
