//! Inner join of appearances with movies on `movie_id`.
//!
//! The movie side is indexed once (hash join) and the appearance side is
//! streamed in source order, so the output follows the appearance order.
//! An appearance with no usable id, or whose id matches no movie, produces
//! no row; a movie nobody appears in produces no row either.

use crate::types::{AppearanceTable, JoinedRow, JoinedTable, MovieId, MovieTable};
use std::collections::HashMap;
use tracing::debug;

/// Inner-join `appearances` with `movies` on `movie_id`.
///
/// Pure: neither input is modified. When the movie table holds the same id
/// more than once, each appearance pairs with every copy.
pub fn merge(movies: &MovieTable, appearances: &AppearanceTable) -> JoinedTable {
    let mut by_id: HashMap<MovieId, Vec<usize>> = HashMap::new();
    for (idx, movie) in movies.movies().iter().enumerate() {
        if let Some(id) = movie.movie_id {
            by_id.entry(id).or_default().push(idx);
        }
    }

    let mut rows = Vec::with_capacity(appearances.len());
    let mut unmatched = 0usize;

    for appearance in appearances.rows() {
        let Some(id) = appearance.movie_id else {
            unmatched += 1;
            continue;
        };
        let Some(matches) = by_id.get(&id) else {
            unmatched += 1;
            continue;
        };
        for &idx in matches {
            rows.push(JoinedRow {
                movie_id: id,
                appearance: appearance.clone(),
                movie: movies.movies()[idx].clone(),
            });
        }
    }

    debug!(
        "Joined {} appearances with {} movies into {} rows ({} appearances unmatched)",
        appearances.len(),
        movies.len(),
        rows.len(),
        unmatched
    );
    JoinedTable { rows }
}
