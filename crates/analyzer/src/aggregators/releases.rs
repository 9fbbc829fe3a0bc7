//! Releases per year, optionally restricted to one genre.

use crate::results::YearCount;
use data_loader::MovieTable;
use std::collections::BTreeMap;

/// Filter value meaning "do not restrict"
pub const ALL: &str = "All";

/// Count movies per release year, ascending by year.
///
/// Movies without a usable release year are left out. With a genre other
/// than `All`, only movies carrying that genre are counted; a genre nobody
/// carries gives an empty result.
pub fn releases(movies: &MovieTable, genre: Option<&str>) -> Vec<YearCount> {
    let genre = genre.filter(|g| !g.is_empty() && *g != ALL);

    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for movie in movies.movies() {
        let Some(year) = movie.release_year() else {
            continue;
        };
        if genre.is_some_and(|g| !movie.genres.contains(g)) {
            continue;
        }
        *per_year.entry(year).or_insert(0) += 1;
    }

    per_year
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}
