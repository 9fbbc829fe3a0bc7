//! Distribution of the number of named actors per movie.

use crate::results::ActorCountBucket;
use data_loader::{MergedTable, MovieId};
use std::collections::{BTreeMap, HashMap};

/// For every movie in the merged table count its appearances with a known
/// actor name, then count how many movies share each total.
///
/// Sorted ascending by number of actors. Movies whose appearances are all
/// unnamed do not show up.
pub fn actor_count(merged: &MergedTable) -> Vec<ActorCountBucket> {
    let mut per_movie: HashMap<MovieId, usize> = HashMap::new();
    for row in merged.rows().iter().filter(|r| r.actor_name.is_some()) {
        *per_movie.entry(row.movie_id).or_insert(0) += 1;
    }

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    for actors in per_movie.into_values() {
        *distribution.entry(actors).or_insert(0) += 1;
    }

    distribution
        .into_iter()
        .map(|(actors, movies)| ActorCountBucket { actors, movies })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::fixtures;

    #[test]
    fn test_actor_count_distribution() {
        let dataset = fixtures::dataset();
        let buckets = actor_count(dataset.merged());

        // Alpha: Ann + Bob (the unnamed one is skipped), Beta: Cid + Dee, Gamma: Eve
        assert_eq!(
            buckets,
            vec![
                ActorCountBucket {
                    actors: 1,
                    movies: 1
                },
                ActorCountBucket {
                    actors: 2,
                    movies: 2
                },
            ]
        );
    }

    #[test]
    fn test_actor_count_total_matches_named_rows() {
        let dataset = fixtures::dataset();
        let total: usize = actor_count(dataset.merged())
            .iter()
            .map(|b| b.actors * b.movies)
            .sum();
        let named = dataset
            .merged()
            .rows()
            .iter()
            .filter(|r| r.actor_name.is_some())
            .count();

        assert_eq!(total, named);
    }

    #[test]
    fn test_actor_count_empty() {
        assert!(actor_count(&MergedTable::default()).is_empty());
    }
}
