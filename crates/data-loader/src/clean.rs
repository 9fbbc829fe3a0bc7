//! Cleaning of the joined table.
//!
//! - gender codes `M`/`F` become `Male`/`Female`; other values are kept
//! - heights must be finite and positive, anything else becomes missing
//! - the appearance's own `release_date` and `freebase_movie_id` are dropped;
//!   the movie side remains reachable through `MergedRecord::movie`

use crate::types::{Gender, JoinedTable, MergedRecord, MergedTable};

fn clean_height(height: Option<f64>) -> Option<f64> {
    height.filter(|h| h.is_finite() && *h > 0.0)
}

/// Consume a joined table and produce the cleaned merged table.
///
/// Row count and order are preserved.
pub fn clean(joined: JoinedTable) -> MergedTable {
    let rows = joined
        .rows
        .into_iter()
        .map(|row| {
            let a = row.appearance;
            MergedRecord {
                movie_id: row.movie_id,
                movie: row.movie,
                character_name: a.character_name,
                actor_name: a.actor_name,
                actor_gender: a.actor_gender.as_deref().map(Gender::from_code),
                actor_height: clean_height(a.actor_height),
                actor_dob: a.actor_dob,
                actor_age_at_release: a.actor_age_at_release,
                actor_ethnicity: a.actor_ethnicity,
                actor_id: a.actor_id,
            }
        })
        .collect();

    MergedTable { rows }
}
