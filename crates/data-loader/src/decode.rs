//! Decoding of the semi-structured movie fields.
//!
//! Genres, languages and countries are stored as JSON objects mapping an
//! opaque Freebase code to a readable label:
//!
//! ```text
//! {"/m/07s9rl0": "Drama", "/m/01z4y": "Comedy"}
//! ```
//!
//! Older dumps only carry the codes, either as a code→code object or as a
//! plain list. Those codes are resolved through [`GENRE_CODES`]; a code
//! missing from the table becomes `Unknown (<code>)` so it can be filtered
//! out later without being lost.
//!
//! Decoding never fails. Anything that is not one of these shapes decodes
//! to an empty set.

use crate::types::{MovieId, MovieRecord, MovieTable, NO_SUMMARY, RawMovie};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::debug;

/// Static Freebase code → genre label table for the code-only format
pub const GENRE_CODES: &[(&str, &str)] = &[
    ("/m/07s9rl0", "Drama"),
    ("/m/01z4y", "Comedy"),
    ("/m/02l7c8", "Action"),
    ("/m/01g6gs", "Romance"),
    ("/m/02kdv5l", "Horror"),
    ("/m/01jfsb", "Thriller"),
    ("/m/02hmvc", "Science Fiction"),
    ("/m/03q4nz", "Adventure"),
    ("/m/0lsxr", "Mystery"),
    ("/m/0219x_", "Animation"),
    ("/m/02vxn", "Crime"),
    ("/m/09b5t", "Fantasy"),
    ("/m/06ntj", "Family"),
    ("/m/018jz", "Musical"),
    ("/m/07c6l", "Biography"),
    ("/m/01h6rj", "War"),
    ("/m/03tmr", "History"),
    ("/m/06bm2", "Western"),
    ("/m/07v9_z", "Sport"),
    ("/m/0f2f9", "Music"),
    ("/m/019_rr", "Documentary"),
    ("/m/0jtdp", "Political Cinema"),
    ("/m/03npn", "Rockumentary"),
    ("/m/06ppq", "Indie"),
    ("/m/03k9fj", "Romantic Comedy"),
    ("/m/0hqxf", "Romantic Drama"),
    ("/m/03btsm8", "World Cinema"),
    ("/m/05p553", "Psychological Thriller"),
    ("/m/04t36", "Musical"),
    ("/m/0hcr", "Gay Themed"),
    ("/m/068d7h", "Crime Thriller"),
];

const UNKNOWN_PREFIX: &str = "Unknown (";

/// Resolve a bare genre code through [`GENRE_CODES`]
pub fn label_for_code(code: &str) -> String {
    GENRE_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, label)| label.to_string())
        .unwrap_or_else(|| format!("{}{})", UNKNOWN_PREFIX, code))
}

/// True for labels produced from codes missing in [`GENRE_CODES`]
pub fn is_unknown_genre(label: &str) -> bool {
    label.starts_with(UNKNOWN_PREFIX)
}

fn looks_like_code(value: &str) -> bool {
    value.starts_with("/m/")
}

/// Decode a raw genre field into its set of labels
pub fn decode_genres(raw: Option<&str>) -> BTreeSet<String> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return BTreeSet::new();
    };

    if let Ok(mapping) = serde_json::from_str::<BTreeMap<String, String>>(raw) {
        return mapping
            .into_iter()
            .map(|(code, label)| {
                let label = label.trim();
                if label.is_empty() || label == code || looks_like_code(label) {
                    label_for_code(&code)
                } else {
                    label.to_string()
                }
            })
            .collect();
    }

    if let Ok(codes) = serde_json::from_str::<Vec<String>>(raw) {
        return codes.iter().map(|code| label_for_code(code.trim())).collect();
    }

    BTreeSet::new()
}

/// Decode a code→label object into its labels, in code order.
///
/// Used for languages and countries, which have no legacy format.
pub fn decode_labels(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<BTreeMap<String, String>>(s.trim()).ok())
        .map(|mapping| {
            mapping
                .into_values()
                .map(|label| label.trim().to_string())
                .filter(|label| !label.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Turn parsed movie rows into the decoded movie table.
///
/// Summaries are looked up by movie id; movies without one get
/// [`NO_SUMMARY`].
pub fn decode_movies(raw: Vec<RawMovie>, summaries: &HashMap<MovieId, String>) -> MovieTable {
    let mut malformed = 0usize;

    let movies: Vec<MovieRecord> = raw
        .into_iter()
        .map(|row| {
            let genres = decode_genres(row.genres_raw.as_deref());
            if genres.is_empty() && row.genres_raw.as_deref().is_some_and(|g| g.trim() != "{}") {
                malformed += 1;
            }

            let summary = row
                .movie_id
                .and_then(|id| summaries.get(&id))
                .cloned()
                .unwrap_or_else(|| NO_SUMMARY.to_string());

            MovieRecord {
                movie_id: row.movie_id,
                freebase_movie_id: row.freebase_movie_id,
                title: row.title.unwrap_or_default(),
                release_date: row.release_date,
                box_office: row.box_office,
                runtime: row.runtime,
                languages: decode_labels(row.languages_raw.as_deref()),
                countries: decode_labels(row.countries_raw.as_deref()),
                genres,
                summary,
            }
        })
        .collect();

    if malformed > 0 {
        debug!("{} movies have an undecodable genre field", malformed);
    }
    MovieTable::new(movies)
}
