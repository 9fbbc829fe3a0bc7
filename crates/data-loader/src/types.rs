//! Core domain types for the movie-metadata corpus.
//!
//! The pipeline moves through four table shapes, each an immutable value:
//!
//! - `Vec<RawMovie>` / `AppearanceTable`: what the parser produced
//! - `MovieTable`: movies with their genre field decoded
//! - `JoinedTable`: appearances inner-joined with their movie
//! - `MergedTable`: the joined table after cleaning
//!
//! Every cell that may be absent in the source is an `Option`. A cell that
//! failed to parse is `None`, exactly like a cell that was empty.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Type Aliases
// =============================================================================

/// Wikipedia movie identifier, the sole join key between the two source files
pub type MovieId = u32;

/// Summary attached to movies that have no entry in the plot-summary file
pub const NO_SUMMARY: &str = "No summary available.";

// =============================================================================
// Value Types
// =============================================================================

/// A calendar date that may only be known to the year or to the month.
///
/// The corpus mixes `1958-08-26`, `1969-06` and `1974` in the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartialDate {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl PartialDate {
    pub fn year(year: i32) -> Self {
        Self {
            year,
            month: None,
            day: None,
        }
    }
}

impl fmt::Display for PartialDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.month, self.day) {
            (Some(m), Some(d)) => write!(f, "{:04}-{:02}-{:02}", self.year, m, d),
            (Some(m), None) => write!(f, "{:04}-{:02}", self.year, m),
            _ => write!(f, "{:04}", self.year),
        }
    }
}

/// Actor gender after cleaning.
///
/// The source encodes gender as `M`/`F`. Anything else is kept verbatim in
/// `Other` so no information is lost.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other(String),
}

impl Gender {
    /// Map a raw source code to a gender: `M` and `F` are recognised,
    /// every other value passes through unchanged.
    pub fn from_code(code: &str) -> Self {
        match code {
            "M" => Gender::Male,
            "F" => Gender::Female,
            other => Gender::Other(other.to_string()),
        }
    }

    /// Label as shown to users and accepted by gender filters
    pub fn label(&self) -> &str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other(raw) => raw,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Movie Types
// =============================================================================

/// A movie row as read from `movie.metadata.tsv`, before any decoding
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawMovie {
    pub movie_id: Option<MovieId>,
    pub freebase_movie_id: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<PartialDate>,
    pub box_office: Option<f64>,
    pub runtime: Option<f64>,
    pub languages_raw: Option<String>,
    pub countries_raw: Option<String>,
    pub genres_raw: Option<String>,
}

/// A movie with its semi-structured fields decoded
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRecord {
    pub movie_id: Option<MovieId>,
    pub freebase_movie_id: Option<String>,
    pub title: String,
    pub release_date: Option<PartialDate>,
    pub box_office: Option<f64>,
    pub runtime: Option<f64>,
    pub languages: Vec<String>,
    pub countries: Vec<String>,
    /// Never null: a movie whose genre field failed to decode has an empty set
    pub genres: BTreeSet<String>,
    pub summary: String,
}

impl MovieRecord {
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.map(|d| d.year)
    }
}

/// All movies, in source order
#[derive(Debug, Clone, Default)]
pub struct MovieTable {
    pub(crate) movies: Vec<Arc<MovieRecord>>,
}

impl MovieTable {
    pub fn new(movies: Vec<MovieRecord>) -> Self {
        Self {
            movies: movies.into_iter().map(Arc::new).collect(),
        }
    }

    pub fn movies(&self) -> &[Arc<MovieRecord>] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }
}

// =============================================================================
// Appearance Types
// =============================================================================

/// One character played by one actor in one movie, as read from
/// `character.metadata.tsv`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppearanceRecord {
    pub movie_id: Option<MovieId>,
    pub freebase_movie_id: Option<String>,
    pub release_date: Option<PartialDate>,
    pub character_name: Option<String>,
    pub actor_dob: Option<PartialDate>,
    /// Raw single-letter code; mapped to `Gender` by the cleaner
    pub actor_gender: Option<String>,
    /// Meters
    pub actor_height: Option<f64>,
    pub actor_ethnicity: Option<String>,
    pub actor_name: Option<String>,
    pub actor_age_at_release: Option<f64>,
    pub character_actor_map_id: Option<String>,
    pub character_id: Option<String>,
    pub actor_id: Option<String>,
}

/// All appearances, in source order
#[derive(Debug, Clone, Default)]
pub struct AppearanceTable {
    pub(crate) rows: Vec<AppearanceRecord>,
}

impl AppearanceTable {
    pub fn new(rows: Vec<AppearanceRecord>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[AppearanceRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// =============================================================================
// Join Types
// =============================================================================

/// An appearance paired with the movie it references.
///
/// Both sides are kept whole; overlapping columns (`release_date`,
/// `freebase_movie_id`) are still ambiguous at this stage and are settled
/// by the cleaner.
#[derive(Debug, Clone)]
pub struct JoinedRow {
    pub movie_id: MovieId,
    pub appearance: AppearanceRecord,
    pub movie: Arc<MovieRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct JoinedTable {
    pub(crate) rows: Vec<JoinedRow>,
}

impl JoinedTable {
    pub fn rows(&self) -> &[JoinedRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One cleaned actor-in-movie row.
///
/// Movie-level columns are reached through `movie`; the appearance's own
/// copy of the release date and Freebase id is gone.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedRecord {
    pub movie_id: MovieId,
    pub movie: Arc<MovieRecord>,
    pub character_name: Option<String>,
    pub actor_name: Option<String>,
    pub actor_gender: Option<Gender>,
    /// Finite and positive when present
    pub actor_height: Option<f64>,
    pub actor_dob: Option<PartialDate>,
    pub actor_age_at_release: Option<f64>,
    pub actor_ethnicity: Option<String>,
    pub actor_id: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MergedTable {
    pub(crate) rows: Vec<MergedRecord>,
}

impl MergedTable {
    pub fn rows(&self) -> &[MergedRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
