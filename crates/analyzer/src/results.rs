//! Row types returned by the aggregators.
//!
//! Every aggregator returns an ordered `Vec` of one of these. They carry no
//! display formatting and serialize directly to JSON.

use data_loader::MovieId;
use serde::Serialize;

/// One entry of the genre ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreCount {
    pub genre: String,
    pub count: usize,
}

/// Number of movies released in one year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// `movies` movies have exactly `actors` named actors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActorCountBucket {
    pub actors: usize,
    pub movies: usize,
}

/// Number of appearances whose actor was born in `period`
/// (a year or a month number, depending on the query mode)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BirthCount {
    pub period: i32,
    pub count: usize,
}

/// One actor-in-movie row that passed the height filter
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActorHeight {
    pub movie_id: MovieId,
    pub title: String,
    pub actor_name: Option<String>,
    pub actor_gender: Option<String>,
    pub actor_height: f64,
}

/// One bucket of a height histogram, `[lower, upper)` except the last
/// bucket which also includes `upper`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeightBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// A single movie picked for genre classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MovieSample {
    pub movie_id: Option<MovieId>,
    pub title: String,
    pub summary: String,
    /// Resolved genres only; `Unknown (...)` labels are removed
    pub genres: Vec<String>,
}
