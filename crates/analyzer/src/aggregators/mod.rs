//! Read-only aggregations over the prepared tables.
//!
//! Each aggregator is a free function over borrowed tables, so it can be
//! called any number of times, with any arguments, on any dataset.

pub mod genres;
pub mod releases;
pub mod actor_count;
pub mod ages;
pub mod heights;

pub use genres::{available_genres, movie_type};
pub use releases::{releases, ALL};
pub use actor_count::actor_count;
pub use ages::{ages, AgeMode};
pub use heights::{actor_distributions, height_histogram, DEFAULT_HEIGHT_BINS, MAX_HEIGHT_BINS};
