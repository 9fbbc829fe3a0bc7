//! Aggregate views over the movie corpus.
//!
//! This crate provides:
//! - `MovieAnalyzer`, an immutable value built once from a prepared dataset
//! - the aggregators: genre ranking, releases per year, actors per movie,
//!   actor birth distribution, actor height filter and histogram
//! - random movie sampling for the genre classification collaborator
//!
//! ## Example Usage
//! ```ignore
//! use analyzer::MovieAnalyzer;
//! use data_loader::DataPaths;
//!
//! let analyzer = MovieAnalyzer::load(&DataPaths::default())?;
//! for row in analyzer.movie_type(10)? {
//!     println!("{}: {}", row.genre, row.count);
//! }
//! let tall_women = analyzer.actor_distributions("Female", 1.75, 2.1)?;
//! ```

pub mod error;
pub mod results;
pub mod aggregators;
pub mod sample;
pub mod analyzer;

// Re-export main types
pub use error::{AnalyzerError, Result};
pub use results::{
    ActorCountBucket, ActorHeight, BirthCount, GenreCount, HeightBin, MovieSample, YearCount,
};
pub use aggregators::{AgeMode, ALL, DEFAULT_HEIGHT_BINS, MAX_HEIGHT_BINS, height_histogram};
pub use sample::known_genres;
pub use analyzer::MovieAnalyzer;
