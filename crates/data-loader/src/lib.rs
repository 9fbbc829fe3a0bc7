//! # Data Loader Crate
//!
//! This crate loads the CMU movie-summary corpus and prepares it for
//! aggregation.
//!
//! ## Main Components
//!
//! - **types**: Table and record types (MovieRecord, AppearanceRecord, MergedRecord)
//! - **parser**: Parse the headerless .tsv files, tolerating malformed cells
//! - **decode**: Turn the embedded genre/language/country fields into labels
//! - **join**: Inner join of appearances with movies on movie id
//! - **clean**: Normalise gender codes and heights on the joined table
//! - **dataset**: Run the whole pipeline once and hold the result
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DataPaths, Dataset};
//!
//! let dataset = Dataset::load(&DataPaths::in_dir("downloads"))?;
//! let (movies, appearances, merged) = dataset.counts();
//! println!("{} movies, {} appearances, {} merged rows", movies, appearances, merged);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod decode;
pub mod join;
pub mod clean;
pub mod dataset;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use types::{
    // Type aliases
    MovieId,
    // Records and tables
    AppearanceRecord,
    AppearanceTable,
    JoinedRow,
    JoinedTable,
    MergedRecord,
    MergedTable,
    MovieRecord,
    MovieTable,
    RawMovie,
    // Values
    Gender,
    PartialDate,
    NO_SUMMARY,
};
pub use decode::{decode_genres, is_unknown_genre};
pub use dataset::{DataPaths, Dataset, DEFAULT_DATA_DIR};
