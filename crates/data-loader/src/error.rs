//! Error types for the data-loader crate.
//!
//! Only conditions that make the whole dataset unusable are errors here.
//! Malformed cells (a broken genre field, a height that is not a number)
//! degrade to "missing" inside the parser and never surface as a
//! `DataLoadError`.

use thiserror::Error;

/// Errors that can occur while loading the movie corpus
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// A required source file is not on disk
    ///
    /// Fatal to construction: every aggregation is meaningless without
    /// both the movie and the character tables.
    #[error("Required data file is unavailable: {path}")]
    DataUnavailable { path: String },

    /// I/O error occurred while reading a file that does exist
    #[error("I/O error while reading {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_unavailable_names_the_file() {
        let err = DataLoadError::DataUnavailable {
            path: "downloads/movie.metadata.tsv".to_string(),
        };
        assert!(err.to_string().contains("movie.metadata.tsv"));
    }
}
