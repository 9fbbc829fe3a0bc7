//! Error types for the analyzer crate.

use data_loader::DataLoadError;
use thiserror::Error;

/// Errors surfaced by analyzer construction and queries
///
/// An aggregation that matches nothing is not an error: it returns an empty
/// result. `InvalidArgument` is reserved for requests outside an argument's
/// domain, and leaves the analyzer untouched.
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Caller supplied a parameter outside its documented domain
    #[error("Invalid argument `{argument}`: {reason}")]
    InvalidArgument {
        argument: &'static str,
        reason: String,
    },

    /// The corpus could not be loaded
    #[error(transparent)]
    Load(#[from] DataLoadError),
}

impl AnalyzerError {
    pub(crate) fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        AnalyzerError::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, AnalyzerError>;
