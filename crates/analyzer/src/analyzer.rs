//! # MovieAnalyzer
//!
//! An immutable value wrapping a prepared `Dataset`. It is built once, by
//! [`MovieAnalyzer::load`] or [`MovieAnalyzer::from_dataset`], and every
//! query borrows it. Two analyzers never share state, so tests and
//! parallel callers can each hold their own.

use crate::aggregators;
use crate::error::Result;
use crate::results::*;
use crate::sample;
use data_loader::{DataPaths, Dataset};
use rand::Rng;
use tracing::info;

#[derive(Debug, Clone)]
pub struct MovieAnalyzer {
    dataset: Dataset,
}

impl MovieAnalyzer {
    /// Load the corpus from disk and prepare every table.
    ///
    /// Fails with `DataUnavailable` (wrapped in `AnalyzerError::Load`) when
    /// a required file is missing.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        let dataset = Dataset::load(paths)?;
        info!("Movie analyzer ready");
        Ok(Self::from_dataset(dataset))
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Top `n` genres by number of movies
    pub fn movie_type(&self, n: usize) -> Result<Vec<GenreCount>> {
        aggregators::movie_type(self.dataset.movies(), n)
    }

    /// Movies per release year, optionally for one genre (`All` = no filter)
    pub fn releases(&self, genre: Option<&str>) -> Vec<YearCount> {
        aggregators::releases(self.dataset.movies(), genre)
    }

    /// How many movies have exactly k named actors
    pub fn actor_count(&self) -> Vec<ActorCountBucket> {
        aggregators::actor_count(self.dataset.merged())
    }

    /// Actor births per year (`"Y"`) or month (`"M"`)
    pub fn ages(&self, mode: &str) -> Vec<BirthCount> {
        aggregators::ages(self.dataset.appearances(), mode)
    }

    pub fn actor_distributions(
        &self,
        gender: &str,
        min_height: f64,
        max_height: f64,
    ) -> Result<Vec<ActorHeight>> {
        aggregators::actor_distributions(self.dataset.merged(), gender, min_height, max_height)
    }

    pub fn available_genres(&self) -> Vec<String> {
        aggregators::available_genres(self.dataset.movies())
    }

    pub fn sample_movie<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<MovieSample> {
        sample::sample_movie(self.dataset.movies(), rng)
    }
}
