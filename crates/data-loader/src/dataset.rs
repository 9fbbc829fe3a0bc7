//! Dataset construction: `load → decode-genres → join → clean`.
//!
//! Each stage takes an immutable table and returns a new one. The result is
//! a `Dataset` holding the decoded movies, the raw appearances and the
//! cleaned merged table; nothing mutates it afterwards.

use crate::clean::clean;
use crate::decode::decode_movies;
use crate::error::{DataLoadError, Result};
use crate::join::merge;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default directory the acquisition step extracts the corpus into
pub const DEFAULT_DATA_DIR: &str = "downloads";

pub const MOVIE_FILE: &str = "movie.metadata.tsv";
pub const CHARACTER_FILE: &str = "character.metadata.tsv";
pub const SUMMARY_FILE: &str = "plot_summaries.txt";

/// Locations of the source files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub movies: PathBuf,
    pub characters: PathBuf,
    /// Optional: a missing summary file is not an error
    pub summaries: PathBuf,
}

impl DataPaths {
    /// Use the well-known file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            movies: dir.join(MOVIE_FILE),
            characters: dir.join(CHARACTER_FILE),
            summaries: dir.join(SUMMARY_FILE),
        }
    }
}

impl Default for DataPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

/// The fully prepared corpus
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    movies: MovieTable,
    appearances: AppearanceTable,
    merged: MergedTable,
}

impl Dataset {
    /// Load the corpus from disk.
    ///
    /// Fails with `DataUnavailable` if the movie or character file is
    /// missing. The two required files are parsed in parallel.
    pub fn load(paths: &DataPaths) -> Result<Self> {
        info!(
            "Loading movie corpus from {} and {}",
            paths.movies.display(),
            paths.characters.display()
        );

        let (movies, appearances) = rayon::join(
            || parser::parse_movies(&paths.movies),
            || parser::parse_characters(&paths.characters),
        );
        let movies = movies?;
        let appearances = appearances?;

        let summaries = match parser::parse_summaries(&paths.summaries) {
            Ok(summaries) => summaries,
            Err(DataLoadError::DataUnavailable { path }) => {
                warn!("No plot summaries at {}, using placeholder summaries", path);
                HashMap::new()
            }
            Err(e) => return Err(e),
        };

        let dataset = Self::from_parts(movies, appearances, &summaries);
        let (movies, appearances, merged) = dataset.counts();
        info!(
            "Loaded {} movies, {} appearances, {} merged rows",
            movies, appearances, merged
        );
        Ok(dataset)
    }

    /// Run the in-memory part of the pipeline on already parsed rows
    pub fn from_parts(
        raw_movies: Vec<RawMovie>,
        appearances: AppearanceTable,
        summaries: &HashMap<MovieId, String>,
    ) -> Self {
        let movies = decode_movies(raw_movies, summaries);
        let merged = clean(merge(&movies, &appearances));
        Self {
            movies,
            appearances,
            merged,
        }
    }

    pub fn movies(&self) -> &MovieTable {
        &self.movies
    }

    pub fn appearances(&self) -> &AppearanceTable {
        &self.appearances
    }

    pub fn merged(&self) -> &MergedTable {
        &self.merged
    }

    /// (movies, appearances, merged rows)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.appearances.len(), self.merged.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_data_paths_in_dir() {
        let paths = DataPaths::in_dir("/data");
        assert_eq!(paths.movies, Path::new("/data/movie.metadata.tsv"));
        assert_eq!(paths.characters, Path::new("/data/character.metadata.tsv"));
        assert_eq!(paths.summaries, Path::new("/data/plot_summaries.txt"));
        assert_eq!(DataPaths::default(), DataPaths::in_dir("downloads"));
    }

    #[test]
    fn test_load_without_summaries() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(MOVIE_FILE),
            "1\t/m/a\tAlpha\t1999\t\t90.0\t{}\t{}\t{\"/m/07s9rl0\": \"Drama\"}\n",
        )
        .unwrap();
        fs::write(
            dir.path().join(CHARACTER_FILE),
            "1\t/m/a\t1999\tHero\t1970-01-02\tM\t1.80\t\tActor One\t29\n\
             2\t/m/b\t2001\tGhost\t\tF\t\t\tActor Two\t\n",
        )
        .unwrap();

        let dataset = Dataset::load(&DataPaths::in_dir(dir.path())).unwrap();

        assert_eq!(dataset.counts(), (1, 2, 1));
        assert_eq!(dataset.movies().movies()[0].summary, NO_SUMMARY);
        assert_eq!(dataset.merged().rows()[0].actor_gender, Some(Gender::Male));
    }

    #[test]
    fn test_load_missing_character_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(MOVIE_FILE), "1\t/m/a\tAlpha\n").unwrap();

        match Dataset::load(&DataPaths::in_dir(dir.path())) {
            Err(DataLoadError::DataUnavailable { path }) => {
                assert!(path.ends_with(CHARACTER_FILE))
            }
            other => panic!("expected DataUnavailable, got {:?}", other.map(|d| d.counts())),
        }
    }
}
