//! Parser for the tab-separated corpus files.
//!
//! - movie.metadata.tsv: wikipedia_id, freebase_id, name, release_date,
//!   box_office, runtime, languages, countries, genres
//! - character.metadata.tsv: wikipedia_id, freebase_id, release_date,
//!   character_name, actor_dob, actor_gender, actor_height, actor_ethnicity,
//!   actor_name, actor_age_at_release, character_actor_map_id,
//!   character_id, actor_id
//! - plot_summaries.txt: wikipedia_id, summary
//!
//! None of the files has a header row, so columns are assigned by position.
//! Every cell goes through the same try-parse combinator: a cell that is
//! empty, absent (short row) or unparsable becomes `None` and the row is kept.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Read a whole file into lines.
///
/// Invalid UTF-8 is replaced rather than rejected; a missing file is
/// reported as `DataUnavailable` so callers can tell it apart from other
/// I/O failures.
fn read_lines(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            DataLoadError::DataUnavailable {
                path: path.display().to_string(),
            }
        } else {
            DataLoadError::IoError {
                path: path.display().to_string(),
                source,
            }
        }
    })?;

    let content = String::from_utf8_lossy(&bytes);
    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}

// =============================================================================
// Cell combinators
// =============================================================================

/// Positional cell lookup: trimmed, with empty cells treated as absent
fn cell<'a>(fields: &[&'a str], idx: usize) -> Option<&'a str> {
    fields
        .get(idx)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

/// Try to parse a cell, falling back to "missing" on any failure
fn parse_or_missing<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|s| s.parse::<T>().ok())
}

/// Numeric cell that must also be finite (`NaN`/`inf` parse but are not data)
fn parse_finite(value: Option<&str>) -> Option<f64> {
    parse_or_missing::<f64>(value).filter(|v| v.is_finite())
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn parse_year(s: &str) -> Option<i32> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// Parse a full or partial date: `YYYY`, `YYYY-MM` or `YYYY-MM-DD`.
///
/// A trailing time component (`1958-08-26T00:00:00`) is ignored.
pub fn parse_partial_date(s: &str) -> Option<PartialDate> {
    let date_part = s.trim().split(['T', ' ']).next()?;
    let parts: Vec<&str> = date_part.split('-').collect();

    match parts.as_slice() {
        [y] => parse_year(y).map(PartialDate::year),
        [y, m] => {
            let year = parse_year(y)?;
            let month: u32 = m.parse().ok()?;
            (1..=12).contains(&month).then_some(PartialDate {
                year,
                month: Some(month),
                day: None,
            })
        }
        [y, _, _] => {
            parse_year(y)?;
            let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
            Some(PartialDate {
                year: date.year(),
                month: Some(date.month()),
                day: Some(date.day()),
            })
        }
        _ => None,
    }
}

fn parse_date_cell(value: Option<&str>) -> Option<PartialDate> {
    value.and_then(parse_partial_date)
}

// =============================================================================
// Row parsers
// =============================================================================

fn parse_movie_line(line: &str) -> RawMovie {
    let fields: Vec<&str> = line.split('\t').collect();
    RawMovie {
        movie_id: parse_or_missing(cell(&fields, 0)),
        freebase_movie_id: owned(cell(&fields, 1)),
        title: owned(cell(&fields, 2)),
        release_date: parse_date_cell(cell(&fields, 3)),
        box_office: parse_finite(cell(&fields, 4)),
        runtime: parse_finite(cell(&fields, 5)),
        languages_raw: owned(cell(&fields, 6)),
        countries_raw: owned(cell(&fields, 7)),
        genres_raw: owned(cell(&fields, 8)),
    }
}

fn parse_character_line(line: &str) -> AppearanceRecord {
    let fields: Vec<&str> = line.split('\t').collect();
    AppearanceRecord {
        movie_id: parse_or_missing(cell(&fields, 0)),
        freebase_movie_id: owned(cell(&fields, 1)),
        release_date: parse_date_cell(cell(&fields, 2)),
        character_name: owned(cell(&fields, 3)),
        actor_dob: parse_date_cell(cell(&fields, 4)),
        actor_gender: owned(cell(&fields, 5)),
        actor_height: parse_finite(cell(&fields, 6)),
        actor_ethnicity: owned(cell(&fields, 7)),
        actor_name: owned(cell(&fields, 8)),
        actor_age_at_release: parse_finite(cell(&fields, 9)),
        character_actor_map_id: owned(cell(&fields, 10)),
        character_id: owned(cell(&fields, 11)),
        actor_id: owned(cell(&fields, 12)),
    }
}

/// Parse the movie.metadata.tsv file
pub fn parse_movies(path: &Path) -> Result<Vec<RawMovie>> {
    let lines = read_lines(path)?;
    let movies: Vec<RawMovie> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_movie_line(line))
        .collect();

    let missing_ids = movies.iter().filter(|m| m.movie_id.is_none()).count();
    if missing_ids > 0 {
        debug!("{} movie rows have no usable movie id", missing_ids);
    }
    Ok(movies)
}

/// Parse the character.metadata.tsv file
pub fn parse_characters(path: &Path) -> Result<AppearanceTable> {
    let lines = read_lines(path)?;
    let rows: Vec<AppearanceRecord> = lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_character_line(line))
        .collect();

    let missing_ids = rows.iter().filter(|r| r.movie_id.is_none()).count();
    if missing_ids > 0 {
        debug!("{} character rows have no usable movie id", missing_ids);
    }
    Ok(AppearanceTable::new(rows))
}

/// Parse the plot_summaries.txt file
///
/// Rows without a valid id or without text are skipped; when a movie
/// appears twice the first summary wins.
pub fn parse_summaries(path: &Path) -> Result<HashMap<MovieId, String>> {
    let lines = read_lines(path)?;
    let mut summaries = HashMap::new();

    for line in &lines {
        let Some((id, text)) = line.split_once('\t') else {
            continue;
        };
        let (Some(id), Some(text)) = (
            parse_or_missing::<MovieId>(Some(id.trim())),
            cell(&[text], 0),
        ) else {
            continue;
        };
        summaries.entry(id).or_insert_with(|| text.to_string());
    }
    Ok(summaries)
}
