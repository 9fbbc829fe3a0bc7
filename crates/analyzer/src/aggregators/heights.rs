//! Actor height filtering and histogram.

use crate::aggregators::releases::ALL;
use crate::error::{AnalyzerError, Result};
use crate::results::{ActorHeight, HeightBin};
use data_loader::{Gender, MergedTable};
use std::collections::BTreeSet;
use tracing::info;

/// Number of buckets the height chart uses unless told otherwise
pub const DEFAULT_HEIGHT_BINS: usize = 20;

/// Upper bound on histogram buckets; counters are allocated up front
pub const MAX_HEIGHT_BINS: usize = 1_000;

/// Keep merged rows with a known height in `[min_height, max_height]`,
/// restricted to `gender` unless it is `All`.
///
/// A gender label that never occurs in the data is an invalid request; a
/// valid request that matches nothing returns an empty result. So does
/// `min_height > max_height`.
pub fn actor_distributions(
    merged: &MergedTable,
    gender: &str,
    min_height: f64,
    max_height: f64,
) -> Result<Vec<ActorHeight>> {
    if !min_height.is_finite() {
        return Err(AnalyzerError::invalid(
            "min_height",
            "must be a finite number of meters",
        ));
    }
    if !max_height.is_finite() {
        return Err(AnalyzerError::invalid(
            "max_height",
            "must be a finite number of meters",
        ));
    }

    let gender_filter = if gender == ALL {
        None
    } else {
        let known: BTreeSet<&str> = merged
            .rows()
            .iter()
            .filter_map(|r| r.actor_gender.as_ref())
            .map(Gender::label)
            .collect();
        if !known.contains(gender) {
            let mut choices: Vec<&str> = known.into_iter().collect();
            choices.push(ALL);
            return Err(AnalyzerError::invalid(
                "gender",
                format!("{:?} does not occur in the data, choose from {:?}", gender, choices),
            ));
        }
        Some(gender)
    };

    let filtered: Vec<ActorHeight> = merged
        .rows()
        .iter()
        .filter(|r| {
            gender_filter.is_none_or(|g| r.actor_gender.as_ref().is_some_and(|a| a.label() == g))
        })
        .filter_map(|r| {
            let height = r.actor_height?;
            (min_height..=max_height).contains(&height).then(|| ActorHeight {
                movie_id: r.movie_id,
                title: r.movie.title.clone(),
                actor_name: r.actor_name.clone(),
                actor_gender: r.actor_gender.as_ref().map(|g| g.label().to_string()),
                actor_height: height,
            })
        })
        .collect();

    info!(
        "Filtered {} actors for gender={}, height {}m - {}m",
        filtered.len(),
        gender,
        min_height,
        max_height
    );
    Ok(filtered)
}

/// Bucket the heights of an `actor_distributions` result into `bins`
/// equal-width buckets spanning the observed minimum and maximum.
///
/// When every height is the same there is a single bucket. `bins` must lie
/// in `1..=MAX_HEIGHT_BINS`.
pub fn height_histogram(rows: &[ActorHeight], bins: usize) -> Result<Vec<HeightBin>> {
    if bins == 0 {
        return Err(AnalyzerError::invalid("bins", "must be a positive integer"));
    }
    if bins > MAX_HEIGHT_BINS {
        return Err(AnalyzerError::invalid(
            "bins",
            format!("must be at most {}", MAX_HEIGHT_BINS),
        ));
    }
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let lo = rows.iter().map(|r| r.actor_height).fold(f64::INFINITY, f64::min);
    let hi = rows
        .iter()
        .map(|r| r.actor_height)
        .fold(f64::NEG_INFINITY, f64::max);

    if hi <= lo {
        return Ok(vec![HeightBin {
            lower: lo,
            upper: hi,
            count: rows.len(),
        }]);
    }

    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0usize; bins];
    for row in rows {
        let idx = ((row.actor_height - lo) / width) as usize;
        counts[idx.min(bins - 1)] += 1;
    }

    Ok(counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HeightBin {
            lower: lo + width * i as f64,
            upper: if i + 1 == bins { hi } else { lo + width * (i + 1) as f64 },
            count,
        })
        .collect())
}
