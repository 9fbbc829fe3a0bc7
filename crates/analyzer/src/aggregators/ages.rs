//! Actor birth distribution by year or by month.

use crate::results::BirthCount;
use data_loader::AppearanceTable;
use std::collections::BTreeMap;

/// Grouping used by [`ages`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeMode {
    /// Group by birth year
    Year,
    /// Group by birth month (1-12)
    Month,
}

impl AgeMode {
    /// `"Y"` or `"M"`; anything else is not a mode
    pub fn parse(mode: &str) -> Option<Self> {
        match mode {
            "Y" => Some(AgeMode::Year),
            "M" => Some(AgeMode::Month),
            _ => None,
        }
    }
}

/// Count appearances per actor birth year (`"Y"`) or birth month (`"M"`).
///
/// Counts every appearance row, so an actor with several roles counts
/// several times. Rows without a birth date are skipped; in month mode so
/// are dates only known to the year. An unrecognised mode returns an empty
/// result rather than an error.
pub fn ages(appearances: &AppearanceTable, mode: &str) -> Vec<BirthCount> {
    let Some(mode) = AgeMode::parse(mode) else {
        return Vec::new();
    };

    let mut per_period: BTreeMap<i32, usize> = BTreeMap::new();
    for dob in appearances.rows().iter().filter_map(|r| r.actor_dob) {
        let period = match mode {
            AgeMode::Year => Some(dob.year),
            AgeMode::Month => dob.month.map(|m| m as i32),
        };
        if let Some(period) = period {
            *per_period.entry(period).or_insert(0) += 1;
        }
    }

    per_period
        .into_iter()
        .map(|(period, count)| BirthCount { period, count })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregators::fixtures;

    #[test]
    fn test_ages_by_year() {
        let dataset = fixtures::dataset();
        let by_year = ages(dataset.appearances(), "Y");

        // Raw appearances, so the orphan row (1960) counts too
        assert_eq!(
            by_year,
            vec![
                BirthCount {
                    period: 1960,
                    count: 1,
                },
                BirthCount {
                    period: 1970,
                    count: 2,
                },
                BirthCount {
                    period: 1980,
                    count: 1,
                },
                BirthCount {
                    period: 1982,
                    count: 1,
                },
                BirthCount {
                    period: 1990,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_ages_by_month_skips_year_only_dates() {
        let dataset = fixtures::dataset();
        let by_month = ages(dataset.appearances(), "M");

        assert_eq!(
            by_month,
            vec![
                BirthCount {
                    period: 1,
                    count: 1,
                },
                BirthCount {
                    period: 3,
                    count: 2,
                },
                BirthCount {
                    period: 7,
                    count: 1,
                },
                BirthCount {
                    period: 12,
                    count: 1,
                },
            ]
        );
    }

    #[test]
    fn test_ages_unknown_mode_is_empty() {
        let dataset = fixtures::dataset();
        assert!(ages(dataset.appearances(), "Z").is_empty());
        assert!(ages(dataset.appearances(), "y").is_empty());
    }
}
