//! Yearly record and series types.

use std::collections::HashMap;

use serde::Deserialize;

/// First year covered by the built-in dataset.
pub const MIN_YEAR: i32 = 1948;
/// Last year covered by the built-in dataset.
pub const MAX_YEAR: i32 = 2024;

/// One value per party.
///
/// The structured import format spells the fields `partyA`/`partyB`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pair {
    /// Value for party A.
    pub party_a: f64,
    /// Value for party B.
    pub party_b: f64,
}

impl Pair {
    /// Create a pair from both party values.
    pub fn new(party_a: f64, party_b: f64) -> Self {
        Self { party_a, party_b }
    }
}

/// Statistics for a single year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRecord {
    /// The year this record describes.
    pub year: i32,
    /// Population totals.
    pub population: Pair,
    /// Casualties during this year.
    pub casualties: Pair,
    /// Prisoners held during this year.
    pub prisoners: Pair,
    /// Territory shares in percent; the two shares sum to 100.
    pub territory: Pair,
}

/// An immutable sequence of yearly records.
///
/// Records are normalized to ascending year order on construction. Lookup
/// goes through a year index and tolerates gaps: imported datasets are not
/// required to be contiguous, and a missing year is simply absent.
#[derive(Debug, Clone)]
pub struct Series {
    records: Vec<YearRecord>,
    by_year: HashMap<i32, usize>,
}

impl Series {
    /// Build a series from records in any order.
    ///
    /// Records are sorted by year; when a year appears more than once the
    /// last occurrence wins.
    pub fn new(mut records: Vec<YearRecord>) -> Self {
        records.sort_by_key(|r| r.year);
        let mut deduped: Vec<YearRecord> = Vec::with_capacity(records.len());
        for record in records {
            if deduped.last().map(|last| last.year) == Some(record.year) {
                let last = deduped.len() - 1;
                deduped[last] = record;
            } else {
                deduped.push(record);
            }
        }
        let by_year = deduped
            .iter()
            .enumerate()
            .map(|(idx, r)| (r.year, idx))
            .collect();
        Self {
            records: deduped,
            by_year,
        }
    }

    /// Look up the record for a year. `None` means no data for that year.
    pub fn get(&self, year: i32) -> Option<&YearRecord> {
        self.by_year.get(&year).map(|&idx| &self.records[idx])
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest year in the series.
    pub fn min_year(&self) -> Option<i32> {
        self.records.first().map(|r| r.year)
    }

    /// Latest year in the series.
    pub fn max_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }

    /// Iterate records in ascending year order.
    pub fn iter(&self) -> impl Iterator<Item = &YearRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, pop_a: f64) -> YearRecord {
        YearRecord {
            year,
            population: Pair::new(pop_a, 0.0),
            casualties: Pair::default(),
            prisoners: Pair::default(),
            territory: Pair::new(50.0, 50.0),
        }
    }

    #[test]
    fn normalizes_order_and_tolerates_gaps() {
        let series = Series::new(vec![record(1990, 1.0), record(1950, 2.0), record(1970, 3.0)]);
        let years: Vec<i32> = series.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![1950, 1970, 1990]);
        assert!(series.get(1970).is_some());
        assert!(series.get(1960).is_none());
        assert_eq!(series.min_year(), Some(1950));
        assert_eq!(series.max_year(), Some(1990));
    }

    #[test]
    fn duplicate_year_last_occurrence_wins() {
        let series = Series::new(vec![record(1950, 1.0), record(1950, 9.0)]);
        assert_eq!(series.len(), 1);
        assert_eq!(series.get(1950).unwrap().population.party_a, 9.0);
    }
}
