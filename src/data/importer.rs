//! Dataset import and structural validation.
//!
//! Two formats are accepted: tabular CSV with a header row, and a JSON
//! array of record objects with nested per-party sections. Validation is
//! all-or-nothing: reasons are collected across every record and a single
//! failing record rejects the whole import, leaving the active dataset
//! untouched at the call site.

use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::data::record::{Pair, Series, YearRecord};
use crate::error::{ChronoscopeError, Result};

/// Declared format of an imported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Delimited text with a header row.
    Csv,
    /// A JSON array of record objects.
    Json,
}

impl ImportFormat {
    /// Determine the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");
        match extension.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(ChronoscopeError::unsupported_format(other)),
        }
    }
}

/// Parse and validate raw bytes into a series.
pub fn import(raw: &[u8], format: ImportFormat) -> Result<Series> {
    let records = match format {
        ImportFormat::Csv => parse_csv(raw)?,
        ImportFormat::Json => parse_json(raw)?,
    };
    if records.is_empty() {
        return Err(ChronoscopeError::validation(vec![
            "dataset contains no records".to_string(),
        ]));
    }
    Ok(Series::new(records))
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    year: Option<f64>,
    population_party_a: Option<f64>,
    population_party_b: Option<f64>,
    #[serde(default)]
    casualties_party_a: Option<f64>,
    #[serde(default)]
    casualties_party_b: Option<f64>,
    #[serde(default)]
    prisoners_party_a: Option<f64>,
    #[serde(default)]
    prisoners_party_b: Option<f64>,
    #[serde(default)]
    territory_party_a: Option<f64>,
    #[serde(default)]
    territory_party_b: Option<f64>,
}

fn parse_csv(raw: &[u8]) -> Result<Vec<YearRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(raw);

    let mut records = Vec::new();
    let mut reasons = Vec::new();

    for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
        let number = index + 1;
        let row = match row {
            Ok(row) => row,
            Err(err) => {
                reasons.push(format!("record {number}: {err}"));
                continue;
            }
        };

        let year = require_year(number, row.year, &mut reasons);
        let population_a =
            require_numeric(number, "population.partyA", row.population_party_a, &mut reasons);
        let population_b =
            require_numeric(number, "population.partyB", row.population_party_b, &mut reasons);

        if let (Some(year), Some(pop_a), Some(pop_b)) = (year, population_a, population_b) {
            records.push(YearRecord {
                year,
                population: Pair::new(pop_a, pop_b),
                casualties: Pair::new(
                    row.casualties_party_a.unwrap_or(0.0),
                    row.casualties_party_b.unwrap_or(0.0),
                ),
                prisoners: Pair::new(
                    row.prisoners_party_a.unwrap_or(0.0),
                    row.prisoners_party_b.unwrap_or(0.0),
                ),
                territory: Pair::new(
                    row.territory_party_a.unwrap_or(0.0),
                    row.territory_party_b.unwrap_or(0.0),
                ),
            });
        }
    }

    if reasons.is_empty() {
        Ok(records)
    } else {
        Err(ChronoscopeError::validation(reasons))
    }
}

/// Schema for one structured record; [`Pair`] itself requires both party
/// fields, so a present-but-incomplete section is a deserialization error.
#[derive(Debug, Deserialize)]
struct JsonRecord {
    year: Option<f64>,
    population: Option<Pair>,
    #[serde(default)]
    casualties: Option<Pair>,
    #[serde(default)]
    prisoners: Option<Pair>,
    #[serde(default)]
    territory: Option<Pair>,
}

fn parse_json(raw: &[u8]) -> Result<Vec<YearRecord>> {
    let items: Vec<Value> = serde_json::from_slice(raw).map_err(|err| {
        ChronoscopeError::validation(vec![format!("not a JSON array of records: {err}")])
    })?;

    let mut records = Vec::new();
    let mut reasons = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        let number = index + 1;
        let record = match serde_json::from_value::<JsonRecord>(item) {
            Ok(record) => record,
            Err(err) => {
                reasons.push(format!("record {number}: {err}"));
                continue;
            }
        };

        let year = require_year(number, record.year, &mut reasons);
        let population = record.population;
        if population.is_none() {
            reasons.push(format!("record {number}: missing population"));
        }

        if let (Some(year), Some(population)) = (year, population) {
            records.push(YearRecord {
                year,
                population,
                casualties: record.casualties.unwrap_or_default(),
                prisoners: record.prisoners.unwrap_or_default(),
                territory: record.territory.unwrap_or_default(),
            });
        }
    }

    if reasons.is_empty() {
        Ok(records)
    } else {
        Err(ChronoscopeError::validation(reasons))
    }
}

fn require_year(number: usize, value: Option<f64>, reasons: &mut Vec<String>) -> Option<i32> {
    let Some(year) = value else {
        reasons.push(format!("record {number}: missing year"));
        return None;
    };
    if !year.is_finite() || year.fract() != 0.0 {
        reasons.push(format!("record {number}: year is not an integer"));
        return None;
    }
    Some(year as i32)
}

fn require_numeric(
    number: usize,
    field: &str,
    value: Option<f64>,
    reasons: &mut Vec<String>,
) -> Option<f64> {
    match value {
        Some(v) if v.is_finite() => Some(v),
        Some(_) => {
            reasons.push(format!("record {number}: {field} is not finite"));
            None
        }
        None => {
            reasons.push(format!("record {number}: missing {field}"));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_round_trips_required_and_optional_fields() {
        let raw = b"year,population_party_a,population_party_b,casualties_party_a\n\
                    1950,1600000,950000,60\n\
                    1951,1700000,1100000,70\n";
        let series = import(raw, ImportFormat::Csv).unwrap();
        assert_eq!(series.len(), 2);
        let record = series.get(1950).unwrap();
        assert_eq!(record.population.party_b, 950_000.0);
        assert_eq!(record.casualties.party_a, 60.0);
        assert_eq!(record.prisoners.party_a, 0.0);
    }

    #[test]
    fn csv_missing_population_rejects_whole_import() {
        let raw = b"year,population_party_a\n1950,1600000\n1951,1700000\n";
        let err = import(raw, ImportFormat::Csv).unwrap_err();
        let ChronoscopeError::Validation { reasons } = err else {
            panic!("expected validation error");
        };
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("population.partyB"));
    }

    #[test]
    fn json_collects_reasons_across_records() {
        let raw = br#"[
            {"year": 1950, "population": {"partyA": 1, "partyB": 2}},
            {"population": {"partyA": 1, "partyB": 2}},
            {"year": 1952, "population": {"partyA": 1}}
        ]"#;
        let err = import(raw, ImportFormat::Json).unwrap_err();
        let ChronoscopeError::Validation { reasons } = err else {
            panic!("expected validation error");
        };
        assert_eq!(reasons.len(), 2);
        assert!(reasons[0].contains("record 2"));
        assert!(reasons[1].contains("record 3"));
    }

    #[test]
    fn json_accepts_gappy_unsorted_records() {
        let raw = br#"[
            {"year": 1990, "population": {"partyA": 5, "partyB": 6},
             "territory": {"partyA": 40, "partyB": 60}},
            {"year": 1950, "population": {"partyA": 1, "partyB": 2}}
        ]"#;
        let series = import(raw, ImportFormat::Json).unwrap();
        assert_eq!(series.min_year(), Some(1950));
        assert!(series.get(1970).is_none());
        assert_eq!(series.get(1990).unwrap().territory.party_b, 60.0);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = ImportFormat::from_path(Path::new("data.parquet")).unwrap_err();
        assert!(matches!(err, ChronoscopeError::UnsupportedFormat { .. }));
    }

    #[test]
    fn empty_dataset_is_rejected() {
        let err = import(b"[]", ImportFormat::Json).unwrap_err();
        assert!(matches!(err, ChronoscopeError::Validation { .. }));
    }
}
