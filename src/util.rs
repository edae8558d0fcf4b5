//! Utility functions for Chronoscope.

use crate::clipboard;
use crate::data::{Series, YearRecord};
use crate::error::Result;

/// Copy a single year record to the clipboard as aligned text.
pub fn copy_record_info(record: &YearRecord) -> Result<()> {
    clipboard::copy_to_clipboard(&record_text(record))
}

/// Copy a whole series to the clipboard as CSV.
pub fn copy_series_csv(series: &Series) -> Result<()> {
    clipboard::copy_to_clipboard(&series_csv(series))
}

/// Render one record as readable text.
pub fn record_text(record: &YearRecord) -> String {
    let mut text = format!("Year: {}\n", record.year);
    for (label, pair) in [
        ("Population", &record.population),
        ("Casualties", &record.casualties),
        ("Prisoners", &record.prisoners),
        ("Territory", &record.territory),
    ] {
        text.push_str(&format!(
            "{label}: partyA={} partyB={}\n",
            pair.party_a, pair.party_b
        ));
    }
    text
}

/// Render a series as CSV with the import header layout.
pub fn series_csv(series: &Series) -> String {
    let mut text = String::from(
        "year,population_party_a,population_party_b,casualties_party_a,casualties_party_b,prisoners_party_a,prisoners_party_b,territory_party_a,territory_party_b\n",
    );
    for record in series.iter() {
        text.push_str(&format!(
            "{},{},{},{},{},{},{},{},{}\n",
            record.year,
            record.population.party_a,
            record.population.party_b,
            record.casualties.party_a,
            record.casualties.party_b,
            record.prisoners.party_a,
            record.prisoners.party_b,
            record.territory.party_a,
            record.territory.party_b,
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{import, ImportFormat, Pair};

    #[test]
    fn series_csv_round_trips_through_the_importer() {
        let original = Series::new(vec![YearRecord {
            year: 1950,
            population: Pair::new(1_600_000.0, 950_000.0),
            casualties: Pair::new(60.0, 12.0),
            prisoners: Pair::new(2_000.0, 20.0),
            territory: Pair::new(45.0, 55.0),
        }]);
        let csv = series_csv(&original);
        let reimported = import(csv.as_bytes(), ImportFormat::Csv).unwrap();
        assert_eq!(reimported.get(1950), original.get(1950));
    }
}
