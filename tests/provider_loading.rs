use std::sync::Arc;

use chronoscope::data::{
    import, ActiveSource, DatasetProvider, ImportFormat, SeededRng, SeriesGenerator, MAX_YEAR,
    MIN_YEAR,
};

fn provider() -> DatasetProvider {
    DatasetProvider::new(SeriesGenerator::historical(), SeededRng::new(21))
}

fn custom_series() -> chronoscope::data::Series {
    import(
        br#"[{"year": 1950, "population": {"partyA": 10, "partyB": 20}}]"#,
        ImportFormat::Json,
    )
    .unwrap()
}

#[test]
fn concurrent_loads_share_one_generation() {
    let mut provider = provider();

    // Two callers request the dataset before it resolves.
    provider.load();
    provider.load();
    assert!(provider.is_loading());

    let first = provider.poll(800).expect("load should complete");
    assert_eq!(provider.generation_runs(), 1);

    // A later request attaches to the cached result rather than
    // generating again.
    provider.load();
    let second = provider.poll(800).expect("load should complete");
    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(provider.generation_runs(), 1);
}

#[test]
fn load_is_not_complete_before_the_simulated_delay() {
    let mut provider = provider();
    provider.load();

    assert!(provider.poll(300).is_none());
    assert!(provider.active().is_none());
    assert!(provider.poll(300).is_none());
    assert!(provider.poll(300).is_some());
}

#[test]
fn replace_during_load_wins_over_the_load() {
    let mut provider = provider();
    provider.load();
    provider.replace(custom_series());

    // The superseded load completes but must not overwrite the import.
    assert!(provider.poll(800).is_none());
    assert_eq!(provider.source(), ActiveSource::Custom);
    assert_eq!(
        provider.lookup(1950).map(|r| r.population.party_a),
        Some(10.0)
    );
    assert_eq!(provider.generation_runs(), 0);
}

#[test]
fn reset_restores_the_original_series_for_every_year() {
    let mut provider = provider();
    provider.load();
    let original = provider.poll(800).expect("load should complete");

    provider.replace(custom_series());
    assert_eq!(provider.source(), ActiveSource::Custom);
    assert!(provider.lookup(1960).is_none());

    provider.reset();
    assert_eq!(provider.source(), ActiveSource::Default);
    for year in MIN_YEAR..=MAX_YEAR {
        assert_eq!(provider.lookup(year), original.get(year));
    }
}

#[test]
fn lookup_outside_the_covered_range_is_not_found() {
    let mut provider = provider();
    provider.load();
    provider.poll(800).expect("load should complete");

    assert!(provider.lookup(1900).is_none());
    assert!(provider.lookup(MAX_YEAR + 1).is_none());
    assert!(provider.lookup(MIN_YEAR).is_some());
}
