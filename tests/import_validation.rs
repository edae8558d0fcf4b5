use chronoscope::app::App;
use chronoscope::data::ActiveSource;
use tempfile::tempdir;

fn loaded_app() -> App {
    let mut app = App::new(Some(17));
    // Complete the simulated dataset load.
    app.on_tick(800);
    assert!(app.provider.active().is_some());
    app
}

#[test]
fn failed_import_leaves_the_active_dataset_intact() {
    let mut app = loaded_app();
    let before = app.provider.lookup(1950).cloned().expect("loaded year");

    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    // population.partyB missing on the only record
    std::fs::write(&path, r#"[{"year": 1950, "population": {"partyA": 1}}]"#).unwrap();

    app.import_file(&path);

    assert!(app.error_message.is_some());
    assert_eq!(app.provider.source(), ActiveSource::Default);
    assert_eq!(app.provider.lookup(1950), Some(&before));
}

#[test]
fn csv_import_switches_to_custom_and_tolerates_gaps() {
    let mut app = loaded_app();

    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.csv");
    std::fs::write(
        &path,
        "year,population_party_a,population_party_b\n\
         1960,2000000,1200000\n\
         1950,1600000,950000\n",
    )
    .unwrap();

    app.import_file(&path);

    assert!(app.error_message.is_none());
    assert_eq!(app.provider.source(), ActiveSource::Custom);
    assert_eq!(
        app.provider.lookup(1960).map(|r| r.population.party_a),
        Some(2_000_000.0)
    );
    // Years the import does not cover are simply absent.
    assert!(app.provider.lookup(1955).is_none());
    assert!(app.current_record().is_none());
}

#[test]
fn reset_after_import_restores_the_generated_dataset() {
    let mut app = loaded_app();
    let original = app.provider.lookup(1970).cloned().expect("loaded year");

    let dir = tempdir().unwrap();
    let path = dir.path().join("custom.json");
    std::fs::write(
        &path,
        r#"[{"year": 1970, "population": {"partyA": 7, "partyB": 8}}]"#,
    )
    .unwrap();

    app.import_file(&path);
    assert_eq!(
        app.provider.lookup(1970).map(|r| r.population.party_a),
        Some(7.0)
    );

    app.reset_data();
    assert_eq!(app.provider.source(), ActiveSource::Default);
    assert_eq!(app.provider.lookup(1970), Some(&original));
}

#[test]
fn unsupported_extension_is_reported_not_imported() {
    let mut app = loaded_app();

    let dir = tempdir().unwrap();
    let path = dir.path().join("data.txt");
    std::fs::write(&path, "year\n1950\n").unwrap();

    app.import_file(&path);

    assert!(app
        .error_message
        .as_deref()
        .is_some_and(|m| m.contains("Unsupported file format")));
    assert_eq!(app.provider.source(), ActiveSource::Default);
}
