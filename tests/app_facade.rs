use std::cell::RefCell;
use std::rc::Rc;

use chronoscope::app::App;
use chronoscope::events::ChangeEvent;

fn loaded_app() -> App {
    let mut app = App::new(Some(5));
    app.on_tick(800);
    app
}

#[test]
fn subscribers_see_transitions_until_unsubscribed() {
    let mut app = loaded_app();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    let id = app.subscribe(move |event| sink.borrow_mut().push(*event));

    app.set_year(1967).unwrap();
    app.toggle_playback();
    app.speed_up();

    assert_eq!(
        seen.borrow().as_slice(),
        &[
            ChangeEvent::YearChanged(1967),
            ChangeEvent::PlaybackChanged(true),
            ChangeEvent::SpeedChanged(1.5),
        ]
    );

    assert!(app.unsubscribe(id));
    app.set_year(1970).unwrap();
    assert_eq!(seen.borrow().len(), 3);
}

#[test]
fn playback_advance_emits_year_changes() {
    let mut app = loaded_app();
    let seen = Rc::new(RefCell::new(Vec::new()));

    let sink = Rc::clone(&seen);
    app.subscribe(move |event| {
        if let ChangeEvent::YearChanged(year) = event {
            sink.borrow_mut().push(*year);
        }
    });

    app.toggle_playback();
    app.on_tick(600);
    app.on_tick(600);
    app.on_tick(1_000);

    assert_eq!(seen.borrow().as_slice(), &[1949, 1950]);
}

#[test]
fn step_year_stops_at_the_bounds() {
    let mut app = loaded_app();

    app.step_year(-5);
    assert_eq!(app.current_year(), 1948);

    app.set_year(2023).unwrap();
    app.step_year(10);
    assert_eq!(app.current_year(), 2024);
}

#[test]
fn speed_nudges_are_clamped_to_the_allowed_range() {
    let mut app = loaded_app();

    for _ in 0..10 {
        app.speed_up();
    }
    assert_eq!(app.timeline.speed(), 2.0);

    for _ in 0..10 {
        app.speed_down();
    }
    assert_eq!(app.timeline.speed(), 0.5);
}

#[test]
fn current_record_follows_the_displayed_year() {
    let mut app = loaded_app();

    app.set_year(1994).unwrap();
    let record = app.current_record().expect("generated year");
    assert_eq!(record.year, 1994);
    assert_eq!(record.territory.party_a, 25.0);
    assert_eq!(record.territory.party_b, 75.0);
}

#[test]
fn strict_speed_errors_leave_the_app_unchanged() {
    let mut app = loaded_app();

    assert!(app.set_speed(9.0).is_err());
    assert_eq!(app.timeline.speed(), 1.0);
}
