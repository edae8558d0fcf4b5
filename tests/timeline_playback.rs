use chronoscope::data::{MAX_YEAR, MIN_YEAR};
use chronoscope::timeline::{TimelineState, MAX_SPEED, MIN_SPEED};
use chronoscope::ChronoscopeError;

fn timeline() -> TimelineState {
    TimelineState::new(MIN_YEAR, MAX_YEAR)
}

#[test]
fn starts_stopped_at_the_first_year() {
    let timeline = timeline();
    assert_eq!(timeline.current_year(), 1948);
    assert!(!timeline.is_playing());
    assert_eq!(timeline.speed(), 1.0);
}

#[test]
fn out_of_range_year_is_rejected_and_state_unchanged() {
    let mut timeline = timeline();
    timeline.set_year(1999).unwrap();

    let err = timeline.set_year(2030).unwrap_err();
    assert!(matches!(
        err,
        ChronoscopeError::YearOutOfRange { year: 2030, .. }
    ));
    assert_eq!(timeline.current_year(), 1999);

    assert!(timeline.set_year(1947).is_err());
    assert_eq!(timeline.current_year(), 1999);
}

#[test]
fn set_year_works_while_playing_and_does_not_pause() {
    let mut timeline = timeline();
    timeline.play();
    timeline.set_year(2000).unwrap();
    assert_eq!(timeline.current_year(), 2000);
    assert!(timeline.is_playing());
}

#[test]
fn play_and_pause_are_idempotent() {
    let mut timeline = timeline();
    timeline.play();
    timeline.play();
    assert!(timeline.is_playing());
    timeline.pause();
    timeline.pause();
    assert!(!timeline.is_playing());
}

#[test]
fn tick_at_speed_one_advances_after_one_accumulated_second() {
    let mut timeline = timeline();
    timeline.play();

    assert!(!timeline.tick(600));
    assert_eq!(timeline.current_year(), 1948);
    assert!(timeline.tick(400));
    assert_eq!(timeline.current_year(), 1949);
}

#[test]
fn tick_advances_at_most_one_year_per_evaluation() {
    let mut timeline = timeline();
    timeline.play();

    // Five seconds in one stalled frame still moves a single year.
    assert!(timeline.tick(5_000));
    assert_eq!(timeline.current_year(), 1949);
}

#[test]
fn playback_wraps_to_the_first_year() {
    let mut timeline = timeline();
    timeline.set_year(MAX_YEAR).unwrap();
    timeline.play();

    assert!(timeline.tick(1_000));
    assert_eq!(timeline.current_year(), MIN_YEAR);
    assert!(timeline.is_playing());
}

#[test]
fn strict_speed_api_rejects_and_leaves_state_unchanged() {
    let mut timeline = timeline();

    let err = timeline.set_speed(5.0).unwrap_err();
    assert!(matches!(err, ChronoscopeError::SpeedOutOfRange { .. }));
    assert_eq!(timeline.speed(), 1.0);

    assert!(timeline.set_speed(0.0).is_err());
    assert!(timeline.set_speed(f64::NAN).is_err());
    assert_eq!(timeline.speed(), 1.0);

    timeline.set_speed(1.5).unwrap();
    assert_eq!(timeline.speed(), 1.5);
}

#[test]
fn clamped_speed_path_clamps_into_range() {
    let mut timeline = timeline();

    assert_eq!(timeline.set_speed_clamped(5.0), MAX_SPEED);
    assert_eq!(timeline.set_speed_clamped(0.1), MIN_SPEED);
    assert_eq!(timeline.set_speed_clamped(1.5), 1.5);
    // Non-finite input keeps the previous speed.
    assert_eq!(timeline.set_speed_clamped(f64::NAN), 1.5);
}

#[test]
fn faster_speed_shortens_the_interval() {
    let mut timeline = timeline();
    timeline.play();
    timeline.set_speed(2.0).unwrap();

    assert!(!timeline.tick(400));
    assert!(timeline.tick(100));
    assert_eq!(timeline.current_year(), 1949);
}
