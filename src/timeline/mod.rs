//! Timeline playback state machine.
//!
//! The state is the current year, the playback flag, and the speed. The
//! playback clock is an accumulator: the frame loop reports elapsed wall
//! time through [`TimelineState::tick`], and once enough time for one year
//! at the current speed has accumulated the year advances by exactly one.
//! Playback loops back to the first year instead of stopping.

mod clock;

pub use clock::FrameClock;

use crate::error::{ChronoscopeError, Result};

/// Slowest allowed playback speed, in years per second.
pub const MIN_SPEED: f64 = 0.5;
/// Fastest allowed playback speed, in years per second.
pub const MAX_SPEED: f64 = 2.0;

/// Current year, playback flag, and speed for one dashboard instance.
#[derive(Debug, Clone)]
pub struct TimelineState {
    min_year: i32,
    max_year: i32,
    current_year: i32,
    playing: bool,
    speed: f64,
    accumulator_ms: f64,
}

impl TimelineState {
    /// Create a timeline over `min_year..=max_year`, stopped at the start.
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self {
            min_year,
            max_year,
            current_year: min_year,
            playing: false,
            speed: 1.0,
            accumulator_ms: 0.0,
        }
    }

    /// The year currently displayed.
    pub fn current_year(&self) -> i32 {
        self.current_year
    }

    /// Whether playback is running.
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Playback speed in years per second.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// First year of the timeline.
    pub fn min_year(&self) -> i32 {
        self.min_year
    }

    /// Last year of the timeline.
    pub fn max_year(&self) -> i32 {
        self.max_year
    }

    /// Jump to a year. Works while playing and does not pause.
    ///
    /// Fails with [`ChronoscopeError::YearOutOfRange`] when `year` is
    /// outside the bounds; the state is left unchanged in that case.
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        if year < self.min_year || year > self.max_year {
            return Err(ChronoscopeError::YearOutOfRange {
                year,
                min: self.min_year,
                max: self.max_year,
            });
        }
        self.current_year = year;
        Ok(())
    }

    /// Start playback. A no-op when already playing.
    pub fn play(&mut self) {
        self.playing = true;
    }

    /// Stop playback and drop any partially accumulated interval.
    pub fn pause(&mut self) {
        self.playing = false;
        self.accumulator_ms = 0.0;
    }

    /// Toggle playback; returns the new flag.
    pub fn toggle(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    /// Set the speed, rejecting values outside the allowed range.
    ///
    /// This is the strict path for programmatic callers; user-facing
    /// controls go through [`set_speed_clamped`](Self::set_speed_clamped).
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
            return Err(ChronoscopeError::SpeedOutOfRange {
                speed,
                min: MIN_SPEED,
                max: MAX_SPEED,
            });
        }
        self.speed = speed;
        Ok(())
    }

    /// Set the speed, clamping into the allowed range; returns the value
    /// actually applied.
    pub fn set_speed_clamped(&mut self, speed: f64) -> f64 {
        if speed.is_finite() {
            self.speed = speed.clamp(MIN_SPEED, MAX_SPEED);
        }
        self.speed
    }

    /// Milliseconds of playback per year at the current speed.
    pub fn interval_ms(&self) -> f64 {
        1000.0 / self.speed
    }

    /// Feed elapsed time into the playback clock.
    ///
    /// Only meaningful while playing. Advances the year by at most one per
    /// call, resetting the accumulator on advance; surplus elapsed time is
    /// deliberately discarded so a stalled frame never skips years. The
    /// year after `max_year` wraps to `min_year`. Returns whether the year
    /// changed.
    pub fn tick(&mut self, elapsed_ms: u64) -> bool {
        if !self.playing {
            return false;
        }
        self.accumulator_ms += elapsed_ms as f64;
        if self.accumulator_ms < self.interval_ms() {
            return false;
        }
        self.accumulator_ms = 0.0;
        self.current_year = if self.current_year >= self.max_year {
            self.min_year
        } else {
            self.current_year + 1
        };
        true
    }
}
