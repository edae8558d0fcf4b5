//! Application state and logic.

use std::path::Path;

use crate::data::{
    import, DatasetProvider, ImportFormat, SeededRng, SeriesGenerator, YearRecord, MAX_YEAR,
    MIN_YEAR,
};
use crate::error::ChronoscopeError;
use crate::events::{ChangeEvent, SubscriptionId, Subscribers};
use crate::file_browser::FileBrowserState;
use crate::timeline::TimelineState;
use crate::util;
use crate::Result;

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Application state.
///
/// This is the facade views consume: timeline transitions, dataset access,
/// and change subscriptions all go through here so recoverable errors are
/// handled at this boundary and never reach the render layer.
#[derive(Debug)]
pub struct App {
    /// Timeline playback state.
    pub timeline: TimelineState,
    /// Owner of the active dataset.
    pub provider: DatasetProvider,
    /// Change subscriptions.
    pub subscribers: Subscribers,
    /// File browser state.
    pub file_browser: FileBrowserState,
    /// File browser mode.
    pub file_browser_mode: bool,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Error message.
    pub error_message: Option<String>,
}

impl App {
    /// Create a new application instance and start loading the default
    /// dataset.
    ///
    /// `seed` pins the generator's random jitter for reproducible runs.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SeededRng::new(seed),
            None => SeededRng::from_entropy(),
        };
        let mut provider = DatasetProvider::new(SeriesGenerator::historical(), rng);
        provider.load();

        Self {
            timeline: TimelineState::new(MIN_YEAR, MAX_YEAR),
            provider,
            subscribers: Subscribers::new(),
            file_browser: FileBrowserState::new(),
            file_browser_mode: false,
            status: "Loading historical dataset...".to_string(),
            theme: Theme::GruvboxDark,
            error_message: None,
        }
    }

    /// Drive the cooperative clock: complete pending dataset loads and
    /// advance playback.
    pub fn on_tick(&mut self, elapsed_ms: u64) {
        if let Some(series) = self.provider.poll(elapsed_ms) {
            self.status = format!("Loaded {} yearly records", series.len());
            self.subscribers.emit(&ChangeEvent::DatasetChanged);
            tracing::info!(records = series.len(), "Dataset load completed");
        }
        if self.timeline.tick(elapsed_ms) {
            self.subscribers
                .emit(&ChangeEvent::YearChanged(self.timeline.current_year()));
        }
    }

    /// The year currently displayed.
    pub fn current_year(&self) -> i32 {
        self.timeline.current_year()
    }

    /// The record for the displayed year, if the active dataset covers it.
    pub fn current_record(&self) -> Option<&YearRecord> {
        self.provider.lookup(self.timeline.current_year())
    }

    /// Jump to a year (strict bounds check; state unchanged on failure).
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        self.timeline.set_year(year)?;
        self.subscribers.emit(&ChangeEvent::YearChanged(year));
        Ok(())
    }

    /// Scrub by whole years, stopping at the timeline bounds.
    pub fn step_year(&mut self, delta: i32) {
        let target = (self.timeline.current_year() + delta)
            .clamp(self.timeline.min_year(), self.timeline.max_year());
        if target != self.timeline.current_year() {
            // Inside the clamped bounds, so this cannot fail.
            let _ = self.timeline.set_year(target);
            self.subscribers.emit(&ChangeEvent::YearChanged(target));
        }
    }

    /// Toggle playback.
    pub fn toggle_playback(&mut self) {
        let playing = self.timeline.toggle();
        self.status = if playing { "Playing" } else { "Paused" }.to_string();
        self.subscribers.emit(&ChangeEvent::PlaybackChanged(playing));
    }

    /// Set the speed through the strict API path.
    pub fn set_speed(&mut self, speed: f64) -> Result<()> {
        self.timeline.set_speed(speed)?;
        self.subscribers.emit(&ChangeEvent::SpeedChanged(speed));
        Ok(())
    }

    /// Raise the speed by half a year per second (clamped).
    pub fn speed_up(&mut self) {
        self.nudge_speed(0.5);
    }

    /// Lower the speed by half a year per second (clamped).
    pub fn speed_down(&mut self) {
        self.nudge_speed(-0.5);
    }

    fn nudge_speed(&mut self, delta: f64) {
        let applied = self.timeline.set_speed_clamped(self.timeline.speed() + delta);
        self.status = format!("Speed: {applied}x");
        self.subscribers.emit(&ChangeEvent::SpeedChanged(applied));
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a change callback.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Import a dataset file, replacing the active series on success.
    ///
    /// On failure the active dataset is left untouched and the error is
    /// surfaced through the status line.
    pub fn import_file(&mut self, path: &Path) {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "file".to_string());

        let result = ImportFormat::from_path(path).and_then(|format| {
            let raw = std::fs::read(path)
                .map_err(|err| ChronoscopeError::file_open(path.to_path_buf(), err))?;
            import(&raw, format)
        });

        match result {
            Ok(series) => {
                let count = series.len();
                self.provider.replace(series);
                self.status = format!("Imported {count} records from {file_name}");
                self.error_message = None;
                self.subscribers.emit(&ChangeEvent::DatasetChanged);
                tracing::info!(records = count, file = %file_name, "Dataset imported");
            }
            Err(err) => {
                self.error_message = Some(format!("Error importing {file_name}: {err}"));
                self.status = "Import failed".to_string();
                tracing::error!("Error importing {}: {}", file_name, err);
            }
        }
    }

    /// Restore the originally generated dataset.
    pub fn reset_data(&mut self) {
        self.provider.reset();
        self.status = if self.provider.is_loading() {
            "Loading historical dataset...".to_string()
        } else {
            "Restored default dataset".to_string()
        };
        self.error_message = None;
        self.subscribers.emit(&ChangeEvent::DatasetChanged);
    }

    /// Copy the displayed record to the clipboard.
    pub fn copy_current_record(&mut self) {
        match self.current_record() {
            Some(record) => {
                let year = record.year;
                match util::copy_record_info(record) {
                    Ok(()) => self.status = format!("Copied {year}!"),
                    Err(e) => self.status = format!("Copy failed: {e}"),
                }
            }
            None => self.status = format!("No data for {}", self.current_year()),
        }
    }

    /// Copy the active series to the clipboard as CSV.
    pub fn copy_series(&mut self) {
        match self.provider.active() {
            Some(series) => match util::copy_series_csv(series) {
                Ok(()) => self.status = "Series copied!".to_string(),
                Err(e) => self.status = format!("Copy failed: {e}"),
            },
            None => self.status = "No dataset loaded".to_string(),
        }
    }

    /// Cycle to the next theme.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Open the file browser to pick a dataset file.
    pub fn open_file_browser(&mut self) {
        self.file_browser.load_directory();
        self.file_browser_mode = true;
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
    }

    /// Close the file browser without importing.
    pub fn close_file_browser(&mut self) {
        self.file_browser_mode = false;
        self.status = "Import cancelled".to_string();
    }

    /// Import the selected file, or descend into the selected directory.
    pub fn browser_select(&mut self) {
        if let Some(path) = self.file_browser.select_current() {
            self.file_browser_mode = false;
            self.import_file(&path);

            if self.error_message.is_some() {
                self.file_browser_mode = true;
                self.status = "Import failed (Esc to cancel, or pick another file)".to_string();
            }
        }
    }

    /// Navigate to parent directory in file browser.
    pub fn browser_parent(&mut self) {
        self.file_browser.go_to_parent();
        self.status = format!("Browsing: {}", self.file_browser.current_dir.display());
    }

    /// Move cursor up in file browser.
    pub fn browser_up(&mut self) {
        self.file_browser.cursor_up();
    }

    /// Move cursor down in file browser.
    pub fn browser_down(&mut self) {
        self.file_browser.cursor_down();
    }

    /// Toggle show hidden files.
    pub fn toggle_hidden(&mut self) {
        self.file_browser.toggle_hidden();
        self.status = format!(
            "Show hidden: {}",
            if self.file_browser.show_hidden {
                "ON"
            } else {
                "OFF"
            }
        );
    }
}
