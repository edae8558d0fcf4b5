//! Ownership of the active dataset.
//!
//! Loading is cooperative: [`DatasetProvider::load`] registers a pending
//! request and [`DatasetProvider::poll`] drives the simulated delay from the
//! frame loop. A load in flight is shared by all callers (single-flight),
//! and a dataset switch issued while a load is outstanding wins over it:
//! every switch bumps a request sequence number and a completing load whose
//! number is stale is discarded.

use std::sync::Arc;

use crate::data::generator::SeriesGenerator;
use crate::data::record::{Series, YearRecord};
use crate::data::rng::SeededRng;

/// Simulated load delay for the default dataset, in milliseconds.
const LOAD_DELAY_MS: u64 = 800;

/// Which dataset is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveSource {
    /// The generated built-in series.
    Default,
    /// An imported series.
    Custom,
}

#[derive(Debug)]
struct PendingLoad {
    seq: u64,
    remaining_ms: u64,
}

/// Holds the active series and the original generated one.
#[derive(Debug)]
pub struct DatasetProvider {
    generator: SeriesGenerator,
    rng: SeededRng,
    default_series: Option<Arc<Series>>,
    active: Option<Arc<Series>>,
    source: ActiveSource,
    pending: Option<PendingLoad>,
    request_seq: u64,
    generation_runs: u64,
}

impl DatasetProvider {
    /// Create a provider around a generator and a random source.
    pub fn new(generator: SeriesGenerator, rng: SeededRng) -> Self {
        Self {
            generator,
            rng,
            default_series: None,
            active: None,
            source: ActiveSource::Default,
            pending: None,
            request_seq: 0,
            generation_runs: 0,
        }
    }

    /// Request the default dataset.
    ///
    /// If a load is already in flight this call attaches to it; the shared
    /// result arrives through [`poll`](Self::poll) either way.
    pub fn load(&mut self) {
        if self.pending.is_some() {
            return;
        }
        self.request_seq += 1;
        self.pending = Some(PendingLoad {
            seq: self.request_seq,
            remaining_ms: LOAD_DELAY_MS,
        });
    }

    /// Advance the simulated delay; returns the series when a load completes.
    ///
    /// A completing load whose request number was superseded by a later
    /// `replace` or `reset` is discarded without touching the active series.
    pub fn poll(&mut self, elapsed_ms: u64) -> Option<Arc<Series>> {
        let pending = self.pending.as_mut()?;
        pending.remaining_ms = pending.remaining_ms.saturating_sub(elapsed_ms);
        if pending.remaining_ms > 0 {
            return None;
        }
        let seq = pending.seq;
        self.pending = None;
        if seq != self.request_seq {
            tracing::debug!("Discarding superseded dataset load");
            return None;
        }

        let series = match &self.default_series {
            Some(series) => Arc::clone(series),
            None => {
                let generated = Arc::new(self.generator.generate(&mut self.rng));
                self.generation_runs += 1;
                self.default_series = Some(Arc::clone(&generated));
                generated
            }
        };
        self.active = Some(Arc::clone(&series));
        self.source = ActiveSource::Default;
        Some(series)
    }

    /// Look up the active record for a year. `None` means no data.
    pub fn lookup(&self, year: i32) -> Option<&YearRecord> {
        self.active.as_ref()?.get(year)
    }

    /// Substitute the active series atomically and switch to `Custom`.
    pub fn replace(&mut self, series: Series) {
        self.request_seq += 1;
        self.active = Some(Arc::new(series));
        self.source = ActiveSource::Custom;
    }

    /// Restore the originally generated series and clear any override.
    ///
    /// If the original series never finished generating, a fresh load is
    /// started instead.
    pub fn reset(&mut self) {
        self.request_seq += 1;
        match &self.default_series {
            Some(series) => {
                self.active = Some(Arc::clone(series));
                self.source = ActiveSource::Default;
            }
            None => {
                self.pending = Some(PendingLoad {
                    seq: self.request_seq,
                    remaining_ms: LOAD_DELAY_MS,
                });
            }
        }
    }

    /// The active series, if one is loaded.
    pub fn active(&self) -> Option<&Arc<Series>> {
        self.active.as_ref()
    }

    /// Which source the active series came from.
    pub fn source(&self) -> ActiveSource {
        self.source
    }

    /// Whether a load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|p| p.seq == self.request_seq)
    }

    /// How many times the generator has run.
    pub fn generation_runs(&self) -> u64 {
        self.generation_runs
    }
}
