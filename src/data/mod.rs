//! Dataset generation, ownership, and import.
//!
//! This module holds the engine side of the dashboard: the era-rule series
//! generator, the provider that owns the active series, and the importer
//! that validates user-supplied datasets.

mod generator;
mod importer;
mod provider;
mod record;
mod rng;

pub use generator::{EraRule, EraUpdates, SeriesGenerator, Spread};
pub use importer::{import, ImportFormat};
pub use provider::{ActiveSource, DatasetProvider};
pub use record::{Pair, Series, YearRecord, MAX_YEAR, MIN_YEAR};
pub use rng::SeededRng;
