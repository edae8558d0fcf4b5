//! Chronoscope - a terminal-based historical statistics dashboard.
//!
//! Chronoscope renders synthetic historical statistics (population,
//! casualties, territory, prisoners) for two parties over a fixed year
//! range, driven by a scrubbable, animated timeline control.
//!
//! # Features
//!
//! - Deterministic era-rule data generator with seedable jitter
//! - Playback state machine with looping timeline animation
//! - CSV and JSON dataset import with all-or-nothing validation
//! - Vim-style keyboard shortcuts
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use chronoscope::data::{SeededRng, SeriesGenerator};
//!
//! // Generate the built-in dataset
//! let generator = SeriesGenerator::historical();
//! let series = generator.generate(&mut SeededRng::from_entropy());
//! println!("Generated {} yearly records", series.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod data;
pub mod error;
pub mod events;
pub mod file_browser;
pub mod timeline;
pub mod ui;
pub mod util;

pub use error::{ChronoscopeError, Result};
