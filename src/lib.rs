//! # beatmatch-encoder
//!
//! Renames DJ tracks so their filenames show the pitch adjustment needed to
//! play them at the tempo of a set.
//!
//! A track named `"01. Artist - Title - 125.mp3"` played in a 130 BPM set
//! becomes `"01. (+4.0) Artist - Title - 125.mp3"`.
//!
//! ## Quick Start
//!
//! ```no_run
//! use beatmatch_encoder::{Config, Pipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = Config::builder()
//!     .directory("./set")
//!     .base_bpm(130.0)
//!     .build()?;
//!
//! Pipeline::new(config)?.run()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! 1. **Pitch**: computes the adjustment string for a track/base tempo pair
//! 2. **Filename**: finds the BPM in a name and splices the adjustment in
//! 3. **Scanner**: lists a directory and plans one rename per matching track
//! 4. **Renamer**: applies or previews the planned renames

#![warn(
    missing_docs,
    rust_2018_idioms,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(clippy::module_name_repetitions)]

mod config;
mod error;
mod filename;
mod pipeline;
mod pitch;
mod renamer;
mod scanner;
mod track;

pub use config::{Config, ConfigBuilder, MAX_TYPICAL_BPM, MIN_TYPICAL_BPM};
pub use error::{Error, Result};
pub use filename::{compose_filename, extract_bpm, is_encoded, split_track_number};
pub use pipeline::{Pipeline, RunReport, RunStats};
pub use pitch::{NO_ADJUSTMENT, pitch_adjustment};
pub use renamer::{Renamer, rename_tracks};
pub use scanner::scan_directory;
pub use track::TrackRenameRecord;

/// Runs a complete scan-and-rename pass with the given configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the directory cannot
/// be read.
pub fn run(config: Config) -> Result<RunReport> {
    Pipeline::new(config)?.run()
}
