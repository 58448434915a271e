use crate::filename::compose_filename;
use crate::pitch::pitch_adjustment;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A proposed rename for one track.
///
/// Records are created once per matched file during a scan and consumed by
/// the renamer. The new filename is always derived from the original name and
/// the adjustment, so none of the fields can drift apart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackRenameRecord {
    original_path: PathBuf,
    original_name: String,
    bpm: f64,
    pitch_adjustment: String,
    new_name: String,
}

impl TrackRenameRecord {
    /// Creates a record from an already computed adjustment.
    #[must_use]
    pub fn new(
        original_path: impl Into<PathBuf>,
        original_name: impl Into<String>,
        bpm: f64,
        pitch_adjustment: impl Into<String>,
    ) -> Self {
        let original_name = original_name.into();
        let pitch_adjustment = pitch_adjustment.into();
        let new_name = compose_filename(&original_name, &pitch_adjustment);

        Self {
            original_path: original_path.into(),
            original_name,
            bpm,
            pitch_adjustment,
            new_name,
        }
    }

    /// Creates a record for a track at `bpm` played in a set at `base_bpm`.
    #[must_use]
    pub fn for_base_bpm(
        original_path: impl Into<PathBuf>,
        original_name: impl Into<String>,
        bpm: f64,
        base_bpm: f64,
    ) -> Self {
        Self::new(
            original_path,
            original_name,
            bpm,
            pitch_adjustment(bpm, base_bpm),
        )
    }

    /// Path of the file as found during the scan.
    #[must_use]
    pub fn original_path(&self) -> &Path {
        &self.original_path
    }

    /// Filename as found during the scan.
    #[must_use]
    pub fn original_name(&self) -> &str {
        &self.original_name
    }

    /// Tempo parsed from the filename.
    #[must_use]
    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Formatted pitch adjustment, e.g. `"+1.56"` or `"0"`.
    #[must_use]
    pub fn pitch_adjustment(&self) -> &str {
        &self.pitch_adjustment
    }

    /// Filename after the adjustment was inserted.
    #[must_use]
    pub fn new_name(&self) -> &str {
        &self.new_name
    }

    /// Full path the file is renamed to, next to the original.
    #[must_use]
    pub fn target_path(&self) -> PathBuf {
        self.original_path
            .parent()
            .map_or_else(|| PathBuf::from(&self.new_name), |dir| dir.join(&self.new_name))
    }
}
