use crate::{
    error::{Error, Result},
    track::TrackRenameRecord,
};
use std::{fs, io::Write};
use tracing::{debug, error, info};

/// Applies planned renames, or previews them in dry run mode.
///
/// Every record is handled on its own: a failed rename is logged and left out
/// of the count, and the remaining records are still processed.
#[derive(Debug, Clone, Copy)]
pub struct Renamer {
    dry_run: bool,
}

impl Renamer {
    /// Creates a renamer.
    #[must_use]
    pub const fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Returns true if this renamer only previews.
    #[must_use]
    pub const fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Processes `records`, writing dry run previews to stdout.
    ///
    /// Returns the number of records previewed or renamed successfully.
    pub fn apply(&self, records: &[TrackRenameRecord]) -> usize {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.apply_to(records, &mut out)
    }

    /// Processes `records`, writing dry run previews to `out`.
    ///
    /// Returns the number of records previewed or renamed successfully.
    pub fn apply_to(&self, records: &[TrackRenameRecord], out: &mut impl Write) -> usize {
        let mut processed = 0;

        for record in records {
            let result = if self.dry_run {
                preview(record, out)
            } else {
                rename(record)
            };

            match result {
                Ok(()) => processed += 1,
                Err(e) => error!("Failed to rename {}: {}", record.original_name(), e),
            }
        }

        debug!("Processed {} of {} record(s)", processed, records.len());
        processed
    }
}

/// Writes the human-readable preview of one rename.
fn preview(record: &TrackRenameRecord, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "  {}\n    -> {}\n    (BPM: {}, Adjustment: {})",
        record.original_name(),
        record.new_name(),
        record.bpm(),
        record.pitch_adjustment()
    )
    .map_err(|e| Error::io(record.original_path(), e))
}

/// Renames one file next to itself, refusing to replace an existing file.
fn rename(record: &TrackRenameRecord) -> Result<()> {
    let target = record.target_path();

    if target.exists() {
        return Err(Error::target_exists(target));
    }

    fs::rename(record.original_path(), &target)
        .map_err(|e| Error::io(record.original_path(), e))?;

    info!("Renamed: {} -> {}", record.original_name(), record.new_name());
    Ok(())
}

/// Renames (or previews, when `dry_run` is set) every record.
///
/// Returns the number of records processed successfully.
pub fn rename_tracks(records: &[TrackRenameRecord], dry_run: bool) -> usize {
    Renamer::new(dry_run).apply(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn record_in(temp: &assert_fs::TempDir, name: &str, adjustment: &str) -> TrackRenameRecord {
        TrackRenameRecord::new(temp.child(name).path(), name, 128.0, adjustment)
    }

    #[test]
    fn test_dry_run_does_not_rename() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("01. Track - 128.mp3").touch().unwrap();
        let record = record_in(&temp, "01. Track - 128.mp3", "+1.56");

        let mut out = Vec::new();
        let count = Renamer::new(true).apply_to(&[record], &mut out);

        assert_eq!(count, 1);
        assert!(temp.child("01. Track - 128.mp3").path().exists());
        assert!(!temp.child("01. (+1.56) Track - 128.mp3").path().exists());

        let preview = String::from_utf8(out).unwrap();
        assert!(preview.contains("  01. Track - 128.mp3\n"));
        assert!(preview.contains("    -> 01. (+1.56) Track - 128.mp3\n"));
        assert!(preview.contains("(BPM: 128, Adjustment: +1.56)"));
    }

    #[test]
    fn test_dry_run_counts_missing_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let record = record_in(&temp, "Ghost - 128.mp3", "+1.56");

        let mut out = Vec::new();
        assert_eq!(Renamer::new(true).apply_to(&[record], &mut out), 1);
    }

    #[test]
    fn test_renames_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("01. Track - 128.mp3").touch().unwrap();
        let record = record_in(&temp, "01. Track - 128.mp3", "+1.56");

        let count = rename_tracks(&[record], false);

        assert_eq!(count, 1);
        assert!(!temp.child("01. Track - 128.mp3").path().exists());
        assert!(temp.child("01. (+1.56) Track - 128.mp3").path().exists());
    }

    #[test]
    fn test_handles_multiple_files() {
        let temp = assert_fs::TempDir::new().unwrap();
        let files = [
            ("01. Track A - 128.mp3", "+1.56", "01. (+1.56) Track A - 128.mp3"),
            ("02. Track B - 140.wav", "-7.14", "02. (-7.14) Track B - 140.wav"),
        ];

        let records: Vec<_> = files
            .iter()
            .map(|(original, adjustment, _)| {
                temp.child(*original).touch().unwrap();
                record_in(&temp, original, adjustment)
            })
            .collect();

        let count = rename_tracks(&records, false);

        assert_eq!(count, 2);
        for (original, _, new) in files {
            assert!(!temp.child(original).path().exists());
            assert!(temp.child(new).path().exists());
        }
    }

    #[test]
    fn test_failure_is_isolated() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("02. Present - 140.mp3").touch().unwrap();
        let records = [
            record_in(&temp, "01. Missing - 128.mp3", "+1.56"),
            record_in(&temp, "02. Present - 140.mp3", "-7.14"),
        ];

        let count = rename_tracks(&records, false);

        assert_eq!(count, 1);
        assert!(temp.child("02. (-7.14) Present - 140.mp3").path().exists());
    }

    #[test]
    fn test_existing_target_is_not_overwritten() {
        let temp = assert_fs::TempDir::new().unwrap();
        temp.child("Song - 128.mp3").write_str("original").unwrap();
        temp.child("(+1.56) Song - 128.mp3").write_str("keep me").unwrap();
        let record = record_in(&temp, "Song - 128.mp3", "+1.56");

        let err = rename(&record).unwrap_err();
        assert!(err.is_target_exists());
        assert_eq!(rename_tracks(&[record], false), 0);

        assert!(temp.child("Song - 128.mp3").path().exists());
        let kept = std::fs::read_to_string(temp.child("(+1.56) Song - 128.mp3").path()).unwrap();
        assert_eq!(kept, "keep me");
    }
}
