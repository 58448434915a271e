use crate::{
    config::Config,
    error::{Error, Result},
    filename::{extract_bpm, is_encoded},
    track::TrackRenameRecord,
};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};
use walkdir::{DirEntry, WalkDir};

/// Statistics collected during scanning.
#[derive(Debug, Default, Clone)]
pub(crate) struct ScanStats {
    /// Regular files looked at
    pub total_files: usize,

    /// Files that produced a record
    pub matched: usize,

    /// Files without a BPM in their name
    pub unmatched: usize,

    /// Files whose BPM capture could not be used
    pub invalid: usize,

    /// Files skipped because they were already encoded
    pub encoded: usize,
}

/// Finds tracks with a BPM in their filename and plans their renames.
pub(crate) struct Scanner {
    directory: PathBuf,
    base_bpm: f64,
    skip_encoded: bool,
}

impl Scanner {
    /// Creates a new scanner from configuration.
    pub(crate) fn new(config: &Config) -> Self {
        Self {
            directory: config.directory.clone(),
            base_bpm: config.base_bpm,
            skip_encoded: config.skip_encoded,
        }
    }

    /// Lists the directory (non-recursively) and returns one record per match.
    ///
    /// Entries are visited in filename order. Per-file problems are logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory itself cannot be read.
    pub(crate) fn scan(&self) -> Result<Vec<TrackRenameRecord>> {
        let mut records = Vec::new();
        let mut stats = ScanStats::default();

        debug!("Scanning {}", self.directory.display());

        let walker = WalkDir::new(&self.directory)
            .min_depth(1)
            .max_depth(1)
            .follow_links(false)
            .sort_by_file_name();

        for result in walker {
            let entry = match result {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let path = e.path().map_or_else(|| self.directory.clone(), Path::to_path_buf);
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| std::io::Error::other("directory walk failed"));
                    return Err(Error::io(path, source));
                }
                Err(e) => {
                    warn!("Walk error: {}", e);
                    continue;
                }
            };

            // Symlinks count when they point at a regular file.
            if !entry.path().is_file() {
                trace!("Skipping (not a file): {}", entry.path().display());
                continue;
            }
            stats.total_files += 1;

            match self.process_entry(&entry, &mut stats) {
                Ok(Some(record)) => {
                    stats.matched += 1;
                    records.push(record);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("{}", e);
                    stats.invalid += 1;
                }
            }
        }

        debug!(
            "Scan complete: {} files, {} matched, {} without BPM, {} invalid, {} already encoded",
            stats.total_files, stats.matched, stats.unmatched, stats.invalid, stats.encoded
        );

        Ok(records)
    }

    /// Turns one file entry into a record, or `None` if it should be skipped.
    fn process_entry(
        &self,
        entry: &DirEntry,
        stats: &mut ScanStats,
    ) -> Result<Option<TrackRenameRecord>> {
        let Some(file_name) = entry.file_name().to_str() else {
            debug!("Skipping (name is not valid UTF-8): {}", entry.path().display());
            stats.unmatched += 1;
            return Ok(None);
        };

        let Some(bpm_text) = extract_bpm(file_name) else {
            debug!("Skipping (no BPM pattern): {}", file_name);
            stats.unmatched += 1;
            return Ok(None);
        };

        let bpm = parse_bpm(file_name, bpm_text)?;

        if self.skip_encoded && is_encoded(file_name) {
            debug!("Skipping (already encoded): {}", file_name);
            stats.encoded += 1;
            return Ok(None);
        }

        let record =
            TrackRenameRecord::for_base_bpm(entry.path(), file_name, bpm, self.base_bpm);
        trace!(
            "Planned: {} -> {} (BPM: {}, Adjustment: {})",
            record.original_name(),
            record.new_name(),
            record.bpm(),
            record.pitch_adjustment()
        );

        Ok(Some(record))
    }
}

/// Parses a captured BPM, rejecting values the pitch calculation can't use.
fn parse_bpm(file_name: &str, bpm_text: &str) -> Result<f64> {
    match bpm_text.parse::<f64>() {
        Ok(bpm) if bpm.is_finite() && bpm > 0.0 => Ok(bpm),
        _ => Err(Error::invalid_bpm(file_name, bpm_text)),
    }
}

/// Scans `directory` for tracks and plans their renames against `base_bpm`.
///
/// # Errors
///
/// Returns an error if the directory cannot be read.
pub fn scan_directory(directory: impl AsRef<Path>, base_bpm: f64) -> Result<Vec<TrackRenameRecord>> {
    let scanner = Scanner {
        directory: directory.as_ref().to_path_buf(),
        base_bpm,
        skip_encoded: false,
    };
    scanner.scan()
}
