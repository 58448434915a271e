use crate::{
    config::{Config, MAX_TYPICAL_BPM, MIN_TYPICAL_BPM},
    error::{Error, Result},
    renamer::Renamer,
    scanner::Scanner,
    track::TrackRenameRecord,
};
use serde::Serialize;
use std::{
    io::Write,
    time::{Duration, Instant},
};
use tracing::{info, instrument, warn};

/// Statistics collected during a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunStats {
    /// Files whose name carried a usable BPM
    pub matched: usize,

    /// Records previewed or renamed successfully
    pub processed: usize,

    /// Records whose rename failed
    pub failed: usize,

    /// Whether the run was a preview
    pub dry_run: bool,

    /// Total execution time
    pub duration: Duration,
}

impl RunStats {
    /// Creates statistics from the outcome of a run.
    #[must_use]
    pub const fn new(matched: usize, processed: usize, dry_run: bool, duration: Duration) -> Self {
        Self {
            matched,
            processed,
            failed: matched.saturating_sub(processed),
            dry_run,
            duration,
        }
    }

    /// Prints a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n╔═══════════════════════════════════════════════════════╗");
        if self.dry_run {
            println!("║                 Dry Run Summary                       ║");
        } else {
            println!("║                 Rename Summary                        ║");
        }
        println!("╠═══════════════════════════════════════════════════════╣");
        println!(
            "║ Tracks matched:       {:>8}                        ║",
            self.matched
        );
        if self.dry_run {
            println!(
                "║ Would be renamed:     {:>8}                        ║",
                self.processed
            );
        } else {
            println!(
                "║ Renamed:              {:>8}                        ║",
                self.processed
            );
            println!(
                "║ Failed:               {:>8}                        ║",
                self.failed
            );
        }
        println!(
            "║ Duration:             {:>8.2}s                       ║",
            self.duration.as_secs_f64()
        );
        println!("╚═══════════════════════════════════════════════════════╝\n");
    }
}

/// Statistics together with the planned renames.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Run statistics
    pub stats: RunStats,

    /// One entry per matched track
    pub records: Vec<TrackRenameRecord>,
}

impl RunReport {
    /// Renders the report as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

/// Scans a directory and applies the resulting renames.
pub struct Pipeline {
    config: Config,
    scanner: Scanner,
    renamer: Renamer,
}

impl Pipeline {
    /// Creates a new pipeline with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration validation fails.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;

        let scanner = Scanner::new(&config);
        let renamer = Renamer::new(config.dry_run);

        Ok(Self {
            config,
            scanner,
            renamer,
        })
    }

    /// Scans and renames, writing dry run output to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be read. Individual rename
    /// failures are logged and reflected in the statistics instead.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use beatmatch_encoder::{Config, Pipeline};
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let config = Config::builder()
    ///     .directory("./set")
    ///     .base_bpm(128.0)
    ///     .dry_run(true)
    ///     .build()?;
    ///
    /// let report = Pipeline::new(config)?.run()?;
    /// report.stats.print_summary();
    /// # Ok(())
    /// # }
    /// ```
    pub fn run(self) -> Result<RunReport> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Scans and renames, writing dry run output to `out`.
    ///
    /// # Errors
    ///
    /// See [`Pipeline::run`].
    #[instrument(skip(self, out), fields(directory = %self.config.directory.display()))]
    pub fn run_with(self, out: &mut impl Write) -> Result<RunReport> {
        let start_time = Instant::now();

        if !self.config.is_typical_bpm() {
            warn!(
                "BPM {} is outside typical range ({}-{})",
                self.config.base_bpm, MIN_TYPICAL_BPM, MAX_TYPICAL_BPM
            );
        }

        info!("Scanning directory: {}", self.config.directory.display());
        info!("Base BPM: {}", self.config.base_bpm);

        let records = self.scanner.scan()?;

        if records.is_empty() {
            warn!("No files found matching the BPM pattern (e.g. ' - 128.mp3')");
            return Ok(RunReport {
                stats: RunStats::new(0, 0, self.config.dry_run, start_time.elapsed()),
                records,
            });
        }

        info!("Found {} file(s) with BPM information", records.len());

        if self.config.dry_run {
            // Preview output is best effort.
            let _ = writeln!(out, "\n[DRY RUN] The following files would be renamed:\n");
        }

        let processed = self.renamer.apply_to(&records, out);

        if self.config.dry_run {
            let _ = writeln!(out, "\n[DRY RUN] {processed} file(s) would be renamed.");
        } else {
            info!("Successfully renamed {} file(s)", processed);
        }

        let stats = RunStats::new(
            records.len(),
            processed,
            self.config.dry_run,
            start_time.elapsed(),
        );

        if stats.failed > 0 {
            warn!("{} file(s) could not be renamed", stats.failed);
        }

        Ok(RunReport { stats, records })
    }
}
