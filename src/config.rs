use crate::error::{Error, Result};
use std::path::PathBuf;

/// Lower bound of the tempo range most DJ sets are played in.
pub const MIN_TYPICAL_BPM: f64 = 60.0;

/// Upper bound of the tempo range most DJ sets are played in.
pub const MAX_TYPICAL_BPM: f64 = 200.0;

/// Configuration for one encoding run.
///
/// Use [`Config::builder()`] to construct a new configuration.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Config {
    /// Directory holding the tracks (not searched recursively)
    pub directory: PathBuf,

    /// Target tempo of the set
    pub base_bpm: f64,

    /// Preview renames without touching the filesystem
    pub dry_run: bool,

    /// Skip files that already carry an adjustment instead of re-wrapping them
    pub skip_encoded: bool,
}

impl Config {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use beatmatch_encoder::Config;
    ///
    /// let config = Config::builder()
    ///     .directory("./set")
    ///     .base_bpm(128.0)
    ///     .build()
    ///     .expect("valid configuration");
    /// ```
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The directory doesn't exist or is not a directory
    /// - The base BPM is not a positive number
    pub fn validate(&self) -> Result<()> {
        if !self.directory.exists() {
            return Err(Error::config(format!(
                "Directory does not exist: {}",
                self.directory.display()
            )));
        }

        if !self.directory.is_dir() {
            return Err(Error::config(format!(
                "Path is not a directory: {}",
                self.directory.display()
            )));
        }

        if !self.base_bpm.is_finite() || self.base_bpm <= 0.0 {
            return Err(Error::config("BPM must be a positive number"));
        }

        Ok(())
    }

    /// Returns true if the base BPM lies within the typical DJ range.
    ///
    /// Values outside it are accepted; the pipeline only warns about them.
    #[must_use]
    pub fn is_typical_bpm(&self) -> bool {
        (MIN_TYPICAL_BPM..=MAX_TYPICAL_BPM).contains(&self.base_bpm)
    }
}

/// Builder for creating a [`Config`].
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    directory: Option<PathBuf>,
    base_bpm: Option<f64>,
    dry_run: bool,
    skip_encoded: bool,
}

impl ConfigBuilder {
    /// Sets the directory to scan.
    #[must_use]
    pub fn directory(mut self, path: impl Into<PathBuf>) -> Self {
        self.directory = Some(path.into());
        self
    }

    /// Sets the target tempo of the set.
    #[must_use]
    pub fn base_bpm(mut self, bpm: f64) -> Self {
        self.base_bpm = Some(bpm);
        self
    }

    /// Enables dry run mode (no renames).
    #[must_use]
    pub fn dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    /// Skips files whose name already contains an adjustment.
    #[must_use]
    pub fn skip_encoded(mut self, enabled: bool) -> Self {
        self.skip_encoded = enabled;
        self
    }

    /// Builds the configuration.
    ///
    /// The directory is resolved to an absolute path once validated.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing or validation fails.
    pub fn build(self) -> Result<Config> {
        let directory = self
            .directory
            .ok_or_else(|| Error::config("directory is required"))?;
        let base_bpm = self
            .base_bpm
            .ok_or_else(|| Error::config("base BPM is required"))?;

        let mut config = Config {
            directory,
            base_bpm,
            dry_run: self.dry_run,
            skip_encoded: self.skip_encoded,
        };

        config.validate()?;

        let resolved = config
            .directory
            .canonicalize()
            .map_err(|e| Error::io(&config.directory, e))?;
        config.directory = resolved;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn test_valid_config() {
        let temp = assert_fs::TempDir::new().unwrap();
        let config = Config::builder()
            .directory(temp.path())
            .base_bpm(128.0)
            .build()
            .unwrap();

        assert_eq!(config.base_bpm, 128.0);
        assert!(!config.dry_run);
        assert!(!config.skip_encoded);
        assert!(config.directory.is_absolute());
    }

    #[test]
    fn test_missing_directory() {
        let result = Config::builder()
            .directory("/nonexistent/path/that/should/not/exist")
            .base_bpm(128.0)
            .build();

        let err = result.unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn test_directory_is_a_file() {
        let temp = assert_fs::TempDir::new().unwrap();
        let file = temp.child("Song - 128.mp3");
        file.touch().unwrap();

        let err = Config::builder()
            .directory(file.path())
            .base_bpm(128.0)
            .build()
            .unwrap_err();

        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_non_positive_bpm() {
        let temp = assert_fs::TempDir::new().unwrap();

        for bpm in [0.0, -128.0, f64::NAN, f64::INFINITY] {
            let result = Config::builder()
                .directory(temp.path())
                .base_bpm(bpm)
                .build();
            assert!(result.is_err(), "bpm {bpm} should be rejected");
        }
    }

    #[test]
    fn test_missing_fields() {
        let temp = assert_fs::TempDir::new().unwrap();

        assert!(Config::builder().base_bpm(128.0).build().is_err());
        assert!(Config::builder().directory(temp.path()).build().is_err());
    }

    #[test]
    fn test_atypical_bpm_is_accepted() {
        let temp = assert_fs::TempDir::new().unwrap();
        let config = Config::builder()
            .directory(temp.path())
            .base_bpm(250.0)
            .build()
            .unwrap();

        assert!(!config.is_typical_bpm());
    }

    #[test]
    fn test_typical_bpm_range_is_inclusive() {
        let temp = assert_fs::TempDir::new().unwrap();
        for bpm in [60.0, 128.0, 200.0] {
            let config = Config::builder()
                .directory(temp.path())
                .base_bpm(bpm)
                .build()
                .unwrap();
            assert!(config.is_typical_bpm());
        }
    }
}
