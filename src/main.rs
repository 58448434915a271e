use anyhow::Context;
use beatmatch_encoder::{Config, Pipeline};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "beatmatch-encoder",
    version,
    about = "Add pitch adjustment percentages to music filenames",
    long_about = "Add pitch adjustment percentages to music filenames.\n\n\
    Scans a directory for tracks whose name ends in their BPM (e.g. 'Artist - Title - 128.mp3') \
    and renames them to show the pitch change needed to match the base BPM of a DJ set.\n\n\
    USAGE EXAMPLES:\n  \
      # Preview the renames for a 128 BPM set\n  \
      beatmatch-encoder -d ~/Music/DJSet -b 128 --dry-run\n\n  \
      # Rename the files\n  \
      beatmatch-encoder -d ~/Music/DJSet -b 128"
)]
struct Cli {
    /// Directory containing music files to process
    #[arg(short, long, value_name = "PATH")]
    directory: PathBuf,

    /// Base BPM of the DJ set to match against
    #[arg(short, long, value_name = "BPM", allow_negative_numbers = true)]
    bpm: f64,

    /// Preview changes without renaming files
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Verbose output (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Leave files that already carry an adjustment untouched
    #[arg(long)]
    skip_encoded: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose, cli.quiet)?;

    let config = Config::builder()
        .directory(cli.directory)
        .base_bpm(cli.bpm)
        .dry_run(cli.dry_run)
        .skip_encoded(cli.skip_encoded)
        .build()
        .context("Failed to build configuration")?;

    let pipeline = Pipeline::new(config).context("Failed to create pipeline")?;

    if cli.json {
        let report = pipeline
            .run_with(&mut std::io::sink())
            .context("Run failed")?;
        println!("{}", report.to_json()?);
    } else {
        let report = pipeline.run().context("Run failed")?;
        if !cli.quiet && !report.records.is_empty() {
            report.stats.print_summary();
        }
    }

    Ok(())
}

fn setup_tracing(verbosity: u8, quiet: bool) -> anyhow::Result<()> {
    let filter = if quiet {
        EnvFilter::new("beatmatch_encoder=error")
    } else {
        match verbosity {
            0 => EnvFilter::new("beatmatch_encoder=info"),
            1 => EnvFilter::new("beatmatch_encoder=debug"),
            _ => EnvFilter::new("beatmatch_encoder=trace"),
        }
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_writer(std::io::stderr),
        )
        .try_init()
        .context("Failed to initialise logging")?;

    Ok(())
}
