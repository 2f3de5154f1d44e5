use anyhow::Context;
use clap::Parser;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use takeout_flattener::{
    run, validate_arguments, FlattenConfig, LogLevel, ProgressReporter, DEFAULT_ARCHIVE_PATTERN,
    DEFAULT_LOG_FILE,
};
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "takeout-flattener")]
#[command(about = "Merge Google Takeout ZIP archives into a single directory", long_about = None)]
#[command(version)]
struct Args {
    /// Directory containing all Google Takeout files to flatten
    input_directory: PathBuf,

    /// Directory to have the flattened input files output to
    output_directory: PathBuf,

    /// Log level
    #[arg(
        long = "log-level",
        alias = "log_level",
        value_enum,
        ignore_case = true,
        default_value = "INFO"
    )]
    log_level: LogLevel,

    /// Log file, truncated on every run
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,

    /// Archive file name pattern inside the input directory
    #[arg(long, default_value = DEFAULT_ARCHIVE_PATTERN)]
    pattern: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let log_file = File::create(&args.log_file)
        .with_context(|| format!("cannot create log file {}", args.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "takeout_flattener={}",
            LevelFilter::from(args.log_level)
        ))
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        .init();

    if let Err(e) = validate_arguments(&args.input_directory, &args.output_directory) {
        error!("{}", e);
        eprintln!("❌ Error: {}", e);
        std::process::exit(e.exit_code());
    }

    info!("Input directory: {:?}", args.input_directory);
    info!("Output directory: {:?}", args.output_directory);

    let config = FlattenConfig {
        input_dir: args.input_directory,
        output_dir: args.output_directory,
        pattern: args.pattern,
    };

    let mut reporter = ProgressReporter::new();
    if let Err(e) = run(&config, &mut reporter) {
        error!("Flatten failed: {}", e);
        return Err(e).context("flatten failed");
    }

    let skipped = reporter.total_skipped();
    if skipped > 0 {
        eprintln!(
            "⚠️  {} entries skipped, see {} for details",
            skipped,
            args.log_file.display()
        );
    }

    Ok(())
}
