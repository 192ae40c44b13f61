//! Subtrans - subtitle caption translation
//!
//! Entry point: argument handling, logging setup and exit codes. Every
//! failure exits with status 1.

use anyhow::{Result, anyhow};
use clap::Parser;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use subtrans::cli::Args;
use subtrans::config::{Config, LoggingConfig};
use subtrans::error::SubtransError;
use subtrans::language::LanguagePair;
use subtrans::pipeline::Pipeline;
use subtrans::status::{self, StatusReporter};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            status::print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    // Keep the file writer alive until exit
    let _guard = match setup_logging(args.verbose, &config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            status::print_error(&e);
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            status::print_error(&e);
            if matches!(
                e.downcast_ref::<SubtransError>(),
                Some(SubtransError::InvalidLanguagePair(_))
            ) {
                status::print_usage_hint();
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args, mut config: Config) -> Result<()> {
    let pair = match args.direction.as_deref() {
        Some(direction) => direction.parse::<LanguagePair>()?,
        None => config.default_language_pair()?,
    };

    if let Some(jobs) = args.jobs {
        config.translator.max_concurrent = jobs.get();
    }
    if let Some(translator) = args.translator {
        config.translator.binary_path = translator;
    }

    if !args.file.exists() {
        return Err(SubtransError::FileNotFound(args.file.display().to_string()).into());
    }

    info!(
        "Translating {} with {} ({})",
        args.file.display(),
        config.translator.binary_path,
        pair
    );

    let reporter = StatusReporter::new();
    reporter.announce(&args.file, &pair);

    let pipeline = Pipeline::new(config.translator);
    match pipeline
        .run(&args.file, &pair, |done, total| reporter.progress(done, total))
        .await
    {
        Ok(report) => {
            reporter.success(&report);
            Ok(())
        }
        Err(e) => {
            reporter.failure();
            Err(e.into())
        }
    }
}

/// Console logging on stderr, plus a daily-rotated log file when enabled
fn setup_logging(verbose: bool, logging: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(
            EnvFilter::builder()
                .with_default_directive(console_level.into())
                .from_env_lossy(),
        );

    let (file_layer, guard) = if logging.file {
        std::fs::create_dir_all(&logging.directory)?;
        let file_appender = rolling::daily(&logging.directory, "subtrans.log");
        let (non_blocking_file, guard) = non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(non_blocking_file)
            .with_target(false)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_filter(LevelFilter::INFO);

        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))?;

    Ok(guard)
}
