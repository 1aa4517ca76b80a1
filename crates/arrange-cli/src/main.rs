//! Arrange CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, info, log};

use arrange_cli::{Args, error_adapter::to_reportable};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Arrange");
    debug!(args:?; "Parsed arguments");

    if let Err(err) = arrange_cli::run(&args) {
        let report = to_reportable(&err);
        let reporter = miette::GraphicalReportHandler::new();
        let mut writer = String::new();
        reporter
            .render_report(&mut writer, &report)
            .expect("Writing to String buffer is infallible");

        // Selection problems are warnings, everything else is an error
        log!(report.log_level(), "{writer}");
        process::exit(1);
    }

    info!("Completed successfully");
}
