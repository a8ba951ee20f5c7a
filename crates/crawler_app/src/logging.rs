//! Logger initialization for crawler_app.
//!
//! Logs go to `./crawler.log` so the terminal stays free for the UI; setting
//! `JOBCRAWLER_LOG_STDERR` mirrors them to the terminal as well.

use std::fs::File;
use std::path::Path;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./crawler.log";

pub fn initialize() {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    match File::create(Path::new(LOG_PATH)) {
        Ok(file) => loggers.push(WriteLogger::new(level, config.clone(), file)),
        Err(err) => eprintln!("Warning: could not create {LOG_PATH}: {err}"),
    }
    if std::env::var_os("JOBCRAWLER_LOG_STDERR").is_some() {
        loggers.push(TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    if !loggers.is_empty() {
        let _ = CombinedLogger::init(loggers);
    }
}
