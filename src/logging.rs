//! log4rs setup: a console appender at the requested level and a file
//! appender that always keeps debug records.

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    append::file::FileAppender,
    config::{Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use std::fs;
use std::path::{Path, PathBuf};

const FILE_PATTERN: &str = "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}";

/// Dependencies that log every connection at debug level.
const NOISY_TARGETS: &[&str] = &[
    "hyper",
    "hyper_util",
    "h2",
    "rustls",
    "reqwest",
    "html5ever",
    "selectors",
];

/// Where the log file is written.
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("article2post.log")
}

/// Builds the logging configuration without installing it.
pub fn logging_config(verbose: bool, log_file: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let console_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Some(parent) = log_file.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose { FILE_PATTERN } else { "{m}{n}" };

    let stdout_appender = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FILE_PATTERN)))
        .build(log_file)?;

    let mut builder = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(console_level)))
                .build("stdout", Box::new(stdout_appender)),
        )
        .appender(Appender::builder().build("file", Box::new(file_appender)));
    for target in NOISY_TARGETS {
        builder = builder.logger(Logger::builder().build(*target, LevelFilter::Info));
    }

    let config = builder.build(
        Root::builder()
            .appender("stdout")
            .appender("file")
            .build(LevelFilter::Debug),
    )?;
    Ok(config)
}

/// Sets up logging configuration.
pub fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_file = log_file_path();
    log4rs::init_config(logging_config(verbose, &log_file)?)?;
    log::debug!("Logging initialized. Log file: {}", log_file.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;
    use log4rs::filter::Response;

    fn console_accepts(config: &Config, level: Level) -> bool {
        let record = log::Record::builder().level(level).target("article2post").build();
        let console = config
            .appenders()
            .iter()
            .find(|appender| appender.name() == "stdout")
            .expect("console appender");
        console
            .filters()
            .iter()
            .all(|filter| filter.filter(&record) != Response::Reject)
    }

    fn file_filters(config: &Config) -> usize {
        config
            .appenders()
            .iter()
            .find(|appender| appender.name() == "file")
            .map(|appender| appender.filters().len())
            .expect("file appender")
    }

    #[test]
    fn debug_reaches_the_file_without_verbose() {
        let dir = tempfile::tempdir().unwrap();
        let config = logging_config(false, &dir.path().join("run.log")).unwrap();

        assert_eq!(config.root().level(), LevelFilter::Debug);
        assert_eq!(file_filters(&config), 0);
        assert!(!console_accepts(&config, Level::Debug));
        assert!(console_accepts(&config, Level::Info));
    }

    #[test]
    fn verbose_lets_debug_through_to_the_console() {
        let dir = tempfile::tempdir().unwrap();
        let config = logging_config(true, &dir.path().join("run.log")).unwrap();

        assert!(console_accepts(&config, Level::Debug));
    }

    #[test]
    fn http_stack_is_capped_at_info() {
        let dir = tempfile::tempdir().unwrap();
        let config = logging_config(false, &dir.path().join("run.log")).unwrap();

        let hyper = config
            .loggers()
            .iter()
            .find(|logger| logger.name() == "hyper")
            .expect("hyper logger");
        assert_eq!(hyper.level(), LevelFilter::Info);
    }
}
