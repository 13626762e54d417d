use std::fs::OpenOptions;

use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use crate::config::LoggingConfig;

/// Log file used when the config names none.
const DEFAULT_LOG_FILE: &str = "unibook.log";

/// Configures the global logger from the logging section of the config.
///
/// Output always goes to a file: either the configured one or
/// [`DEFAULT_LOG_FILE`], because stdout belongs to the TUI once the
/// alternate screen is entered. If neither file can be opened the logger is
/// still installed so later `log::` calls stay cheap no-ops.
pub fn setup(config: &LoggingConfig) -> Result<(), log::SetLoggerError> {
    let log_level = match config.level().to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info, // Default to Info for any other value
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::BrightBlack)
        .debug(Color::BrightBlue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    let base_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                colors.color(record.level()),
                record.target(),
                message
            ))
        })
        .level(log_level);

    let file_path = config.file().unwrap_or(DEFAULT_LOG_FILE);
    match OpenOptions::new().create(true).append(true).open(file_path) {
        Ok(file) => {
            base_config.chain(file).apply()?;
            // Shown before the TUI takes over the terminal.
            println!("Logging to file: {file_path}");
        }
        Err(e) => {
            eprintln!("Warning: Failed to open log file '{file_path}': {e}");
            eprintln!("Continuing without file logging.");
            base_config.apply()?;
        }
    }

    log::info!("Logger initialized with level: {}", config.level());
    Ok(())
}
