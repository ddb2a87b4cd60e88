use crate::error::{Result as ServerErrorResult, ServerError};

use std::fmt::Arguments;
use std::path::PathBuf;
use std::time::SystemTime;

use fern::colors::{Color, ColoredLevelConfig};
use fern::{Dispatch, FormatCallback};
use log::{Record, info};

/// Where log lines go
enum Sink {
    File(std::fs::File),
    Stdout { colors: Option<ColoredLevelConfig> },
}

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stdout, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
pub fn initialize(
    log_level: tracker_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;

    let sink = match log_file {
        Some(ref log_path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_path)
                .map_err(|e| ServerError::Logger {
                    message: format!("Failed to open log file {}: {}", log_path.display(), e),
                })?;
            Sink::File(file)
        }
        None => Sink::Stdout {
            colors: colored.then(level_colors),
        },
    };

    let dispatch = match sink {
        Sink::File(file) => Dispatch::new()
            .format(|out, message, record| write_line(out, message, record, None))
            .chain(file),
        Sink::Stdout { colors } => Dispatch::new()
            .format(move |out, message, record| write_line(out, message, record, colors))
            .chain(std::io::stdout()),
    };

    Dispatch::new()
        .level(level_filter)
        .chain(dispatch)
        .apply()
        .map_err(|e| ServerError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    match log_file {
        Some(ref path) => info!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => info!("Logger initialized: level={:?}, stdout", level_filter),
    }

    Ok(())
}

fn level_colors() -> ColoredLevelConfig {
    ColoredLevelConfig::new()
        .trace(Color::Magenta)
        .debug(Color::Blue)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red)
}

/// `[{date} - {level}] {message} [{file}:{line}]`
fn write_line(
    out: FormatCallback,
    message: &Arguments,
    record: &Record,
    colors: Option<ColoredLevelConfig>,
) {
    let date = humantime::format_rfc3339(SystemTime::now());
    let file = record.file().unwrap_or("unknown");
    let line = record.line().unwrap_or(0);

    match colors {
        Some(colors) => out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            level = colors.color(record.level()),
        )),
        None => out.finish(format_args!(
            "[{date} - {level}] {message} [{file}:{line}]",
            level = record.level(),
        )),
    }
}
