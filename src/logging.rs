//! Process-wide logging bootstrap.
//!
//! Logs go to stderr, or to a size-rotated file set when a directory is
//! given. Initialization happens at most once per process.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;

const LOG_FILE_BASENAME: &str = "dashboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Starts the logger. Later calls are no-ops and return `Ok(())`.
pub fn init_logging(level: &str, log_dir: Option<&str>) -> Result<(), String> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    LOGGER.get_or_try_init(|| -> Result<LoggerHandle, String> {
        let logger = Logger::try_with_str(level)
            .map_err(|err| format!("invalid log level `{level}`: {err}"))?;
        let logger = match log_dir {
            Some(dir) => {
                std::fs::create_dir_all(dir)
                    .map_err(|err| format!("failed to create log directory `{dir}`: {err}"))?;
                logger
                    .log_to_file(FileSpec::default().directory(dir).basename(LOG_FILE_BASENAME))
                    .rotate(
                        Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                        Naming::Numbers,
                        Cleanup::KeepLogFiles(MAX_LOG_FILES),
                    )
                    .write_mode(WriteMode::BufferAndFlush)
                    .append()
                    .format_for_files(flexi_logger::detailed_format)
            }
            None => logger.format_for_stderr(flexi_logger::default_format),
        };
        logger
            .start()
            .map_err(|err| format!("failed to start logger: {err}"))
    })?;

    info!(
        "event=app_start status=ok level={} log_dir={} version={}",
        level,
        log_dir.unwrap_or("stderr"),
        env!("CARGO_PKG_VERSION")
    );
    Ok(())
}
