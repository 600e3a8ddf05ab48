//! helper functions for the logging backend
use crate::{util::find_project_root, QsError, QsResult};
use flexi_logger::{self, writers::FileLogWriter, Duplicate, LogTarget, Logger};
use log::Level::Warn;
use std::{fs, path::Path};

/// Creates a logging backend
/// By default all logs with Info or higher are written to a logfile in folder logs.
/// All logs with level at least Info are also written to stdout.
/// Logs with level at least Error are also written to stderr.
/// The level can be overridden with the `RUST_LOG` environment variable.
///
/// logs can be written via log::{error!, warn!, info!, debug!, trace!}
pub fn init_logging() -> QsResult<()> {
    let mut output_dir =
        find_project_root().map_err(QsError::rethrow_with("could not locate log directory"))?;
    output_dir.push("logs");
    init_logging_in(output_dir)
}

/// Like [init_logging], but the logfile is written to `output_dir`, which is created if needed.
/// # Errors
/// Fails if the directory cannot be created or a logger has been installed already.
pub fn init_logging_in<P: AsRef<Path>>(output_dir: P) -> QsResult<()> {
    fs::create_dir_all(output_dir.as_ref())?;
    let file_writer = FileLogWriter::builder()
        .directory(output_dir.as_ref())
        .format(flexi_logger::colored_opt_format)
        .try_build()?;
    Logger::with_env_or_str("info")
        .format(flexi_logger::colored_opt_format)
        .log_target(LogTarget::Writer(Box::new(file_writer)))
        .duplicate_to_stdout(Duplicate::Info)
        .duplicate_to_stderr(Duplicate::Error)
        .start()?;
    log_panics::init();
    Ok(())
}

/// Creates a logging backend for use in testing
/// By default all logs with Warn or higher are printed to stdout.
/// Calling this more than once is fine, later calls do nothing.
pub fn init_test_logging() {
    if !log::log_enabled!(Warn) {
        // another test thread might have won the race, so a failing start is ignored
        let _ = Logger::with_env_or_str("warn")
            .format(flexi_logger::colored_opt_format)
            .start();
    }
}

#[cfg(test)]
mod tests {
    use super::init_logging_in;
    use std::{env, process};

    // The only test in this crate which installs a logger, a second one would race with it.
    #[test]
    fn logs_directory_is_created_and_logger_is_installed_once() {
        let output_dir = env::temp_dir()
            .join(format!("query-structures-{}", process::id()))
            .join("logs");
        init_logging_in(&output_dir).unwrap();
        assert!(output_dir.is_dir());
        log::info!("logging to {}", output_dir.display());
        // a logger is already set
        assert!(init_logging_in(&output_dir).is_err());
    }
}
