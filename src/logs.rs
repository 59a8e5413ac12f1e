use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

const MAX_LOG_FILES: usize = 3;
const MAX_LINES_PER_FILE: usize = 1000;

pub fn log_file_path(log_dir: &str) -> PathBuf {
    Path::new(log_dir).join("logs/main.log")
}

/// Installs the global logger, writing to a rolling file under `log_dir`.
/// Fails if a global logger is already installed.
pub fn init(log_dir: &str) -> Result<()> {
    let path = log_file_path(log_dir);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log = FileRotate::new(
        path,
        AppendTimestamp::default(FileLimit::MaxFiles(MAX_LOG_FILES)),
        ContentLimit::Lines(MAX_LINES_PER_FILE),
        Compression::None,
        #[cfg(unix)]
        None,
    );
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();
    log::set_boxed_logger(WriteLogger::new(LevelFilter::Info, config, log))?;
    log::set_max_level(LevelFilter::Info);
    info!("logger initialized, writing to {}", log_dir);
    Ok(())
}
