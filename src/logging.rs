// src/logging.rs

use color_eyre::eyre::{Result, WrapErr};
use directories::ProjectDirs;
use lazy_static::lazy_static;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_error::ErrorLayer;
use tracing_subscriber::{self, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

lazy_static! {
    pub static ref PROJECT_NAME: String = env!("CARGO_CRATE_NAME").to_uppercase().to_string();
    pub static ref LOG_ENV: String = format!("{}_LOGLEVEL", PROJECT_NAME.clone());
    pub static ref LOG_FILE: String = format!("{}.log", env!("CARGO_PKG_NAME"));
}

fn project_directory() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "domclob", env!("CARGO_PKG_NAME"))
}

pub fn get_data_dir() -> PathBuf {
    if let Some(proj_dirs) = project_directory() {
        proj_dirs.data_local_dir().to_path_buf()
    } else {
        PathBuf::from(".").join(".data")
    }
}

/// Where the log goes: the explicit path if given, else the data directory.
pub fn resolve_log_path(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => get_data_dir().join(LOG_FILE.clone()),
    }
}

/// Initializes file-based logging so the terminal stays free for scan output.
///
/// The filter comes from `RUST_LOG`, then `DOMCLOB_LOGLEVEL`, then defaults to
/// `domclob=info`.
pub fn initialize_logging(log_file: Option<&Path>) -> Result<PathBuf> {
    let log_path = resolve_log_path(log_file);
    if let Some(directory) = log_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(directory)
            .wrap_err_with(|| format!("Failed to create log directory {}", directory.display()))?;
    }
    let file = std::fs::File::create(&log_path)
        .wrap_err_with(|| format!("Failed to create log file {}", log_path.display()))?;

    let file_log_level = std::env::var("RUST_LOG")
        .or_else(|_| std::env::var(LOG_ENV.clone()))
        .unwrap_or_else(|_| format!("{}=info", env!("CARGO_CRATE_NAME")));

    let file_subscriber = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::new(file_log_level));

    tracing_subscriber::registry()
        .with(file_subscriber)
        .with(ErrorLayer::default())
        .try_init()
        .wrap_err("Failed to install the tracing subscriber")?;

    Ok(log_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_path_wins() {
        let path = Path::new("/tmp/custom.log");
        assert_eq!(resolve_log_path(Some(path)), PathBuf::from("/tmp/custom.log"));
    }

    #[test]
    fn default_log_file_is_named_after_the_crate() {
        assert_eq!(LOG_FILE.as_str(), "domclob.log");
        assert_eq!(LOG_ENV.as_str(), "DOMCLOB_LOGLEVEL");
        assert!(resolve_log_path(None).ends_with("domclob.log"));
    }
}
