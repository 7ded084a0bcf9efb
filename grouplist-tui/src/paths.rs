//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "grouplist";
const APPLICATION: &str = "grouplist";

/// Maximum number of old log files to keep.
const MAX_OLD_LOGS: usize = 25;

const LATEST_LOG: &str = "latest.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// - Linux: `$XDG_DATA_HOME/grouplist` or `~/.local/share/grouplist`
/// - macOS: `~/Library/Application Support/dev.grouplist.grouplist`
pub fn data_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
}

/// - Linux: `$XDG_CACHE_HOME/grouplist` or `~/.cache/grouplist`
/// - macOS: `~/Library/Caches/dev.grouplist.grouplist`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// - Linux: `$XDG_CONFIG_HOME/grouplist` or `~/.config/grouplist`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Widget configuration, read at startup when present.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Items to show, read at startup when present.
pub fn items_file() -> Option<PathBuf> {
    data_dir().map(|dir| dir.join("items.json"))
}

pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Rename latest.log to a timestamped name and drop the oldest logs.
///
/// Call this at startup before creating the new log file.
pub fn rotate_logs() {
    let Some(cache) = cache_dir() else { return };
    let latest = cache.join(LATEST_LOG);

    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = cache.join(format!("{timestamp}.log"));
        if let Err(e) = fs::rename(&latest, &archived) {
            eprintln!("could not archive {}: {e}", latest.display());
        }
    }

    cleanup_old_logs(&cache);
}

fn cleanup_old_logs(cache_dir: &Path) {
    let Ok(entries) = fs::read_dir(cache_dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST_LOG
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    let excess = logs.len().saturating_sub(MAX_OLD_LOGS);
    for entry in logs.iter().take(excess) {
        let _ = fs::remove_file(entry.path());
    }
}
