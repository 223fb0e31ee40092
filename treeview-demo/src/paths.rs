//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs::{self, File};
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "treeview";
const APPLICATION: &str = "treeview-demo";

/// Log file used when no cache directory is available.
const FALLBACK_LOG: &str = "treeview-demo.log";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the path to the log file.
///
/// - Linux: `$XDG_CACHE_HOME/treeview-demo/latest.log` or `~/.cache/treeview-demo/latest.log`
/// - macOS: `~/Library/Caches/dev.treeview.treeview-demo/latest.log`
/// - Windows: `C:\Users\<User>\AppData\Local\treeview\treeview-demo\cache\latest.log`
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}

/// Create the log file, falling back to the working directory.
pub fn create_log_file() -> std::io::Result<File> {
    if let Some(path) = log_file() {
        let created = path
            .parent()
            .map_or(Ok(()), fs::create_dir_all)
            .and_then(|()| File::create(&path));
        if let Ok(file) = created {
            return Ok(file);
        }
    }
    File::create(FALLBACK_LOG)
}
