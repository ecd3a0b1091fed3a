//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/museum/logs`
/// - Linux: `~/.cache/museum/logs` (or `$XDG_CACHE_HOME/museum/logs`)
/// - Windows: `%LOCALAPPDATA%\museum\logs`
/// - Fallback: `/tmp/museum/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "museum")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/museum"));

    base_dir.join("logs")
}
