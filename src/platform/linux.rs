// Wren platform paths for Linux
// Data:      ~/.local/share/wren
// Downloads: ~/Downloads

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// Returns the data directory for Wren on Linux.
/// Uses `$XDG_DATA_HOME/wren` if set, otherwise `~/.local/share/wren`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("wren")
    } else {
        home_dir().join(".local").join("share").join("wren")
    }
}

/// Returns the downloads directory on Linux.
/// Uses `$XDG_DOWNLOAD_DIR` if set, otherwise `~/Downloads`.
pub fn get_download_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DOWNLOAD_DIR") {
        PathBuf::from(xdg)
    } else {
        home_dir().join("Downloads")
    }
}
