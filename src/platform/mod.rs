// Wren platform abstraction
// Provides platform-specific paths for Windows, macOS, and Linux.
//
// Uses `cfg(target_os)` for conditional compilation to select the correct
// platform-specific implementation at compile time.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Returns the platform-specific data directory for Wren.
///
/// - **Linux**: `~/.local/share/wren` (or `$XDG_DATA_HOME/wren`)
/// - **macOS**: `~/Library/Application Support/Wren`
/// - **Windows**: `%APPDATA%/Wren`
pub fn get_data_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}

/// Returns the platform-specific downloads directory.
///
/// Backs the compiled default of the `download_dir` setting.
///
/// - **Linux**: `~/Downloads` (or `$XDG_DOWNLOAD_DIR`)
/// - **macOS**: `~/Downloads`
/// - **Windows**: `%USERPROFILE%/Downloads`
pub fn get_download_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_download_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_download_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_download_dir()
    }
}
