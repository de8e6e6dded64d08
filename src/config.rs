//! Runtime configuration for the Wren facade service.
//!
//! Resolved from environment variables with platform fallbacks:
//! `WREN_DATA_DIR` for the storage location, `WREN_PAGES_DIR` for the
//! internal pages' static files, and `WREN_PORT` for the loopback port.

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::platform;

/// Port the facade binds when `WREN_PORT` is not set.
pub const DEFAULT_PORT: u16 = 8747;

/// Resolved service configuration.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Loopback port the facade listens on.
    pub port: u16,
    /// Directory holding the storage file.
    pub data_dir: PathBuf,
    /// Directory holding the internal pages' static files.
    pub pages_dir: PathBuf,
}

impl ServiceConfig {
    /// Builds the configuration from the environment.
    ///
    /// `WREN_DATA_DIR` overrides the platform data directory, `WREN_PAGES_DIR`
    /// overrides the exe-relative `pages` directory, and `WREN_PORT` overrides
    /// the default port (unparseable values fall back to the default).
    pub fn from_env() -> Self {
        let port = env::var("WREN_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let data_dir = match env::var("WREN_DATA_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => platform::get_data_dir(),
        };

        let pages_dir = match env::var("WREN_PAGES_DIR") {
            Ok(dir) => PathBuf::from(dir),
            Err(_) => default_pages_dir(),
        };

        Self {
            port,
            data_dir,
            pages_dir,
        }
    }

    /// Path of the SQLite storage file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("wren.db")
    }

    /// Loopback socket address the facade binds.
    ///
    /// The facade never listens on non-loopback interfaces.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), self.port)
    }
}

/// Pages directory next to the executable, falling back to `./pages`.
fn default_pages_dir() -> PathBuf {
    match env::current_exe() {
        Ok(exe) => exe.parent().unwrap_or(Path::new(".")).join("pages"),
        Err(_) => PathBuf::from("pages"),
    }
}
