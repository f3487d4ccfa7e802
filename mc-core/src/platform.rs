//! Platform detection and per-user directories.

use std::path::PathBuf;

use crate::constants::APP_NAME;
use crate::error::{McError, McResult};

/// Detected operating system platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    /// Detect the current platform at compile time.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Linux
        }
    }

    /// Get the platform-specific application data directory.
    ///
    /// - Windows: `%APPDATA%/MediaCloud`
    /// - macOS: `~/Library/Application Support/MediaCloud`
    /// - Linux: `~/.local/share/MediaCloud`
    pub fn data_dir() -> McResult<PathBuf> {
        let base = dirs::data_dir()
            .ok_or_else(|| McError::Config("could not determine data directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Get the platform-specific configuration directory.
    ///
    /// - Windows: `%APPDATA%/MediaCloud`
    /// - macOS: `~/Library/Application Support/MediaCloud`
    /// - Linux: `~/.config/MediaCloud`
    pub fn config_dir() -> McResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| McError::Config("could not determine config directory".into()))?;
        Ok(base.join(APP_NAME))
    }

    /// Get a human-readable platform name.
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Windows => "Windows",
            Platform::MacOs => "macOS",
            Platform::Linux => "Linux",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
