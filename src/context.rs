// src/context.rs

use std::path::PathBuf;

use directories::UserDirs;

use crate::host::HostAddress;

/// Used when no address is given; deliberately non-shareable so the UI
/// points users at the file export.
pub const DEFAULT_BASE_ADDRESS: &str = "about:blank";

pub const ENV_BASE_URL: &str = "AVANT_BASE_URL";
pub const ENV_EXPORT_DIR: &str = "AVANT_EXPORT_DIR";
pub const ENV_DEBUG: &str = "AVANT_DEBUG";

#[derive(Debug, Clone)]
pub struct AppCtx {
    /// Address the form was opened from (may carry a token).
    pub startup_address: String,
    pub export_dir: PathBuf,
    pub debug_ui: bool,
}

impl AppCtx {
    /// `address_arg` is the link the app was opened with, if any.
    pub fn from_env(address_arg: Option<String>) -> Self {
        let startup_address = address_arg
            .filter(|a| !a.trim().is_empty())
            .or_else(|| std::env::var(ENV_BASE_URL).ok())
            .unwrap_or_else(|| DEFAULT_BASE_ADDRESS.to_string());

        let export_dir = std::env::var(ENV_EXPORT_DIR)
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                UserDirs::new().and_then(|d| d.download_dir().map(|p| p.to_path_buf()))
            })
            .unwrap_or_else(|| PathBuf::from("."));

        let debug_ui = std::env::var(ENV_DEBUG)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            startup_address,
            export_dir,
            debug_ui,
        }
    }

    pub fn host_address(&self) -> HostAddress {
        HostAddress::parse(&self.startup_address)
    }
}

// ======================================================
// Unit Tests
// ======================================================
