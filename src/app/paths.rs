// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! # Path Resolution Order
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--i18n-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`ICED_QR_CONFIG_DIR`, `ICED_QR_I18N_DIR`)
//! 4. **Platform default** - via `dirs` crate (config only; translations
//!    default to the embedded resources, so the i18n dir has no platform
//!    fallback)
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.i18n_dir);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedQr";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_QR_CONFIG_DIR";

/// Environment variable to override the translations directory.
pub const ENV_I18N_DIR: &str = "ICED_QR_I18N_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Global CLI override for the translations directory (set once at startup).
static CLI_I18N_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes CLI overrides for the config and translations directories.
///
/// Must be called once at application startup, before any path resolution.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>, i18n_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
    CLI_I18N_DIR
        .set(i18n_dir.map(PathBuf::from))
        .expect("CLI i18n dir override already initialized");
}

fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

fn get_cli_i18n_dir() -> Option<PathBuf> {
    CLI_I18N_DIR.get().and_then(Clone::clone)
}

/// Returns the directory holding `settings.toml`.
///
/// Platform defaults:
/// - Linux: `~/.config/IcedQr/`
/// - macOS: `~/Library/Application Support/IcedQr/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\IcedQr\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Like [`get_app_config_dir`] with an explicit highest-priority override,
/// used by tests and the config layer.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns a filesystem directory with `.ftl` translation files, if one
/// was requested. `None` means "use the embedded resources" — there is
/// deliberately no platform default here.
pub fn get_i18n_dir() -> Option<PathBuf> {
    get_i18n_dir_with_override(None)
}

/// Like [`get_i18n_dir`] with an explicit highest-priority override.
pub fn get_i18n_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = get_cli_i18n_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_I18N_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    None
}

// Mutex to prevent parallel tests from interfering with each other's env
// vars. Shared with other test modules that touch the directory overrides.
#[cfg(test)]
pub(crate) static ENV_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
