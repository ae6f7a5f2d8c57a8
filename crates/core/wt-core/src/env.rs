use crate::error::{AppError, AppResult};
use std::ffi::OsString;
use std::path::PathBuf;

/// Environment variable to override the default application directory.
pub const ENV_DATA_DIR: &str = "WT_HOME";

/// Folder created under the platform configuration directory.
pub const APP_FOLDER: &str = "WTApp";

/// Settings document inside the application directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Returns the directory holding the settings file and logs.
///
/// `WT_HOME` wins when set. Otherwise this is `WTApp` under the per-user
/// application data directory (`%APPDATA%` on Windows, `~/.config` on Linux).
pub fn get_base_dir() -> AppResult<PathBuf> {
    resolve_base_dir(std::env::var_os(ENV_DATA_DIR), dirs::config_dir())
}

fn resolve_base_dir(
    override_dir: Option<OsString>,
    config_dir: Option<PathBuf>,
) -> AppResult<PathBuf> {
    if let Some(env_path) = override_dir {
        let path = PathBuf::from(env_path);
        if !path.is_absolute() {
            return Err(AppError::Config(format!(
                "Environment variable {} must be an absolute path, got: {:?}",
                ENV_DATA_DIR, path
            )));
        }
        return Ok(path);
    }

    match config_dir {
        Some(dir) => Ok(dir.join(APP_FOLDER)),
        None => Err(AppError::Config(format!(
            "Cannot determine the application data directory. Please set {}.",
            ENV_DATA_DIR
        ))),
    }
}
