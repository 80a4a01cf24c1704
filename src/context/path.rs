//! Config file location from multiple sources

use log::debug;
use std::path::PathBuf;

use crate::config::path as path_config;
use crate::error::{ConfigError, Result};

/// Resolve the config file path from the process environment:
/// 1. explicit path argument (if non-empty)
/// 2. BAO_CONFIG_PATH env var (VAULT_CONFIG_PATH as fallback)
/// 3. ~/.bao
///
/// A leading `~` is expanded to the current user's home directory.
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf> {
    resolve_config_path_with(explicit, |name| std::env::var(name).ok(), dirs::home_dir())
}

/// Same as [`resolve_config_path`] with the environment lookup and home
/// directory supplied by the caller.
pub fn resolve_config_path_with<F>(
    explicit: Option<&str>,
    env: F,
    home: Option<PathBuf>,
) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    let path = select_config_path(explicit, env);
    expand_home(&path, home)
}

fn select_config_path<F>(explicit: Option<&str>, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit.filter(|p| !p.is_empty()) {
        debug!("Using config path from argument: {}", path);
        return path.to_string();
    }

    for var in [path_config::ENV_VAR, path_config::LEGACY_ENV_VAR] {
        if let Some(path) = env(var).filter(|p| !p.is_empty()) {
            debug!("Using config path from {} env var: {}", var, path);
            return path;
        }
    }

    debug!("Using default config path: {}", path_config::DEFAULT);
    path_config::DEFAULT.to_string()
}

/// Expand a leading `~` or `~/` against `home`. Other paths pass through.
pub fn expand_home(path: &str, home: Option<PathBuf>) -> Result<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };

    let rest = if rest.is_empty() {
        rest
    } else if let Some(stripped) = rest.strip_prefix(['/', '\\']) {
        stripped
    } else {
        return Err(ConfigError::PathResolution {
            path: path.to_string(),
            reason: "cannot expand user-specific home dir".to_string(),
        });
    };

    let home = home.ok_or_else(|| ConfigError::PathResolution {
        path: path.to_string(),
        reason: "home directory could not be determined".to_string(),
    })?;

    if rest.is_empty() {
        Ok(home)
    } else {
        Ok(home.join(rest))
    }
}
