//! Locating `config.toml`.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// File name looked up inside the config directory.
const CONFIG_FILE: &str = "config.toml";

/// Directory name under the XDG config root.
const APP_DIR: &str = "cinemeta";

/// Resolves the config file path from `--dir` and the environment.
///
/// # Errors
///
/// Returns an error if `--dir` is absent and neither `XDG_CONFIG_HOME` nor
/// `HOME` is set.
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    config_path_from(
        dir.map(PathBuf::as_path),
        std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
        std::env::var_os("HOME").map(PathBuf::from),
    )
}

/// Picks the config file location.
///
/// `--dir` wins outright. Otherwise a non-empty, absolute `XDG_CONFIG_HOME`
/// is used, then `$HOME/.config`; both get a `cinemeta` subdirectory.
fn config_path_from(
    dir: Option<&Path>,
    xdg_config_home: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf> {
    if let Some(d) = dir {
        return Ok(d.join(CONFIG_FILE));
    }

    let root = match xdg_config_home.filter(|p| p.is_absolute()) {
        Some(xdg) => xdg,
        None => match home {
            Some(home) if !home.as_os_str().is_empty() => home.join(".config"),
            _ => bail!("cannot locate config: set --dir, XDG_CONFIG_HOME or HOME"),
        },
    };
    Ok(root.join(APP_DIR).join(CONFIG_FILE))
}
