use serde::Deserialize;
use std::{env, fs, path::Path, path::PathBuf};
use thiserror::Error;

const CONFIG_NAMESPACE: &str = "markdown2html";
const CONFIG_FILENAME: &str = "config.toml";

/// Rendering options, loadable from a TOML file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderOptions {
    /// Wrap the converted body in a full HTML document
    #[serde(default)]
    pub standalone: bool,

    /// Document title; falls back to the first heading
    #[serde(default)]
    pub title: Option<String>,

    /// Value of the `lang` attribute on `<html>`
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            title: None,
            lang: default_lang(),
        }
    }
}

impl RenderOptions {
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file at {path:?}: {source}")]
    Io {
        #[source]
        source: std::io::Error,
        path: PathBuf,
    },
    #[error("failed to parse config file at {path:?}: {source}")]
    Parse {
        #[source]
        source: toml::de::Error,
        path: PathBuf,
    },
}

/// Read options from `path`.
pub fn load_config_file(path: &Path) -> Result<RenderOptions, ConfigError> {
    let config_text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        source,
        path: path.to_path_buf(),
    })?;

    toml::from_str(&config_text).map_err(|source| ConfigError::Parse {
        source,
        path: path.to_path_buf(),
    })
}

/// Load options from an explicit file, or from the user config directory if
/// a config file exists there. Defaults otherwise.
pub fn load_config(explicit: Option<&Path>) -> Result<RenderOptions, ConfigError> {
    if let Some(path) = explicit {
        log::debug!("loading config from {}", path.display());
        return load_config_file(path);
    }

    match resolve_config_path() {
        Some(path) if path.is_file() => {
            log::debug!("loading config from {}", path.display());
            load_config_file(&path)
        }
        _ => Ok(RenderOptions::default()),
    }
}

pub fn resolve_config_path() -> Option<PathBuf> {
    Some(config_home_dir()?.join(CONFIG_NAMESPACE).join(CONFIG_FILENAME))
}

fn config_home_dir() -> Option<PathBuf> {
    if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir));
    }

    #[cfg(windows)]
    if let Some(dir) = env::var_os("APPDATA") {
        return Some(PathBuf::from(dir));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }

    None
}
