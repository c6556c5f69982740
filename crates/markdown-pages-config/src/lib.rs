use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the working directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "markdown-pages.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site layout: where inputs are read from and where the built site goes.
///
/// Every field is optional in the TOML file; missing keys take the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Copied verbatim into `public_dir`.
    pub static_dir: PathBuf,
    /// Searched recursively for `.md` pages.
    pub content_dir: PathBuf,
    /// HTML file holding the `{{ Title }}` and `{{ Content }}` markers.
    pub template_path: PathBuf,
    pub public_dir: PathBuf,
    /// Remove `public_dir` before building.
    pub clean: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("./static"),
            content_dir: PathBuf::from("./content"),
            template_path: PathBuf::from("./template.html"),
            public_dir: PathBuf::from("./public"),
            clean: true,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Expands `~` and environment variables in every path field.
    ///
    /// Paths that fail to expand are kept as written.
    pub fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            static_dir: expand(self.static_dir),
            content_dir: expand(self.content_dir),
            template_path: expand(self.template_path),
            public_dir: expand(self.public_dir),
            clean: self.clean,
        }
    }

    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
