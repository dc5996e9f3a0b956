//! Site configuration management for `sitemapper.toml`.
//!
//! # Sections
//!
//! | Section           | Purpose                                        |
//! |-------------------|------------------------------------------------|
//! | `[site]`          | Site metadata (title, base url)                |
//! | `[build]`         | Content/output paths, minify                   |
//! | `[build.sitemap]` | Sitemap output settings (enable, path)         |

mod error;
mod section;
mod util;

pub use error::ConfigError;
pub use section::{BuildSection, SiteSection};

use util::find_config_file;

use crate::{cli::Cli, log};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Root configuration structure representing sitemapper.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, base url)
    #[serde(default)]
    pub site: SiteSection,

    /// Build settings
    #[serde(default)]
    pub build: BuildSection,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd to find the config file. The project root
    /// is determined by the config file's parent directory.
    pub fn load(cli: &Cli) -> Result<Self> {
        let Some(config_path) = find_config_file(&cli.config) else {
            log!(
                "error";
                "Config file '{}' not found in this directory or any parent.",
                cli.config.display()
            );
            std::process::exit(1);
        };

        let mut config = Self::from_path(&config_path)?;

        // CLI overrides take precedence over config file values
        if let Some(output) = &cli.output {
            config.build.output = output.clone();
        }
        if let Some(content) = &cli.content {
            config.build.content = content.clone();
        }

        config.validate()?;
        Ok(config)
    }

    /// Load and parse a config file, recording its root directory.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let mut config: Self = toml::from_str(&raw)?;

        config.config_path = path.to_path_buf();
        config.root = path.parent().unwrap_or(Path::new(".")).to_path_buf();
        Ok(config)
    }

    /// Validate the loaded configuration.
    ///
    /// # Checks
    /// - `site.url` must be set: every sitemap route resolves against it
    /// - `site.url` must be a valid absolute URL with scheme
    pub fn validate(&self) -> Result<(), ConfigError> {
        let Some(url_str) = self.site.url.as_deref() else {
            return Err(ConfigError::Validation(
                "site.url is not configured; set it, e.g.: \"https://example.com\"".to_string(),
            ));
        };

        match url::Url::parse(url_str) {
            Ok(parsed) if parsed.cannot_be_a_base() => Err(ConfigError::Validation(format!(
                "site.url `{url_str}` cannot be used as a base URL"
            ))),
            Ok(_) => Ok(()),
            Err(e) => Err(ConfigError::Validation(format!(
                "site.url `{url_str}` is not a valid URL: {e}"
            ))),
        }
    }

    /// Base site URL. Guaranteed present and well-formed after `validate`.
    pub fn domain(&self) -> &str {
        self.site.url.as_deref().unwrap_or_default()
    }

    /// Content directory, resolved against the project root.
    pub fn content_dir(&self) -> PathBuf {
        self.root.join(&self.build.content)
    }

    /// Output directory, resolved against the project root.
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(&self.build.output)
    }

    /// Sitemap file destination, resolved against the output directory.
    pub fn sitemap_path(&self) -> PathBuf {
        self.output_dir().join(&self.build.sitemap.path)
    }
}
