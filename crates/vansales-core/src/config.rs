//! Client configuration.
//!
//! Read from `$XDG_CONFIG_HOME/vansales/config.toml` when present, or from
//! an explicit path. A missing default file is not an error: every field
//! has a default and the CLI can override each one from flags or the
//! environment.
//!
//! ```toml
//! api-url = "http://10.0.2.2:3000"
//! username = "vansales_test01"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, VanSalesError};

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Root URL of the journey plan API
    pub api_url: String,

    /// Username to sign in with when none is given on the command line
    pub username: Option<String>,
}

impl Config {
    /// API URL used when nothing else is configured.
    pub const DEFAULT_API_URL: &'static str = "http://localhost:3000";

    /// Loads configuration from `path`, or from the default location when
    /// `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `VanSalesError::FileSystem` if an explicit path cannot be
    /// read and `VanSalesError::Configuration` if the file is not valid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) => Self::from_file(&path),
                None => {
                    debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Existing config file at the default XDG location, if any.
    pub fn default_path() -> Option<PathBuf> {
        xdg::BaseDirectories::with_prefix("vansales").find_config_file("config.toml")
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| VanSalesError::FileSystem {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&contents).map_err(|e| match e {
            VanSalesError::Configuration { message } => VanSalesError::Configuration {
                message: format!("{}: {message}", path.display()),
            },
            other => other,
        })?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| VanSalesError::Configuration {
            message: format!("invalid config: {e}"),
        })?;

        if config.api_url.trim().is_empty() {
            return Err(VanSalesError::Configuration {
                message: "api-url must not be empty".to_string(),
            });
        }

        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Self::DEFAULT_API_URL.to_string(),
            username: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = Config::parse(
            r#"
            api-url = "http://10.0.2.2:3000"
            username = "vansales_test01"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "http://10.0.2.2:3000");
        assert_eq!(config.username.as_deref(), Some("vansales_test01"));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.api_url, "http://localhost:3000");
    }

    #[test]
    fn test_invalid_config_rejected() {
        for contents in [
            "api-url = 3000",
            "api-url = \"\"",
            "api_url = \"http://x\"",
            "not toml at all",
        ] {
            let err = Config::parse(contents).unwrap_err();
            assert!(
                matches!(err, VanSalesError::Configuration { .. }),
                "{contents:?} gave {err}"
            );
        }
    }

    #[test]
    fn test_load_from_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api-url = \"https://sales.example.com\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.api_url, "https://sales.example.com");
        assert_eq!(config.username, None);
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");

        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(matches!(err, VanSalesError::FileSystem { .. }));
    }

    #[test]
    fn test_error_names_the_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "api-url = [").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }
}
