//! User configuration (`~/.cmake-starter/config.toml`).
//!
//! ```toml
//! [toolchain]
//! gcc_version = "13"
//! cmake = "cmake"
//! ```
//!
//! The file is optional. Command-line flags win over it.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Default, PartialEq, Eq)]
pub struct StarterConfig {
    #[serde(default)]
    pub toolchain: ToolchainConfig,
}

#[derive(Deserialize, Debug, PartialEq, Eq)]
pub struct ToolchainConfig {
    /// Default GCC version suffix
    pub gcc_version: Option<String>,
    /// Configure tool, name or path
    #[serde(default = "default_cmake")]
    pub cmake: String,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        Self {
            gcc_version: None,
            cmake: default_cmake(),
        }
    }
}

fn default_cmake() -> String {
    "cmake".to_string()
}

/// `~/.cmake-starter/config.toml`, or `./.cmake-starter/config.toml` without a home dir
pub fn default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".cmake-starter")
        .join("config.toml")
}

impl StarterConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse {} - check for syntax errors",
                path.display()
            )
        })
    }

    /// Pick the GCC version: the flag if given, otherwise the configured default.
    /// Blank values count as not given.
    pub fn gcc_version<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
        let given = |v: &&str| !v.trim().is_empty();
        flag.filter(given)
            .or_else(|| self.toolchain.gcc_version.as_deref().filter(given))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = StarterConfig::load(&dir.path().join("config.toml"))?;
        assert_eq!(config, StarterConfig::default());
        assert_eq!(config.toolchain.cmake, "cmake");
        Ok(())
    }

    #[test]
    fn test_parse_full_config() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[toolchain]\ngcc_version = \"13\"\ncmake = \"/opt/cmake/bin/cmake\"\n",
        )?;

        let config = StarterConfig::load(&path)?;
        assert_eq!(config.toolchain.gcc_version.as_deref(), Some("13"));
        assert_eq!(config.toolchain.cmake, "/opt/cmake/bin/cmake");
        Ok(())
    }

    #[test]
    fn test_empty_file_gives_defaults() -> Result<()> {
        let config: StarterConfig = toml::from_str("")?;
        assert_eq!(config, StarterConfig::default());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("config.toml");
        fs::write(&path, "[toolchain\ngcc_version = 13")?;

        let err = StarterConfig::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
        Ok(())
    }

    #[test]
    fn test_flag_overrides_config() {
        let config = StarterConfig {
            toolchain: ToolchainConfig {
                gcc_version: Some("11".to_string()),
                cmake: default_cmake(),
            },
        };
        assert_eq!(config.gcc_version(Some("13")), Some("13"));
        assert_eq!(config.gcc_version(None), Some("11"));
        assert_eq!(config.gcc_version(Some("")), Some("11"));
        assert_eq!(StarterConfig::default().gcc_version(None), None);
    }
}
