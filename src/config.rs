use crate::case::Notation;
use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

/// Defaults for the command-line front end. The conversions themselves
/// have no knobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub notation: Notation,

    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default = "default_color")]
    pub color: bool,
}

fn default_color() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            notation: Notation::default(),
            format: OutputFormat::default(),
            color: default_color(),
        }
    }
}

/// One config file layer. Only the keys present in the file are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub notation: Option<Notation>,

    #[serde(default)]
    pub format: Option<OutputFormat>,

    #[serde(default)]
    pub color: Option<bool>,
}

/// Values given on the command line; `None` leaves the file/default value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub notation: Option<Notation>,
    pub format: Option<OutputFormat>,
    pub no_color: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), Path::new(LOCAL_CONFIG_FILE), overrides)
    }

    fn load_from(global: Option<&Path>, local: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global {
            if global_path.exists() {
                tracing::debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        if local.exists() {
            tracing::debug!("loading local config from {}", local.display());
            config = config.merge(Self::from_file(local)?);
        }

        if let Some(notation) = overrides.notation {
            config.notation = notation;
        }
        if let Some(format) = overrides.format {
            config.format = format;
        }
        if overrides.no_color {
            config.color = false;
        }

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, layer: ConfigFile) -> Self {
        if let Some(notation) = layer.notation {
            self.notation = notation;
        }
        if let Some(format) = layer.format {
            self.format = format;
        }
        if let Some(color) = layer.color {
            self.color = color;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.notation, Notation::Camel);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.color);
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            notation: Notation::Dot,
            ..Default::default()
        };
        let layer = ConfigFile {
            format: Some(OutputFormat::Json),
            ..Default::default()
        };

        let merged = base.merge(layer);
        assert_eq!(merged.notation, Notation::Dot);
        assert_eq!(merged.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_file_leaves_other_keys_unset() {
        let layer: ConfigFile = toml::from_str("notation = \"kebab\"").unwrap();
        assert_eq!(layer.notation, Some(Notation::Kebab));
        assert_eq!(layer.format, None);
        assert_eq!(layer.color, None);
    }

    #[test]
    fn test_local_default_values_override_global() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "notation = \"snake\"\nformat = \"json\"\ncolor = false\n").unwrap();
        fs::write(&local, "notation = \"camel\"\nformat = \"text\"\ncolor = true\n").unwrap();

        let config = Config::load_from(Some(&global), &local, Overrides::default()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_layer_priority() {
        let dir = TempDir::new().unwrap();
        let global = dir.path().join("global.toml");
        let local = dir.path().join("local.toml");
        fs::write(&global, "notation = \"snake\"\ncolor = false\n").unwrap();
        fs::write(&local, "notation = \"dot\"\n").unwrap();

        let config = Config::load_from(Some(&global), &local, Overrides::default()).unwrap();
        assert_eq!(config.notation, Notation::Dot);
        assert!(!config.color);

        let overrides = Overrides {
            notation: Some(Notation::Kebab),
            format: Some(OutputFormat::Json),
            no_color: false,
        };
        let config = Config::load_from(Some(&global), &local, overrides).unwrap();
        assert_eq!(config.notation, Notation::Kebab);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_missing_files_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(
            Some(&dir.path().join("nope.toml")),
            &dir.path().join("also-nope.toml"),
            Overrides::default(),
        )
        .unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let local = dir.path().join("bad.toml");
        fs::write(&local, "notation = \"pascal\"").unwrap();

        let err = Config::load_from(None, &local, Overrides::default()).unwrap_err();
        assert!(err.to_string().contains("bad.toml"));
    }
}
