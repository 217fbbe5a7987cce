use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

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

/// Defaults picked up when the command line leaves them out: where the wiki
/// sources live, which output format to produce, and where to put the
/// generated files.
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub wiki_path: PathBuf,
    #[serde(default)]
    pub output_format: Option<String>,
    #[serde(default)]
    pub output_path: Option<PathBuf>,
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

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.wiki_path = Self::expand_path(&config.wiki_path).unwrap_or(config.wiki_path);
        config.output_path = config
            .output_path
            .map(|path| Self::expand_path(&path).unwrap_or(path));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
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

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/confluo");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn config_path_expands_tilde() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/confluo/config.toml"));
    }

    #[test]
    fn serialization_roundtrip() {
        let original = Config {
            wiki_path: PathBuf::from("/tmp/test-wiki"),
            output_format: Some("text".to_string()),
            output_path: Some(PathBuf::from("/tmp/test-out")),
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.wiki_path, deserialized.wiki_path);
        assert_eq!(original.output_format, deserialized.output_format);
        assert_eq!(original.output_path, deserialized.output_path);
    }

    #[test]
    fn only_the_wiki_path_is_required() {
        let config: Config = toml::from_str(r#"wiki_path = "/srv/wiki""#).unwrap();

        assert_eq!(config.wiki_path, PathBuf::from("/srv/wiki"));
        assert_eq!(config.output_format, None);
        assert_eq!(config.output_path, None);
    }

    #[test]
    fn expand_path_with_tilde() {
        let expanded = Config::expand_path(Path::new("~/wiki/pages")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("wiki/pages"));
    }

    #[test]
    fn expand_path_with_env_var() {
        unsafe {
            env::set_var("CONFLUO_TEST_ROOT", "/test/env/path");
        }

        let expanded = Config::expand_path(Path::new("$CONFLUO_TEST_ROOT/pages")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/pages"));

        unsafe {
            env::remove_var("CONFLUO_TEST_ROOT");
        }
    }

    #[test]
    fn expand_path_leaves_absolute_paths_alone() {
        let path = Path::new("/absolute/path");
        assert_eq!(Config::expand_path(path).unwrap(), PathBuf::from(path));
    }

    #[test]
    fn load_missing_config_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn save_and_load_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let config = Config {
            wiki_path: PathBuf::from("/tmp/test-wiki"),
            output_format: Some("html".to_string()),
            output_path: None,
        };

        config.save_to_path(&config_file).unwrap();
        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded.wiki_path, config.wiki_path);
        assert_eq!(loaded.output_format, config.output_format);
        assert_eq!(loaded.output_path, None);
    }

    #[test]
    fn load_expands_tilde_in_both_paths() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "wiki_path = \"~/my-wiki\"\noutput_path = \"~/my-site\"\n",
        )
        .unwrap();

        let loaded = Config::load_from_path(&config_file).unwrap().unwrap();

        assert!(!loaded.wiki_path.to_string_lossy().starts_with('~'));
        assert!(loaded.wiki_path.to_string_lossy().contains("my-wiki"));
        let output_path = loaded.output_path.unwrap();
        assert!(!output_path.to_string_lossy().starts_with('~'));
        assert!(output_path.to_string_lossy().contains("my-site"));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "not = [valid").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }
}
