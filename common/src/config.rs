use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Serialize(String),
    Deserialize(String),
    Validation(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Config IO error: {}", e),
            ConfigError::Serialize(e) => write!(f, "Failed to serialize config: {}", e),
            ConfigError::Deserialize(e) => write!(f, "Failed to deserialize config: {}", e),
            ConfigError::Validation(e) => write!(f, "Config validation error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

pub trait ConfigSerializer<TConfig> {
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError>;
    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct YamlConfigSerializer;

impl<TConfig> ConfigSerializer<TConfig> for YamlConfigSerializer
where
    TConfig: for<'de> Deserialize<'de> + Serialize,
{
    fn serialize(&self, config: &TConfig) -> Result<String, ConfigError> {
        serde_yaml_ng::to_string(config).map_err(|e| ConfigError::Serialize(e.to_string()))
    }

    fn deserialize(&self, content: &str) -> Result<TConfig, ConfigError> {
        serde_yaml_ng::from_str(content).map_err(|e| ConfigError::Deserialize(e.to_string()))
    }
}

/// A config file on disk. A missing file reads as `TConfig::default()`;
/// anything read or written is validated first.
pub struct ConfigStore<TConfig, TSerializer = YamlConfigSerializer> {
    path: PathBuf,
    serializer: TSerializer,
    cached: Option<TConfig>,
}

impl<TConfig> ConfigStore<TConfig, YamlConfigSerializer>
where
    TConfig: Clone + Default + Validate + for<'de> Deserialize<'de> + Serialize,
{
    pub fn yaml(path: impl AsRef<Path>) -> Self {
        Self::new(path, YamlConfigSerializer)
    }
}

impl<TConfig, TSerializer> ConfigStore<TConfig, TSerializer>
where
    TConfig: Clone + Default + Validate,
    TSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(path: impl AsRef<Path>, serializer: TSerializer) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            serializer,
            cached: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&mut self) -> Result<TConfig, ConfigError> {
        if let Some(config) = &self.cached {
            return Ok(config.clone());
        }

        let config = match std::fs::read_to_string(&self.path) {
            Ok(content) => self.serializer.deserialize(&content)?,
            Err(err) if err.kind() == ErrorKind::NotFound => TConfig::default(),
            Err(err) => return Err(err.into()),
        };
        config.validate().map_err(ConfigError::Validation)?;

        self.cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&mut self, config: &TConfig) -> Result<(), ConfigError> {
        config.validate().map_err(ConfigError::Validation)?;
        let content = self.serializer.serialize(config)?;
        std::fs::write(&self.path, content)?;
        self.cached = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct SampleConfig {
        name: String,
        delay_ms: u32,
    }

    impl Default for SampleConfig {
        fn default() -> Self {
            Self {
                name: "sample".to_string(),
                delay_ms: 100,
            }
        }
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.name.is_empty() {
                return Err("name must not be empty".to_string());
            }
            Ok(())
        }
    }

    fn temp_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_loads_default() {
        let mut store: ConfigStore<SampleConfig> = ConfigStore::yaml(temp_path());
        assert_eq!(store.load().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_save_then_load_from_fresh_store() {
        let path = temp_path();
        let config = SampleConfig {
            name: "custom".to_string(),
            delay_ms: 750,
        };

        let mut store: ConfigStore<SampleConfig> = ConfigStore::yaml(&path);
        store.save(&config).unwrap();

        let mut fresh: ConfigStore<SampleConfig> = ConfigStore::yaml(&path);
        assert_eq!(fresh.load().unwrap(), config);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_config_is_not_saved() {
        let path = temp_path();
        let mut store: ConfigStore<SampleConfig> = ConfigStore::yaml(&path);
        let invalid = SampleConfig {
            name: String::new(),
            delay_ms: 0,
        };
        assert!(matches!(store.save(&invalid), Err(ConfigError::Validation(_))));
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_yaml_is_rejected() {
        let path = temp_path();
        std::fs::write(&path, "name: [unclosed").unwrap();
        let mut store: ConfigStore<SampleConfig> = ConfigStore::yaml(&path);
        assert!(matches!(store.load(), Err(ConfigError::Deserialize(_))));
        let _ = std::fs::remove_file(path);
    }
}
