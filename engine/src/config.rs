use std::io::ErrorKind;
use std::sync::Mutex;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// YAML-backed config store. A missing file yields the default config;
/// anything else that goes wrong is an error.
pub struct ConfigStore<T> {
    file_path: String,
    cached: Mutex<Option<T>>,
}

impl<T> ConfigStore<T>
where
    T: Clone + Serialize + DeserializeOwned + Validate + Default,
{
    pub fn from_yaml_file(file_path: &str) -> Self {
        Self {
            file_path: file_path.to_string(),
            cached: Mutex::new(None),
        }
    }

    pub fn load(&self) -> Result<T, String> {
        let mut cached = self.cached.lock().unwrap();
        if let Some(config) = cached.as_ref() {
            return Ok(config.clone());
        }

        let content = match std::fs::read_to_string(&self.file_path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(T::default()),
            Err(err) => return Err(format!("Failed to read config file: {}", err)),
        };

        let config: T = serde_yaml_ng::from_str(&content)
            .map_err(|e| format!("Failed to deserialize config: {}", e))?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *cached = Some(config.clone());
        Ok(config)
    }

    pub fn save(&self, config: &T) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let content = serde_yaml_ng::to_string(config)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        std::fs::write(&self.file_path, &content)
            .map_err(|e| format!("Failed to write config file: {}", e))?;

        *self.cached.lock().unwrap() = Some(config.clone());
        Ok(())
    }
}
