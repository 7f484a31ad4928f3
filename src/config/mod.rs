use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// One selectable dataset: the city key typed by the user and its CSV file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitySource {
    pub city: String,
    pub file: String,
}

/// Process-wide, read-only settings. Built once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    #[serde(default = "default_cities")]
    pub cities: Vec<CitySource>,
}

fn default_data_dir() -> String {
    ".".to_string()
}

fn default_cities() -> Vec<CitySource> {
    [
        ("chicago", "chicago.csv"),
        ("new york city", "new_york_city.csv"),
        ("washington", "washington.csv"),
    ]
    .into_iter()
    .map(|(city, file)| CitySource {
        city: city.to_string(),
        file: file.to_string(),
    })
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cities: default_cities(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file. Missing fields fall back to defaults.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        let content =
            fs::read_to_string(path).map_err(|_| AppError::ConfigLoad(path.to_path_buf()))?;
        let cfg: Config =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> AppResult<()> {
        if self.cities.is_empty() {
            return Err(AppError::Config("at least one city must be configured".into()));
        }
        for (i, c) in self.cities.iter().enumerate() {
            if c.city.trim().is_empty() || c.file.trim().is_empty() {
                return Err(AppError::Config(format!("city entry {} is incomplete", i + 1)));
            }
            if c.city.contains(',') || c.city.trim() != c.city {
                return Err(AppError::Config(format!(
                    "city key '{}' must not contain commas or surrounding spaces",
                    c.city
                )));
            }
            if c.city != c.city.to_lowercase() {
                return Err(AppError::Config(format!(
                    "city key '{}' must be lower-case",
                    c.city
                )));
            }
        }
        Ok(())
    }

    /// City keys in configuration order (used as the allowed answer set).
    pub fn city_keys(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.city.as_str()).collect()
    }

    /// Resolve the CSV path of a city key against the data directory.
    pub fn city_file(&self, city: &str) -> AppResult<PathBuf> {
        let source = self
            .cities
            .iter()
            .find(|c| c.city == city)
            .ok_or_else(|| AppError::UnknownCity(city.to_string()))?;
        Ok(expand_tilde(&self.data_dir).join(&source.file))
    }
}
