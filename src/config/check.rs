//! `config --check`: add keys missing from an older configuration file.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Insert every key of the default configuration that `path` lacks, keeping
/// the existing values. Returns the names of the keys that were added.
pub fn add_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;

    let mut yaml: Value = serde_yaml::from_str(&content)?;
    if yaml.is_null() {
        yaml = Value::Mapping(Mapping::new());
    }

    let map = yaml.as_mapping_mut().ok_or_else(|| {
        AppError::Config(format!("{} is not a YAML mapping", path.display()))
    })?;

    let defaults = serde_yaml::to_value(Config::default())?;
    let mut added = Vec::new();

    if let Some(default_map) = defaults.as_mapping() {
        for (key, value) in default_map {
            if !map.contains_key(key) {
                map.insert(key.clone(), value.clone());
                if let Some(name) = key.as_str() {
                    added.push(name.to_string());
                }
            }
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&yaml)?;
        fs::write(path, serialized).map_err(|_| AppError::ConfigSave)?;
    }

    Ok(added)
}
