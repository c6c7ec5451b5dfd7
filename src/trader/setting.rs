//! Global setting of the bar generation runtime.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{LazyLock, RwLock};

use thiserror::Error;

use super::utility::get_file_path;

/// Setting filename
pub const SETTING_FILENAME: &str = "portfolio_setting.json";

/// Errors raised while reading or writing a settings file
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("setting file io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("setting file is not valid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("settings lock poisoned")]
    Poisoned,
}

/// Default settings
fn default_settings() -> HashMap<String, SettingValue> {
    let mut settings = HashMap::new();

    // Log settings
    settings.insert("log.active".to_string(), SettingValue::Bool(true));
    settings.insert("log.level".to_string(), SettingValue::Int(20)); // INFO level
    settings.insert("log.console".to_string(), SettingValue::Bool(true));
    settings.insert("log.file".to_string(), SettingValue::Bool(false));

    // Window bar settings
    settings.insert("bar.window".to_string(), SettingValue::Int(1));
    settings.insert("bar.interval".to_string(), SettingValue::String("1m".to_string()));

    settings
}

/// Setting value types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl SettingValue {
    /// Get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as i64
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Get as f64
    pub fn as_float(&self) -> Option<f64> {
        match self {
            SettingValue::Float(f) => Some(*f),
            SettingValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as bool
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Settings container
pub struct Settings {
    settings: RwLock<HashMap<String, SettingValue>>,
}

impl Settings {
    /// Create new Settings with defaults, overlaid with the temp folder file if present
    pub fn new() -> Self {
        let mut settings = default_settings();

        if let Some(file_settings) = load_settings_from_file(&get_file_path(SETTING_FILENAME)) {
            settings.extend(file_settings);
        }

        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Create Settings with defaults overlaid with the given JSON file
    pub fn from_file(path: &Path) -> Result<Self, SettingError> {
        let mut settings = default_settings();

        let content = fs::read_to_string(path)?;
        let file_settings: HashMap<String, SettingValue> = serde_json::from_str(&content)?;
        settings.extend(file_settings);

        Ok(Self {
            settings: RwLock::new(settings),
        })
    }

    /// Get a setting value
    pub fn get(&self, key: &str) -> Option<SettingValue> {
        self.settings.read().ok()?.get(key).cloned()
    }

    /// Get a string setting
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(|v| v.as_str().map(|s| s.to_string()))
    }

    /// Get an integer setting
    pub fn get_int(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(|v| v.as_int())
    }

    /// Get a float setting
    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(|v| v.as_float())
    }

    /// Get a bool setting
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(|v| v.as_bool())
    }

    /// Set a setting value
    pub fn set(&self, key: impl Into<String>, value: SettingValue) {
        if let Ok(mut settings) = self.settings.write() {
            settings.insert(key.into(), value);
        }
    }

    /// Update settings from a map
    pub fn update(&self, new_settings: HashMap<String, SettingValue>) {
        if let Ok(mut settings) = self.settings.write() {
            settings.extend(new_settings);
        }
    }

    /// Get all settings as HashMap
    pub fn get_all(&self) -> HashMap<String, SettingValue> {
        self.settings
            .read()
            .map(|settings| settings.clone())
            .unwrap_or_default()
    }

    /// Save settings to the temp folder file
    pub fn save(&self) -> Result<(), SettingError> {
        self.save_to(&get_file_path(SETTING_FILENAME))
    }

    /// Save settings to the given path
    pub fn save_to(&self, path: &Path) -> Result<(), SettingError> {
        let settings = self.settings.read().map_err(|_| SettingError::Poisoned)?;
        let json = serde_json::to_string_pretty(&*settings)?;
        fs::write(path, json)?;
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

/// Load settings from JSON file
fn load_settings_from_file(path: &Path) -> Option<HashMap<String, SettingValue>> {
    if !path.exists() {
        return None;
    }

    let content = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&content) {
        Ok(settings) => Some(settings),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable setting file");
            None
        }
    }
}

/// Global settings instance
pub static SETTINGS: LazyLock<Settings> = LazyLock::new(Settings::new);
