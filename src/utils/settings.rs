//! Settings and configuration utilities.
//!
//! Reads `$HOME/.pr-style/settings.json` and uses its `env` table as a
//! fallback for environment variables that are not set in the process.

use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Settings loaded from $HOME/.pr-style/settings.json.
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    /// Environment variable overrides.
    #[serde(default)]
    pub env: HashMap<String, String>,
}

impl Settings {
    /// Loads settings from the default location.
    pub fn load() -> Result<Self> {
        let settings_path = Self::get_settings_path()?;
        Self::load_from_path(&settings_path)
    }

    /// Loads settings from a specific path, defaulting when the file is absent.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        serde_json::from_str::<Settings>(&content)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))
    }

    /// Returns the default settings path.
    pub fn get_settings_path() -> Result<PathBuf> {
        let home_dir = dirs::home_dir().context("Failed to determine home directory")?;

        Ok(home_dir.join(".pr-style").join("settings.json"))
    }

    /// Returns an environment variable with fallback to these settings.
    pub fn get_env_var(&self, key: &str) -> Option<String> {
        match env::var(key) {
            Ok(value) if !value.is_empty() => Some(value),
            _ => self.env.get(key).filter(|v| !v.is_empty()).cloned(),
        }
    }
}

/// Returns an environment variable with fallback to the settings file.
pub fn get_env_var(key: &str) -> Result<String> {
    if let Ok(value) = env::var(key) {
        if !value.is_empty() {
            return Ok(value);
        }
    }

    match Settings::load() {
        Ok(settings) => settings
            .get_env_var(key)
            .ok_or_else(|| anyhow::anyhow!("Environment variable not found: {key}")),
        // A broken settings file should not hide the missing variable
        Err(err) => Err(err.context(format!("Environment variable not found: {key}"))),
    }
}

/// Tries multiple environment variables in order, with fallback to settings.
pub fn get_env_vars(keys: &[&str]) -> Result<String> {
    for key in keys {
        if let Ok(value) = get_env_var(key) {
            return Ok(value);
        }
    }

    Err(anyhow::anyhow!(
        "None of the environment variables found: {:?}",
        keys
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_settings(dir: &TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("settings.json");
        fs::write(&path, json).unwrap();
        path
    }

    #[test]
    fn load_from_path_reads_env_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(
            &temp_dir,
            r#"{ "env": { "GITHUB_TOKEN": "ghp_file", "GITHUB_API_URL": "http://localhost" } }"#,
        );

        let settings = Settings::load_from_path(&path).unwrap();

        assert_eq!(settings.env.get("GITHUB_TOKEN").unwrap(), "ghp_file");
        assert_eq!(
            settings.env.get("GITHUB_API_URL").unwrap(),
            "http://localhost"
        );
    }

    #[test]
    fn missing_file_yields_empty_settings() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load_from_path(temp_dir.path().join("absent.json")).unwrap();
        assert!(settings.env.is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(&temp_dir, "{ not json");
        assert!(Settings::load_from_path(&path).is_err());
    }

    #[test]
    fn environment_takes_precedence_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_settings(
            &temp_dir,
            r#"{ "env": { "PR_STYLE_TEST_PRECEDENCE": "from_file" } }"#,
        );
        let settings = Settings::load_from_path(&path).unwrap();

        env::set_var("PR_STYLE_TEST_PRECEDENCE", "from_env");
        assert_eq!(
            settings.get_env_var("PR_STYLE_TEST_PRECEDENCE").as_deref(),
            Some("from_env")
        );

        env::remove_var("PR_STYLE_TEST_PRECEDENCE");
        assert_eq!(
            settings.get_env_var("PR_STYLE_TEST_PRECEDENCE").as_deref(),
            Some("from_file")
        );
        assert_eq!(settings.get_env_var("PR_STYLE_TEST_UNSET"), None);
    }
}
