//! YAML rendering for machine-readable views.

use anyhow::{Context, Result};
use serde::Serialize;

/// Serializes a value to a YAML document.
pub fn to_yaml<T: Serialize>(data: &T) -> Result<String> {
    serde_yaml::to_string(data).context("Failed to serialize to YAML")
}
