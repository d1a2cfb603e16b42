//! Infographic Configuration
//!
//! Display constants for tile composition and rendering. All keys are
//! optional in the JSON file; anything left out keeps its default.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the tile composer and the formatters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfographicConfig {
    /// Species whose tile shows only its fact, bypassing comparison
    pub sentinel_species: String,

    /// Image key used for the human's tile instead of its caption
    pub human_image: String,

    /// Directory prefix for tile images
    pub image_dir: String,

    /// File extension for tile images (without the dot)
    pub image_extension: String,
}

impl Default for InfographicConfig {
    fn default() -> Self {
        Self {
            sentinel_species: "Pigeon".to_string(),
            human_image: "human".to_string(),
            image_dir: "images".to_string(),
            image_extension: "png".to_string(),
        }
    }
}

impl InfographicConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Parse configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: InfographicConfig =
            serde_json::from_str(json).context("Invalid infographic config JSON")?;
        Ok(config)
    }

    pub fn is_sentinel(&self, species: &str) -> bool {
        species == self.sentinel_species
    }
}
