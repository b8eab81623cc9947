use anyhow::Context;
use faceplate_editor::{ApplyMode, AttributeMap, StyleCatalog, DEFAULT_BASELINE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const DEFAULT_CONFIG_NAME: &str = "faceplate.config.json";

/// Faceplate configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Style used to decorate prompts and the sample
    #[serde(default = "default_baseline")]
    pub baseline_style: String,

    /// Extra named styles and the attribute keys each recognizes
    #[serde(default)]
    pub styles: BTreeMap<String, Vec<String>>,

    /// Property-list literal the face starts from, e.g. `(:weight bold)`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_face: Option<String>,

    #[serde(default)]
    pub apply_mode: ApplyMode,
}

fn default_baseline() -> String {
    DEFAULT_BASELINE.to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &str) -> anyhow::Result<Self> {
        let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Invalid {}", config_path.display()))?;
            tracing::debug!("loaded config from {}", config_path.display());
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Built-in styles extended with the configured ones
    pub fn catalog(&self) -> StyleCatalog {
        let mut catalog = StyleCatalog::default();
        let mut extra = StyleCatalog::empty();
        for (name, keys) in &self.styles {
            extra.insert(name.clone(), keys.clone());
        }
        catalog.extend(extra);
        catalog
    }

    pub fn initial_face(&self) -> anyhow::Result<AttributeMap> {
        match &self.initial_face {
            Some(text) => AttributeMap::parse(text)
                .with_context(|| format!("Invalid initialFace {:?}", text)),
            None => Ok(AttributeMap::new()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baseline_style: default_baseline(),
            styles: BTreeMap::new(),
            initial_face: None,
            apply_mode: ApplyMode::Face,
        }
    }
}
