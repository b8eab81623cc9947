//! Named styles and the attribute keys each one recognizes.
//!
//! Only used to offer completions and to check `apply_named` targets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const FACE_KEYS: &[&str] = &[
    ":family",
    ":foundry",
    ":width",
    ":height",
    ":weight",
    ":slant",
    ":foreground",
    ":background",
    ":underline",
    ":overline",
    ":strike-through",
    ":box",
    ":inverse-video",
    ":stipple",
    ":extend",
    ":font",
    ":inherit",
];

const BUILTIN_STYLES: &[&str] = &[
    "default",
    "prompt",
    "bold",
    "italic",
    "underline",
    "highlight",
    "region",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleCatalog {
    styles: BTreeMap<String, Vec<String>>,
}

impl StyleCatalog {
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Register a style, replacing its key list if it already exists
    pub fn insert(&mut self, name: impl Into<String>, keys: Vec<String>) {
        self.styles.insert(name.into(), keys);
    }

    /// Add every style from `other`, overriding ours on name clashes
    pub fn extend(&mut self, other: StyleCatalog) {
        self.styles.extend(other.styles);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    /// Style names, sorted
    pub fn names(&self) -> Vec<String> {
        self.styles.keys().cloned().collect()
    }

    /// Recognized keys for `style`, empty if unknown
    pub fn keys_for(&self, style: &str) -> &[String] {
        self.styles.get(style).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl Default for StyleCatalog {
    fn default() -> Self {
        let keys: Vec<String> = FACE_KEYS.iter().map(|k| k.to_string()).collect();
        let mut catalog = Self::empty();
        for name in BUILTIN_STYLES {
            catalog.insert(*name, keys.clone());
        }
        catalog
    }
}
