mod defaults;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Category name assigned when no keyword matches. Also used as the
/// subcategory of a matched category whose subcategory table found nothing.
pub const UNCATEGORIZED: &str = "uncategorized";

/// The full set of categories active for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub categories: Vec<CategoryDefinition>,
}

/// One category: display name, priority rank (lower is checked first), the
/// keywords that select it and an optional subcategory keyword table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub name: String,
    pub priority: i32,
    pub keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategories: Option<BTreeMap<String, Vec<String>>>,
}

impl CategoryDefinition {
    pub fn new(name: &str, priority: i32, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            priority,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            subcategories: None,
        }
    }

    pub fn with_subcategory(mut self, name: &str, keywords: &[&str]) -> Self {
        self.subcategories
            .get_or_insert_with(BTreeMap::new)
            .insert(name.to_string(), keywords.iter().map(|k| k.to_string()).collect());
        self
    }
}

impl CategoryConfig {
    /// The compiled-in category table.
    pub fn default_config() -> Self {
        defaults::default_categories()
    }

    /// Checks the structural rules, reporting the first failure in category order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }

        let mut seen_names = HashSet::new();
        for category in &self.categories {
            if category.name.is_empty() {
                return Err(ConfigError::EmptyName);
            }
            if !seen_names.insert(category.name.as_str()) {
                return Err(ConfigError::DuplicateName(category.name.clone()));
            }
            if category.keywords.is_empty() {
                return Err(ConfigError::NoKeywords(category.name.clone()));
            }
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write the configuration as pretty JSON, e.g. to dump the defaults for editing.
    pub fn save(&self, path: &Path) -> Result<(), crate::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    pub fn keyword_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| {
                c.keywords.len()
                    + c.subcategories
                        .as_ref()
                        .map_or(0, |subs| subs.values().map(Vec::len).sum())
            })
            .sum()
    }
}

/// Load the category configuration. `None` (or an empty path) yields the
/// built-in defaults; a supplied file replaces them entirely.
pub fn load_category_config(path: Option<&Path>) -> Result<CategoryConfig, ConfigError> {
    let path = match path {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => {
            debug!("Using built-in category configuration");
            return Ok(CategoryConfig::default_config());
        }
    };

    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config: CategoryConfig =
        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    config.validate()?;

    info!(
        "Loaded {} categories from {}",
        config.categories.len(),
        path.display()
    );
    Ok(config)
}
