//! Filename keyword classification.
//!
//! A file is assigned to the first category, in ascending priority rank,
//! with any keyword contained in its lower-cased name (with or without the
//! extension). Within that category the subcategory whose matching keyword
//! is longest wins. Equal lengths go to the lexically smaller keyword, then
//! to the subcategory whose name sorts first.

mod normalize;

pub use normalize::normalize_file_name;

use crate::categories::{CategoryConfig, UNCATEGORIZED};
use crate::scanner::DiscoveredFile;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Classification result for one discovered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClassifiedFile {
    pub sample: DiscoveredFile,
    pub category: String,
    /// Empty when the category has no subcategory table.
    pub subcategory: String,
    pub target_path: String,
}

impl ClassifiedFile {
    pub fn has_subcategory(&self) -> bool {
        !self.subcategory.is_empty()
    }
}

#[derive(Debug, Clone)]
struct CompiledCategory {
    name: String,
    keywords: Vec<String>,
    /// Ordered by subcategory name.
    subcategories: Option<Vec<(String, Vec<String>)>>,
}

/// Immutable, priority-ordered view of a [`CategoryConfig`].
#[derive(Debug, Clone)]
pub struct Classifier {
    categories: Vec<CompiledCategory>,
}

/// Both lower-cased forms of a file name that keywords are matched against.
struct MatchTarget {
    name: String,
    stem: String,
}

impl MatchTarget {
    fn new(file: &DiscoveredFile) -> Self {
        let name = file.file_name.to_lowercase();
        let ext = file.extension.to_lowercase();
        let stem = name.strip_suffix(ext.as_str()).unwrap_or(&name).to_string();
        Self { name, stem }
    }

    fn contains(&self, keyword: &str) -> bool {
        self.name.contains(keyword) || self.stem.contains(keyword)
    }
}

impl Classifier {
    pub fn new(config: &CategoryConfig) -> Self {
        let mut definitions: Vec<_> = config.categories.iter().collect();
        // Stable: equal ranks keep their configuration order.
        definitions.sort_by_key(|def| def.priority);

        let categories = definitions
            .into_iter()
            .map(|def| CompiledCategory {
                name: def.name.clone(),
                keywords: lowercase_all(&def.keywords),
                subcategories: def.subcategories.as_ref().map(|table| {
                    table
                        .iter()
                        .map(|(name, keywords)| (name.clone(), lowercase_all(keywords)))
                        .collect()
                }),
            })
            .collect();

        Self { categories }
    }

    /// Category names in the order they are checked.
    pub fn priority_order(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name.as_str()).collect()
    }

    /// Classify one file. Never fails: unmatched files are `uncategorized`.
    pub fn classify(
        &self,
        file: &DiscoveredFile,
        target_root: &Path,
        normalize: bool,
    ) -> ClassifiedFile {
        let target = MatchTarget::new(file);

        let (category, subcategory) = match self.determine_category(&target) {
            Some(matched) => (
                matched.name.clone(),
                determine_subcategory(matched, &target),
            ),
            None => (UNCATEGORIZED.to_string(), String::new()),
        };

        let final_name = if normalize {
            normalize_file_name(&file.file_name)
        } else {
            file.file_name.clone()
        };

        let mut target_path = PathBuf::from(target_root);
        target_path.push(&category);
        if !subcategory.is_empty() {
            target_path.push(&subcategory);
        }
        target_path.push(final_name);

        debug!(
            "{} -> {}/{}",
            file.file_name,
            category,
            if subcategory.is_empty() { "-" } else { subcategory.as_str() }
        );

        ClassifiedFile {
            sample: file.clone(),
            category,
            subcategory,
            target_path: target_path.to_string_lossy().into_owned(),
        }
    }

    /// Classify every file independently, preserving input order.
    pub fn classify_batch(
        &self,
        files: &[DiscoveredFile],
        target_root: &Path,
        normalize: bool,
    ) -> Vec<ClassifiedFile> {
        files
            .iter()
            .map(|file| self.classify(file, target_root, normalize))
            .collect()
    }

    fn determine_category(&self, target: &MatchTarget) -> Option<&CompiledCategory> {
        self.categories
            .iter()
            .find(|category| category.keywords.iter().any(|kw| target.contains(kw)))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&CategoryConfig::default_config())
    }
}

fn determine_subcategory(category: &CompiledCategory, target: &MatchTarget) -> String {
    let Some(table) = &category.subcategories else {
        return String::new();
    };

    let mut best: Option<(&str, &str)> = None;
    for (name, keywords) in table {
        for keyword in keywords.iter().filter(|kw| target.contains(kw)) {
            let better = match best {
                None => true,
                Some((best_keyword, _)) => {
                    keyword.len() > best_keyword.len()
                        || (keyword.len() == best_keyword.len() && keyword.as_str() < best_keyword)
                }
            };
            if better {
                best = Some((keyword.as_str(), name.as_str()));
            }
        }
    }

    best.map_or_else(|| UNCATEGORIZED.to_string(), |(_, name)| name.to_string())
}

fn lowercase_all(keywords: &[String]) -> Vec<String> {
    keywords.iter().map(|kw| kw.to_lowercase()).collect()
}
