use crate::classifier::ClassifiedFile;
use std::collections::HashMap;
use std::fmt;

/// Bucket label for files whose category has no subcategory table.
pub const NO_SUBCATEGORY_LABEL: &str = "(no subcategory)";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatsReport {
    pub total: usize,
    /// Descending count; equal counts ordered by name.
    pub categories: Vec<CategoryStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStats {
    pub name: String,
    pub count: usize,
    /// Share of the whole batch, 0..=100.
    pub percentage: f64,
    pub subcategories: Vec<SubcategoryStats>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubcategoryStats {
    pub name: String,
    pub count: usize,
    /// Share of the parent category, 0..=100.
    pub percentage: f64,
}

impl StatsReport {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn category(&self, name: &str) -> Option<&CategoryStats> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl CategoryStats {
    pub fn subcategory(&self, name: &str) -> Option<&SubcategoryStats> {
        self.subcategories.iter().find(|s| s.name == name)
    }
}

/// Group classified files by category and subcategory with counts and shares.
/// An empty batch yields an empty report.
pub fn summarize(files: &[ClassifiedFile]) -> StatsReport {
    if files.is_empty() {
        return StatsReport::default();
    }

    let mut groups: HashMap<&str, HashMap<&str, usize>> = HashMap::new();
    for file in files {
        let subcategory = if file.has_subcategory() {
            file.subcategory.as_str()
        } else {
            NO_SUBCATEGORY_LABEL
        };
        *groups
            .entry(file.category.as_str())
            .or_default()
            .entry(subcategory)
            .or_default() += 1;
    }

    let total = files.len();
    let mut categories: Vec<CategoryStats> = groups
        .into_iter()
        .map(|(name, subs)| {
            let count: usize = subs.values().sum();
            let mut subcategories: Vec<SubcategoryStats> = subs
                .into_iter()
                .map(|(sub_name, sub_count)| SubcategoryStats {
                    name: sub_name.to_string(),
                    count: sub_count,
                    percentage: percentage(sub_count, count),
                })
                .collect();
            subcategories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

            CategoryStats {
                name: name.to_string(),
                count,
                percentage: percentage(count, total),
                subcategories,
            }
        })
        .collect();
    categories.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));

    StatsReport { total, categories }
}

/// Files grouped by category, largest group first; input order is kept
/// within a group.
pub fn group_by_category(files: &[ClassifiedFile]) -> Vec<(&str, Vec<&ClassifiedFile>)> {
    let mut order: Vec<&str> = Vec::new();
    let mut groups: HashMap<&str, Vec<&ClassifiedFile>> = HashMap::new();
    for file in files {
        let bucket = groups.entry(file.category.as_str()).or_insert_with(|| {
            order.push(file.category.as_str());
            Vec::new()
        });
        bucket.push(file);
    }

    let mut grouped: Vec<(&str, Vec<&ClassifiedFile>)> = order
        .into_iter()
        .filter_map(|name| groups.remove(name).map(|files| (name, files)))
        .collect();
    grouped.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));
    grouped
}

fn percentage(count: usize, total: usize) -> f64 {
    count as f64 * 100.0 / total as f64
}

impl fmt::Display for StatsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }

        writeln!(f, "=== CATEGORIZATION STATISTICS ===")?;
        writeln!(f)?;
        writeln!(f, "{:<20} {:>10} {:>10}", "Category", "Count", "Percentage")?;
        writeln!(f, "{}", "-".repeat(50))?;
        for category in &self.categories {
            writeln!(
                f,
                "{:<20} {:>10} {:>9.1}%",
                category.name, category.count, category.percentage
            )?;
        }
        writeln!(f)?;

        writeln!(f, "=== SUBCATEGORY BREAKDOWN ===")?;
        writeln!(f)?;
        for category in &self.categories {
            writeln!(f, "{} ({} files)", category.name, category.count)?;
            writeln!(f, "  {:<30} {:>10} {:>10}", "Subcategory", "Count", "% of Cat")?;
            writeln!(f, "  {}", "-".repeat(50))?;
            for sub in &category.subcategories {
                writeln!(f, "  {:<30} {:>10} {:>9.1}%", sub.name, sub.count, sub.percentage)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
