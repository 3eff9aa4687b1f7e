use colored::*;
use sample_shifter_core::stats::group_by_category;
use sample_shifter_core::{ClassifiedFile, DiscoveredFile, StatsReport};

pub fn print_scan_results(samples: &[DiscoveredFile]) {
    println!("Found {} audio sample file(s):", samples.len());
    println!();
    for sample in samples {
        println!("  - {}", sample.original_path);
    }
}

pub fn print_detailed_file_list(files: &[ClassifiedFile]) {
    if files.is_empty() {
        return;
    }

    println!("{}", "=== DETAILED FILE LIST ===".bold());
    println!();
    for (category, group) in group_by_category(files) {
        println!("Category: {} ({} files)", category.cyan().bold(), group.len());
        for file in group {
            println!("  {}\n    -> {}", file.sample.original_path, file.target_path);
        }
        println!();
    }
}

/// Prints nothing for an empty report.
pub fn print_stats(report: &StatsReport) {
    if report.is_empty() {
        return;
    }
    print!("{}", report);
}
