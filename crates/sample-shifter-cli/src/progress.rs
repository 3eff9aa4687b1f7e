use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use sample_shifter_core::organize::{ApplyReport, CopyOutcome};
use sample_shifter_core::{ClassifiedFile, ProgressReporter};
use std::sync::Mutex;
use std::time::Duration;

/// CLI progress reporter.
///
/// - Scan phase: spinner (total unknown upfront)
/// - Copy phase: one block of lines per file
pub struct CliReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl CliReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn set_bar(&self, pb: ProgressBar) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(old) = guard.take() {
                old.finish_and_clear();
            }
            *guard = Some(pb);
        }
    }

    fn finish_bar(&self) {
        if let Ok(mut guard) = self.bar.lock() {
            if let Some(pb) = guard.take() {
                pb.finish_and_clear();
            }
        }
    }
}

impl ProgressReporter for CliReporter {
    fn on_scan_start(&self, root: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
        );
        pb.set_message(format!("Scanning {}...", root));
        pb.enable_steady_tick(Duration::from_millis(80));
        self.set_bar(pb);
    }

    fn on_scan_progress(&self, files_found: usize, _current_path: &str) {
        if let Ok(guard) = self.bar.lock() {
            if let Some(pb) = guard.as_ref() {
                pb.set_message(format!("Scanning... {} audio files found", files_found));
            }
        }
    }

    fn on_scan_complete(&self, total_files: usize, duration_secs: f64) {
        self.finish_bar();
        eprintln!(
            "  {} Scan complete: {} audio files in {:.2}s",
            "✓".green(),
            total_files,
            duration_secs
        );
    }

    fn on_copy_file_start(&self, _index: usize, file: &ClassifiedFile) {
        println!(
            "Copying: {}\n  -> {}",
            file.sample.original_path, file.target_path
        );
    }

    fn on_copy_file(&self, _index: usize, _file: &ClassifiedFile, outcome: &CopyOutcome) {
        match outcome {
            CopyOutcome::Copied => println!("  {}", "✓ Success".green()),
            CopyOutcome::Skipped => println!("  {}", "(skipped - dry run)".dimmed()),
            CopyOutcome::Failed(err) => println!("  {} {}", "ERROR:".red().bold(), err),
        }
    }

    fn on_copy_complete(&self, report: &ApplyReport) {
        println!();
        println!("{}", "=== Summary ===".bold());
        println!("Total files: {}", report.total);
        println!("Successful: {}", report.succeeded.to_string().green());
        if !report.is_clean() {
            println!("Errors: {}", report.failed().to_string().red());
        }
        if report.dry_run {
            println!();
            println!("This was a dry run. Use without --dry-run to actually copy files.");
        }
    }
}
