use crate::classifier::ClassifiedFile;
use crate::organize::{ApplyReport, CopyOutcome};

/// Trait for reporting pipeline progress.
///
/// The CLI implements it with indicatif and console lines.
/// All methods have default no-op implementations.
pub trait ProgressReporter {
    fn on_scan_start(&self, _root: &str) {}
    fn on_scan_progress(&self, _files_found: usize, _current_path: &str) {}
    fn on_scan_complete(&self, _total_files: usize, _duration_secs: f64) {}
    fn on_classify_complete(&self, _total_files: usize, _duration_secs: f64) {}
    fn on_copy_start(&self, _total_files: usize) {}
    /// Called before the file is copied (or skipped in a dry run).
    fn on_copy_file_start(&self, _index: usize, _file: &ClassifiedFile) {}
    fn on_copy_file(&self, _index: usize, _file: &ClassifiedFile, _outcome: &CopyOutcome) {}
    fn on_copy_complete(&self, _report: &ApplyReport) {}
}

/// No-op progress reporter for silent operation.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {}
