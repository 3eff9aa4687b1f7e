use super::DiscoveredFile;
use crate::error::Error;
use crate::progress::ProgressReporter;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// Recursive directory traversal. Collects every non-directory entry whose
/// extension is a known audio extension. Entries are visited in file-name
/// order so repeated scans of the same tree return the same sequence.
pub fn scan_directory(
    root: &Path,
    reporter: &dyn ProgressReporter,
) -> Result<Vec<DiscoveredFile>, Error> {
    let root_display = root.display().to_string();
    info!("Scanning {}", root_display);
    reporter.on_scan_start(&root_display);

    let start = Instant::now();
    let mut samples = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            continue;
        }

        if entry.path().to_str().is_none() {
            warn!(
                "Skipping {}: path is not valid UTF-8",
                entry.path().to_string_lossy()
            );
            continue;
        }

        let Some(sample) = DiscoveredFile::from_path(entry.path()) else {
            continue;
        };
        if !sample.is_audio() {
            debug!("Skipping non-audio file {}", entry.path().display());
            continue;
        }

        samples.push(sample);
        reporter.on_scan_progress(samples.len(), &samples[samples.len() - 1].original_path);
    }

    let duration = start.elapsed();
    debug!(
        "Scan of {} completed in {:.2}s, {} audio files",
        root_display,
        duration.as_secs_f64(),
        samples.len()
    );
    reporter.on_scan_complete(samples.len(), duration.as_secs_f64());

    Ok(samples)
}
