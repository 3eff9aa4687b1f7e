use crate::classifier::{ClassifiedFile, Classifier};
use crate::error::Error;
use crate::progress::ProgressReporter;
use crate::scanner;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Scan-then-classify pipeline shared by `preview` and `apply`.
pub struct ShiftEngine {
    classifier: Classifier,
}

#[derive(Debug)]
pub struct PlanResult {
    pub scan_duration: Duration,
    pub classify_duration: Duration,
    pub files: Vec<ClassifiedFile>,
}

impl ShiftEngine {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// 1. Walk `source` for audio files
    /// 2. Classify the whole batch against `target`
    pub fn plan(
        &self,
        source: &Path,
        target: &Path,
        normalize: bool,
        reporter: &dyn ProgressReporter,
    ) -> Result<PlanResult, Error> {
        let scan_start = Instant::now();
        let samples = scanner::scan_directory(source, reporter)?;
        let scan_duration = scan_start.elapsed();

        info!("Classifying {} files...", samples.len());
        let classify_start = Instant::now();
        let files = self.classifier.classify_batch(&samples, target, normalize);
        let classify_duration = classify_start.elapsed();
        debug!(
            "Classification completed in {:.3}s",
            classify_duration.as_secs_f64()
        );
        reporter.on_classify_complete(files.len(), classify_duration.as_secs_f64());

        Ok(PlanResult {
            scan_duration,
            classify_duration,
            files,
        })
    }
}
