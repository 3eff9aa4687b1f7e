use crate::classifier::ClassifiedFile;
use crate::error::{Error, OrganizeError};
use crate::progress::ProgressReporter;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, Default)]
pub struct ApplyOptions {
    pub dry_run: bool,
}

/// What happened to a single file during apply.
#[derive(Debug)]
pub enum CopyOutcome {
    Copied,
    Skipped,
    Failed(OrganizeError),
}

#[derive(Debug, Default)]
pub struct ApplyReport {
    pub total: usize,
    /// Copied files, or every file in a dry run.
    pub succeeded: usize,
    pub failures: Vec<(PathBuf, OrganizeError)>,
    pub dry_run: bool,
}

impl ApplyReport {
    pub fn failed(&self) -> usize {
        self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Copy `src` to `dst`, creating missing parent directories and overwriting
/// any existing destination.
pub fn copy_sample(src: &Path, dst: &Path) -> Result<u64, OrganizeError> {
    if let Some(parent) = dst.parent() {
        fs::create_dir_all(parent).map_err(|source| OrganizeError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut reader = File::open(src).map_err(|source| OrganizeError::Open {
        path: src.to_path_buf(),
        source,
    })?;
    let mut writer = File::create(dst).map_err(|source| OrganizeError::Create {
        path: dst.to_path_buf(),
        source,
    })?;

    io::copy(&mut reader, &mut writer).map_err(|source| OrganizeError::Copy {
        path: dst.to_path_buf(),
        source,
    })
}

/// Copy every file to its target path, one at a time. A failed copy is
/// recorded and the batch moves on.
pub fn apply_plan(
    files: &[ClassifiedFile],
    options: ApplyOptions,
    reporter: &dyn ProgressReporter,
) -> ApplyReport {
    let mut report = ApplyReport {
        total: files.len(),
        dry_run: options.dry_run,
        ..Default::default()
    };
    reporter.on_copy_start(files.len());

    for (index, file) in files.iter().enumerate() {
        let src = Path::new(&file.sample.original_path);
        let dst = Path::new(&file.target_path);

        reporter.on_copy_file_start(index, file);
        let outcome = if options.dry_run {
            CopyOutcome::Skipped
        } else {
            match copy_sample(src, dst) {
                Ok(_) => CopyOutcome::Copied,
                Err(err) => {
                    error!("Copy of {} failed: {}", src.display(), err);
                    CopyOutcome::Failed(err)
                }
            }
        };

        reporter.on_copy_file(index, file, &outcome);
        match outcome {
            CopyOutcome::Copied | CopyOutcome::Skipped => report.succeeded += 1,
            CopyOutcome::Failed(err) => report.failures.push((src.to_path_buf(), err)),
        }
    }

    if report.is_clean() {
        info!("Processed {} files", report.total);
    } else {
        warn!(
            "Processed {} files, {} failed",
            report.total,
            report.failed()
        );
    }
    reporter.on_copy_complete(&report);

    report
}

/// Remove the target directory and everything in it. A missing directory is
/// not an error.
pub fn clean_target(dir: &Path) -> Result<(), Error> {
    if !dir.exists() {
        return Ok(());
    }
    fs::remove_dir_all(dir)?;
    info!("Cleaned target directory {}", dir.display());
    Ok(())
}
