use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

use sample_shifter_core::organize::{apply_plan, ApplyOptions};
use sample_shifter_core::preview::{load_preview, save_preview};
use sample_shifter_core::scanner::scan_directory;
use sample_shifter_core::{
    summarize, ClassifiedFile, Classifier, CopyOutcome, ProgressReporter, ShiftEngine,
    SilentReporter,
};

/// Layout:
///   root/
///     bass.flac
///     image.jpg              (ignored)
///     kick.wav
///     random_noise_test.xyz  (ignored)
///     readme.txt             (ignored)
///     snare.mp3
///     subdir/vocal.ogg
///     synth.AIF
fn create_sample_tree(root: &Path) {
    let subdir = root.join("subdir");
    fs::create_dir_all(&subdir).unwrap();

    for name in [
        "bass.flac",
        "image.jpg",
        "kick.wav",
        "random_noise_test.xyz",
        "readme.txt",
        "snare.mp3",
        "synth.AIF",
    ] {
        fs::write(root.join(name), name.as_bytes()).unwrap();
    }
    fs::write(subdir.join("vocal.ogg"), b"vocal").unwrap();
}

fn file_names(paths: impl Iterator<Item = String>) -> Vec<String> {
    paths
        .map(|p| {
            PathBuf::from(p)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_scan_finds_only_audio_files() {
    let tmp = tempdir().unwrap();
    create_sample_tree(tmp.path());

    let samples = scan_directory(tmp.path(), &SilentReporter).unwrap();
    let names = file_names(samples.iter().map(|s| s.original_path.clone()));
    assert_eq!(
        names,
        vec!["bass.flac", "kick.wav", "snare.mp3", "vocal.ogg", "synth.AIF"]
    );

    let synth = samples.iter().find(|s| s.file_name == "synth.AIF").unwrap();
    assert_eq!(synth.extension, ".aif");
    assert!(samples.iter().all(|s| !s.original_path.is_empty()));
}

#[test]
fn test_scan_missing_directory_fails() {
    let tmp = tempdir().unwrap();
    assert!(scan_directory(&tmp.path().join("missing"), &SilentReporter).is_err());
}

#[test]
fn test_scan_empty_directory() {
    let tmp = tempdir().unwrap();
    let samples = scan_directory(tmp.path(), &SilentReporter).unwrap();
    assert!(samples.is_empty());
}

#[test]
fn test_plan_classifies_scanned_files() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    create_sample_tree(&source);
    let target = tmp.path().join("target");

    let engine = ShiftEngine::new(Classifier::default());
    let plan = engine.plan(&source, &target, false, &SilentReporter).unwrap();
    assert_eq!(plan.files.len(), 5);

    let kick = plan.files.iter().find(|f| f.sample.file_name == "kick.wav").unwrap();
    assert_eq!(kick.category, "drums");
    assert_eq!(
        PathBuf::from(&kick.target_path),
        target.join("drums").join("kick").join("kick.wav")
    );

    let report = summarize(&plan.files);
    assert_eq!(report.total, 5);
    let sum: f64 = report.categories.iter().map(|c| c.percentage).sum();
    assert!((sum - 100.0).abs() < 1e-6);
}

#[test]
fn test_preview_round_trip_then_apply() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    create_sample_tree(&source);
    let target = tmp.path().join("target");
    let preview_path = tmp.path().join("previews").join("plan.json");

    let engine = ShiftEngine::new(Classifier::default());
    let plan = engine.plan(&source, &target, true, &SilentReporter).unwrap();
    save_preview(&preview_path, &plan.files).unwrap();

    let loaded = load_preview(&preview_path).unwrap();
    assert_eq!(loaded, plan.files);

    let report = apply_plan(&loaded, ApplyOptions::default(), &SilentReporter);
    assert_eq!(report.total, 5);
    assert_eq!(report.succeeded, 5);
    assert!(report.is_clean());

    for file in &loaded {
        let copied = fs::read(&file.target_path).unwrap();
        let original = fs::read(&file.sample.original_path).unwrap();
        assert_eq!(copied, original);
    }
}

#[test]
fn test_apply_uses_preview_paths_verbatim() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    create_sample_tree(&source);

    let engine = ShiftEngine::new(Classifier::default());
    let mut plan = engine
        .plan(&source, &tmp.path().join("target"), false, &SilentReporter)
        .unwrap();

    let custom = tmp.path().join("elsewhere").join("kick_renamed.wav");
    let kick = plan.files.iter_mut().find(|f| f.sample.file_name == "kick.wav").unwrap();
    kick.target_path = custom.to_string_lossy().into_owned();

    let report = apply_plan(&plan.files, ApplyOptions::default(), &SilentReporter);
    assert!(report.is_clean());
    assert_eq!(fs::read(&custom).unwrap(), b"kick.wav");
}

#[test]
fn test_dry_run_copies_nothing() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    create_sample_tree(&source);
    let target = tmp.path().join("target");

    let engine = ShiftEngine::new(Classifier::default());
    let plan = engine.plan(&source, &target, false, &SilentReporter).unwrap();
    let report = apply_plan(&plan.files, ApplyOptions { dry_run: true }, &SilentReporter);

    assert!(report.dry_run);
    assert_eq!(report.succeeded, plan.files.len());
    assert!(!target.exists());
}

#[test]
fn test_copy_failure_does_not_stop_batch() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    create_sample_tree(&source);
    let target = tmp.path().join("target");

    let engine = ShiftEngine::new(Classifier::default());
    let plan = engine.plan(&source, &target, false, &SilentReporter).unwrap();
    fs::remove_file(source.join("bass.flac")).unwrap();

    let report = apply_plan(&plan.files, ApplyOptions::default(), &SilentReporter);
    assert_eq!(report.total, 5);
    assert_eq!(report.failed(), 1);
    assert_eq!(report.succeeded, 4);
    assert!(report.failures[0].0.ends_with("bass.flac"));
    assert!(target.join("drums").join("kick").join("kick.wav").exists());
}

#[derive(Default)]
struct RecordingReporter {
    events: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn on_copy_file_start(&self, index: usize, file: &ClassifiedFile) {
        self.events
            .borrow_mut()
            .push(format!("start {index} {}", file.sample.file_name));
    }

    fn on_copy_file(&self, index: usize, file: &ClassifiedFile, outcome: &CopyOutcome) {
        let status = match outcome {
            CopyOutcome::Copied => "copied",
            CopyOutcome::Skipped => "skipped",
            CopyOutcome::Failed(_) => "failed",
        };
        self.events
            .borrow_mut()
            .push(format!("{status} {index} {}", file.sample.file_name));
    }
}

#[test]
fn test_copy_start_is_reported_before_outcome() {
    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    create_sample_tree(&source);

    let engine = ShiftEngine::new(Classifier::default());
    let plan = engine
        .plan(&source, &tmp.path().join("target"), false, &SilentReporter)
        .unwrap();
    fs::remove_file(source.join("bass.flac")).unwrap();

    let reporter = RecordingReporter::default();
    apply_plan(&plan.files, ApplyOptions::default(), &reporter);

    let events = reporter.events.into_inner();
    assert_eq!(events.len(), plan.files.len() * 2);
    for (index, pair) in events.chunks(2).enumerate() {
        let name = &plan.files[index].sample.file_name;
        assert_eq!(pair[0], format!("start {index} {name}"));
        let expected = if name == "bass.flac" { "failed" } else { "copied" };
        assert_eq!(pair[1], format!("{expected} {index} {name}"));
    }
}

#[cfg(target_os = "linux")]
#[test]
fn test_non_utf8_names_are_left_out_of_the_plan() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempdir().unwrap();
    let source = tmp.path().join("source");
    fs::create_dir_all(&source).unwrap();
    fs::write(source.join("kick.wav"), b"kick").unwrap();
    fs::write(source.join(OsStr::from_bytes(b"Kick_Caf\xe9.wav")), b"cafe").unwrap();
    let target = tmp.path().join("target");

    let engine = ShiftEngine::new(Classifier::default());
    let plan = engine.plan(&source, &target, false, &SilentReporter).unwrap();
    let names: Vec<&str> = plan.files.iter().map(|f| f.sample.file_name.as_str()).collect();
    assert_eq!(names, vec!["kick.wav"]);

    let report = apply_plan(&plan.files, ApplyOptions::default(), &SilentReporter);
    assert!(report.is_clean());
    assert_eq!(report.succeeded, 1);
}
