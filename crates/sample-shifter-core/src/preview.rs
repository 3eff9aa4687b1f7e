use crate::classifier::ClassifiedFile;
use crate::error::Error;
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the classified batch as a pretty JSON array, creating parent
/// directories as needed.
pub fn save_preview(path: &Path, files: &[ClassifiedFile]) -> Result<(), Error> {
    let data = serde_json::to_string_pretty(files)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, data)?;

    info!("Saved preview of {} files to {}", files.len(), path.display());
    Ok(())
}

/// Load a previously saved batch. The records are used as-is; nothing is
/// re-classified.
pub fn load_preview(path: &Path) -> Result<Vec<ClassifiedFile>, Error> {
    let data = fs::read_to_string(path)?;
    let files: Vec<ClassifiedFile> = serde_json::from_str(&data)?;
    info!("Loaded preview of {} files from {}", files.len(), path.display());
    Ok(files)
}
