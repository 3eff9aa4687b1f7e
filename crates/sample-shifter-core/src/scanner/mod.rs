mod walk;

pub use walk::scan_directory;

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Extensions recognised as audio samples, compared case-insensitively.
pub const AUDIO_EXTENSIONS: &[&str] = &[
    ".wav", ".mp3", ".flac", ".aif", ".aiff", ".ogg", ".m4a", ".wma", ".aac",
];

/// An audio file found on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DiscoveredFile {
    pub original_path: String,
    pub file_name: String,
    /// Lower-cased, leading dot included. Empty when the name has no dot.
    pub extension: String,
}

impl DiscoveredFile {
    /// None when the path has no file name or is not valid UTF-8; a lossy
    /// conversion would record a path that no longer names the file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let original_path = path.to_str()?.to_string();
        let file_name = path.file_name()?.to_str()?.to_string();
        if file_name.is_empty() {
            return None;
        }
        let extension = extension_of(&file_name).to_lowercase();

        Some(Self {
            original_path,
            file_name,
            extension,
        })
    }

    pub fn is_audio(&self) -> bool {
        is_audio_extension(&self.extension)
    }
}

/// Suffix of `file_name` starting at its last `.`, in its original case.
pub fn extension_of(file_name: &str) -> &str {
    file_name.rfind('.').map_or("", |idx| &file_name[idx..])
}

pub fn is_audio_extension(ext: &str) -> bool {
    let ext = ext.to_lowercase();
    AUDIO_EXTENSIONS.iter().any(|known| *known == ext)
}
