use crate::scanner::extension_of;

/// Clean up a file name for use as a copy destination.
///
/// The stem is lower-cased, spaces and underscores become dashes, runs of
/// dashes collapse to one and leading/trailing dashes are trimmed. The
/// extension is re-appended exactly as it was.
pub fn normalize_file_name(file_name: &str) -> String {
    let ext = extension_of(file_name);
    let stem = &file_name[..file_name.len() - ext.len()];

    let mut normalized = String::with_capacity(file_name.len());
    for ch in stem.to_lowercase().chars() {
        let ch = if ch == ' ' || ch == '_' { '-' } else { ch };
        if ch == '-' && normalized.ends_with('-') {
            continue;
        }
        normalized.push(ch);
    }

    let trimmed = normalized.trim_matches('-');
    format!("{trimmed}{ext}")
}
