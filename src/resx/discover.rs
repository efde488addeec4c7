//! Localized sibling discovery.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;

/// Localized files found next to the default file, plus the human-readable
/// pattern they were matched against (for the "nothing found" message).
#[derive(Debug)]
pub struct Discovery {
    pub pattern: String,
    pub files: Vec<PathBuf>,
}

/// Find localized siblings of `default_resx` inside `directory`: files
/// matching `<stem>.*<extension>`, excluding the default file itself,
/// sorted lexicographically for a deterministic processing order.
pub fn localized_siblings(default_resx: &Path, directory: &Path) -> Result<Discovery> {
    let stem = default_resx
        .file_stem()
        .and_then(|s| s.to_str())
        .context("default resx file has no usable file name")?;
    let extension = match default_resx.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!(".{ext}"),
        None => String::new(),
    };
    let default_name = default_resx.file_name().and_then(|n| n.to_str()).unwrap_or(stem);

    let pattern_text = format!("{stem}.*{extension}");
    let pattern = Pattern::new(&format!(
        "{}.*{}",
        Pattern::escape(stem),
        Pattern::escape(&extension)
    ))
    .with_context(|| format!("Invalid file pattern: {pattern_text}"))?;

    let entries = std::fs::read_dir(directory)
        .with_context(|| format!("Failed to read directory: {}", directory.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", directory.display()))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name != default_name && pattern.matches(name) {
            files.push(path);
        }
    }

    files.sort();

    Ok(Discovery { pattern: pattern_text, files })
}
