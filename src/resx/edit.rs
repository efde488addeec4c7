//! BOM-aware file access and format-preserving insertion.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};

use super::blocks::detect_newline;

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Decoded text of a resource file plus whether it carried a UTF-8 BOM.
///
/// The BOM is stripped on read and re-prepended on write iff it was present,
/// so a round trip never changes a file's encoding marker.
#[derive(Debug, Clone)]
pub struct ResxText {
    pub text: String,
    pub has_bom: bool,
}

impl ResxText {
    pub fn read(path: &Path) -> Result<Self> {
        let raw = fs::read(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let has_bom = raw.starts_with(UTF8_BOM);
        let body = if has_bom { &raw[UTF8_BOM.len()..] } else { &raw[..] };
        let text = String::from_utf8(body.to_vec())
            .with_context(|| format!("File is not valid UTF-8: {}", path.display()))?;

        Ok(Self { text, has_bom })
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        let mut out = Vec::with_capacity(self.text.len() + UTF8_BOM.len());
        if self.has_bom {
            out.extend_from_slice(UTF8_BOM);
        }
        out.extend_from_slice(self.text.as_bytes());

        fs::write(path, out)
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }
}

/// Splice `blocks` into `target` just before the last `</root>` tag.
///
/// Purely textual: nothing outside the inserted span is touched. A blank
/// line is added before the insertion unless one is already there.
pub fn insert_blocks(target: &str, blocks: &[String]) -> Result<String> {
    if blocks.is_empty() {
        return Ok(target.to_string());
    }

    let nl = detect_newline(target);
    let Some(idx) = target.rfind("</root>") else {
        bail!("file does not contain a closing </root> tag");
    };

    let head = &target[..idx];
    let blank = format!("{nl}{nl}");
    let separator = if head.ends_with(&blank) { "" } else { nl };
    let insertion: String = blocks.concat();

    Ok(format!("{head}{separator}{insertion}{}", &target[idx..]))
}
