//! Text-based `<data>` block capture from the default resource file.
//!
//! Blocks are recovered from the raw source text rather than re-serialized
//! through an XML tree, so copied entries keep their whitespace, attribute
//! order, and embedded comments byte-for-byte.

use std::collections::HashMap;

/// Detect the file's newline convention: `\r\n` if it appears anywhere,
/// otherwise `\n`. Inserted text follows the same convention so files never
/// end up with mixed terminators.
pub fn detect_newline(text: &str) -> &'static str {
    if text.contains("\r\n") { "\r\n" } else { "\n" }
}

/// Extract exact `<data ...>...</data>` blocks from the default file text,
/// keyed by the `name` attribute.
///
/// Only the common layout is handled: the opening tag and its `name="..."`
/// attribute on a single line, with the entry closed on a later line. Entries
/// whose opening tag spans multiple lines or whose attribute uses single
/// quotes are not captured; such a key only becomes an error if it turns out
/// to be missing from some localized file.
pub fn extract_blocks(text: &str) -> HashMap<String, String> {
    let nl = detect_newline(text);
    let mut blocks = HashMap::new();

    let mut capture: Option<(String, String)> = None;

    for line in text.split_inclusive('\n') {
        match capture.as_mut() {
            None => {
                if line.contains("<data")
                    && let Some(key) = name_attribute(line)
                {
                    capture = Some((key.to_string(), line.to_string()));
                }
            }
            Some((_, captured)) => {
                captured.push_str(line);
                if line.contains("</data>") {
                    let (key, mut block) = capture.take().unwrap();
                    if !block.ends_with(nl) {
                        block.push_str(nl);
                    }
                    blocks.insert(key, block);
                }
            }
        }
    }

    blocks
}

/// The value of the first `name="..."` attribute on the line, if any.
fn name_attribute(line: &str) -> Option<&str> {
    let start = line.find("name=\"")? + "name=\"".len();
    let end = line[start..].find('"')?;
    Some(&line[start..start + end])
}
