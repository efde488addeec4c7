//! Key-set extraction from resource files.

use std::collections::BTreeSet;
use std::path::Path;

use anyhow::{Result, bail};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::edit::ResxText;

/// Extract the set of `name` attributes from the `<data>` elements that are
/// direct children of the document root.
///
/// Empty names are skipped; duplicate names collapse since only presence
/// matters. Malformed XML fails with the file path and the parser's message.
pub fn extract_keys(path: &Path) -> Result<BTreeSet<String>> {
    let resx = ResxText::read(path)?;

    let mut reader = Reader::from_str(&resx.text);
    let mut keys = BTreeSet::new();
    let mut depth = 0usize;
    let mut root_seen = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                if depth == 0 {
                    if root_seen {
                        bail!("XML parse error in {}: junk after document element", path.display());
                    }
                    root_seen = true;
                }
                if depth == 1 && e.name().as_ref() == b"data" {
                    match data_name(&e) {
                        Ok(Some(name)) if !name.is_empty() => {
                            keys.insert(name);
                        }
                        Ok(_) => {}
                        Err(err) => bail!("XML parse error in {}: {}", path.display(), err),
                    }
                }
                depth += 1;
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    if root_seen {
                        bail!("XML parse error in {}: junk after document element", path.display());
                    }
                    root_seen = true;
                }
                if depth == 1 && e.name().as_ref() == b"data" {
                    match data_name(&e) {
                        Ok(Some(name)) if !name.is_empty() => {
                            keys.insert(name);
                        }
                        Ok(_) => {}
                        Err(err) => bail!("XML parse error in {}: {}", path.display(), err),
                    }
                }
            }
            Ok(Event::End(_)) => {
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => bail!("XML parse error in {}: {}", path.display(), e),
        }
    }

    Ok(keys)
}

/// The element's `name` attribute, if present.
///
/// Drains the whole attribute iterator so its well-formedness checks run:
/// a duplicated attribute or an unquoted value is a parse error even when
/// a usable `name` appears first.
fn data_name(element: &BytesStart<'_>) -> Result<Option<String>> {
    let mut name = None;
    for attr in element.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"name" {
            name = Some(attr.unescape_value()?.into_owned());
        }
    }
    Ok(name)
}
