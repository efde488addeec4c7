use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use super::resolve_inputs;
use crate::cli::args::SyncCommand;
use crate::cli::exit_status::ExitStatus;
use crate::report;
use crate::resx::{ResxText, extract_blocks, extract_keys, insert_blocks, localized_siblings};

#[derive(Debug)]
pub struct FileUpdate {
    pub path: PathBuf,
    pub keys_added: usize,
}

#[derive(Debug)]
pub struct SyncReport {
    pub dry_run: bool,
    pub updates: Vec<FileUpdate>,
}

struct PlannedWrite {
    path: PathBuf,
    resx: ResxText,
    keys_added: usize,
}

/// Copy missing `<data>` blocks from the default file into localized files.
///
/// Runs in two phases: every localized file is planned first (parse, diff,
/// resolve blocks, splice), and writes happen only after the whole run has
/// planned cleanly. Any fatal error therefore leaves every file untouched.
pub fn sync(cmd: SyncCommand) -> Result<ExitStatus> {
    let inputs = resolve_inputs(&cmd.args)?;

    let mut default_keys = extract_keys(&inputs.default_resx)?;
    if let Some(prefix) = &cmd.prefix {
        default_keys = default_keys
            .into_iter()
            .filter(|k| k.starts_with(prefix.as_str()))
            .collect::<BTreeSet<_>>();
    }

    let default_text = ResxText::read(&inputs.default_resx)?;
    let blocks = extract_blocks(&default_text.text);

    let discovery = localized_siblings(&inputs.default_resx, &inputs.directory)?;
    if discovery.files.is_empty() {
        report::print_no_localized_files(&inputs.directory, &discovery.pattern);
        return Ok(ExitStatus::Success);
    }

    let mut planned: Vec<PlannedWrite> = Vec::new();

    for path in &discovery.files {
        // Localization state cannot be partially trusted: a localized file
        // that fails to parse aborts the run before anything is written.
        let existing_keys = extract_keys(path)?;

        let missing: Vec<&String> = default_keys.difference(&existing_keys).collect();
        if missing.is_empty() {
            continue;
        }

        let mut to_insert: Vec<String> = Vec::with_capacity(missing.len());
        let mut without_block: Vec<&str> = Vec::new();
        for key in &missing {
            match blocks.get(key.as_str()) {
                Some(block) => to_insert.push(block.clone()),
                None => without_block.push(key.as_str()),
            }
        }

        if !without_block.is_empty() {
            let listing: String = without_block.iter().map(|k| format!("\n  - {k}")).collect();
            bail!(
                "{} is missing extractable <data> blocks for:{}",
                inputs.default_resx.display(),
                listing
            );
        }

        let mut target = ResxText::read(path)?;
        target.text = insert_blocks(&target.text, &to_insert)
            .with_context(|| format!("Malformed target file: {}", path.display()))?;

        planned.push(PlannedWrite {
            path: path.clone(),
            resx: target,
            keys_added: missing.len(),
        });
    }

    if !cmd.dry_run {
        for write in &planned {
            write.resx.write(&write.path)?;
        }
    }

    let sync_report = SyncReport {
        dry_run: cmd.dry_run,
        updates: planned
            .into_iter()
            .map(|w| FileUpdate { path: w.path, keys_added: w.keys_added })
            .collect(),
    };
    report::print_sync(&sync_report);

    Ok(ExitStatus::Success)
}
