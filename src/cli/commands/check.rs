use std::path::PathBuf;

use anyhow::Result;

use super::resolve_inputs;
use crate::cli::args::CheckCommand;
use crate::cli::exit_status::ExitStatus;
use crate::report;
use crate::resx::{extract_keys, localized_siblings};

/// Outcome of checking one localized file.
#[derive(Debug)]
pub enum FileCheck {
    Ok { path: PathBuf },
    Missing { path: PathBuf, keys: Vec<String> },
    ParseError { path: PathBuf, message: String },
}

#[derive(Debug)]
pub struct CheckReport {
    pub default_key_count: usize,
    pub files: Vec<FileCheck>,
}

impl CheckReport {
    pub fn has_failures(&self) -> bool {
        self.files
            .iter()
            .any(|f| matches!(f, FileCheck::Missing { .. } | FileCheck::ParseError { .. }))
    }
}

/// Verify that every localized file's key set is a superset of the default's.
///
/// A localized file that fails to parse is reported and skipped; the run
/// still continues so one broken file does not hide results for the rest.
pub fn check(cmd: CheckCommand) -> Result<ExitStatus> {
    let inputs = resolve_inputs(&cmd.args)?;

    // An unparsable default file is fatal: there is no reference key set.
    let default_keys = extract_keys(&inputs.default_resx)?;

    let discovery = localized_siblings(&inputs.default_resx, &inputs.directory)?;
    if discovery.files.is_empty() {
        report::print_no_localized_files(&inputs.directory, &discovery.pattern);
        return Ok(ExitStatus::Success);
    }

    let mut files = Vec::with_capacity(discovery.files.len());
    for path in discovery.files {
        match extract_keys(&path) {
            Err(err) => files.push(FileCheck::ParseError { path, message: format!("{err:#}") }),
            Ok(keys) => {
                // BTreeSet difference iterates in sorted order
                let missing: Vec<String> = default_keys.difference(&keys).cloned().collect();
                if missing.is_empty() {
                    files.push(FileCheck::Ok { path });
                } else {
                    files.push(FileCheck::Missing { path, keys: missing });
                }
            }
        }
    }

    let check_report = CheckReport { default_key_count: default_keys.len(), files };
    report::print_check(&check_report);

    Ok(if check_report.has_failures() {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    })
}
