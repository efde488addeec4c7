//! Report formatting and printing utilities.
//!
//! Separate from command logic so resxkeys can be used as a library and so
//! tests can capture output through the writer-generic variants.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::cli::commands::check::{CheckReport, FileCheck};
use crate::cli::commands::sync::SyncReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print_no_localized_files(directory: &Path, pattern: &str) {
    println!(
        "No localized files found in {} matching {}",
        directory.display(),
        pattern
    );
}

/// Print check results: missing-key listings to stdout, parse errors to
/// stderr, and a one-line summary.
pub fn print_check(report: &CheckReport) {
    print_check_to(report, &mut io::stdout().lock(), &mut io::stderr().lock());
}

pub fn print_check_to<O: Write, E: Write>(report: &CheckReport, out: &mut O, err: &mut E) {
    let mut missing_files = 0usize;
    let mut parse_errors = 0usize;

    for file in &report.files {
        match file {
            FileCheck::Ok { .. } => {}
            FileCheck::Missing { path, keys } => {
                missing_files += 1;
                let _ = writeln!(
                    out,
                    "{} {}",
                    format!("MISSING ({}):", keys.len()).bold().red(),
                    path.display()
                );
                for key in keys {
                    let _ = writeln!(out, "  - {key}");
                }
            }
            FileCheck::ParseError { message, .. } => {
                parse_errors += 1;
                let _ = writeln!(err, "{} {}", "error:".bold().red(), message);
            }
        }
    }

    if missing_files == 0 && parse_errors == 0 {
        let _ = writeln!(
            out,
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "OK: All {} localized .resx files contain all {} keys.",
                report.files.len(),
                report.default_key_count
            )
            .green()
        );
    } else {
        let _ = writeln!(
            out,
            "\n{} {} of {} localized {} out of sync",
            FAILURE_MARK.red(),
            missing_files + parse_errors,
            report.files.len(),
            if report.files.len() == 1 { "file is" } else { "files are" }
        );
    }
}

/// Print sync results: per-file update lines and a final summary.
pub fn print_sync(report: &SyncReport) {
    print_sync_to(report, &mut io::stdout().lock());
}

pub fn print_sync_to<W: Write>(report: &SyncReport, out: &mut W) {
    for update in &report.updates {
        let label = format!("(+{} keys):", update.keys_added);
        if report.dry_run {
            let _ = writeln!(
                out,
                "{} {}",
                format!("WOULD UPDATE {label}").bold().yellow(),
                update.path.display()
            );
        } else {
            let _ = writeln!(
                out,
                "{} {}",
                format!("UPDATED {label}").bold().green(),
                update.path.display()
            );
        }
    }

    if report.updates.is_empty() {
        let _ = writeln!(out, "No changes needed.");
    } else if report.dry_run {
        let _ = writeln!(out, "Dry run. Would update {} file(s).", report.updates.len());
    } else {
        let _ = writeln!(out, "Done. Updated {} file(s).", report.updates.len());
    }
}
