use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

use super::args::CommonArgs;

pub mod check;
pub mod sync;

/// Validated default-file path and localized-files directory.
pub(crate) struct Inputs {
    pub default_resx: PathBuf,
    pub directory: PathBuf,
}

/// Resolve and validate the positional arguments shared by both commands.
/// The directory defaults to the default file's parent.
pub(crate) fn resolve_inputs(args: &CommonArgs) -> Result<Inputs> {
    let default_resx = args.default_resx.clone();
    if !default_resx.is_file() {
        bail!("default resx file not found: {}", default_resx.display());
    }

    let directory = match &args.directory {
        Some(dir) => dir.clone(),
        None => match default_resx.parent() {
            Some(parent) if parent != Path::new("") => parent.to_path_buf(),
            _ => PathBuf::from("."),
        },
    };
    if !directory.is_dir() {
        bail!("directory not found: {}", directory.display());
    }

    Ok(Inputs { default_resx, directory })
}
