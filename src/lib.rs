//! Resxkeys - key checker and synchronizer for .NET .resx resource files
//!
//! Resxkeys is a CLI tool and library for keeping localized `.resx` files in
//! sync with a default resource file. It verifies that every localized file
//! contains every key from the default file, and can copy missing `<data>`
//! entries verbatim into localized files without disturbing their formatting.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and commands)
//! - `report`: Console output formatting
//! - `resx`: Resource file handling (key extraction, block capture, editing)

pub mod cli;
pub mod report;
pub mod resx;
