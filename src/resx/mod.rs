//! Resource file handling.
//!
//! Two independent views of the same `.resx` file are kept deliberately
//! separate: `keys` parses the XML to answer "which keys exist", while
//! `blocks` scans the raw text to recover the exact source of each `<data>`
//! entry. Merging the two would trade away the formatting-preservation
//! guarantee that makes copied entries byte-for-byte identical.

pub mod blocks;
pub mod discover;
pub mod edit;
pub mod keys;

pub use blocks::{detect_newline, extract_blocks};
pub use discover::{Discovery, localized_siblings};
pub use edit::{ResxText, insert_blocks};
pub use keys::extract_keys;
