//! Converts markdown to html, one line at a time.
//!
//! Only ATX headings (`#`, `##`, ... followed by a space) are recognized.
//! Every other line is passed through with its trailing whitespace removed.

pub mod document;
pub mod error;
pub mod file;
pub mod heading;
#[cfg(feature = "wasm")]
mod wasm;

pub use document::{convert, Stats};
pub use error::{Error, Result};
pub use file::convert_file;
pub use heading::{convert_line, Heading, Line};
