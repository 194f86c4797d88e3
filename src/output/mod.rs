//! Local output — one file per article under the output directory.
//!
//! Path calculation is pure and lives in `paths`; `writer` is the only
//! place that touches the filesystem.

mod paths;
mod writer;

pub use paths::{article_file_name, sanitize_filename, sanitize_filename_with};
pub use writer::write_article;
