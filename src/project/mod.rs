//! Project loading: schema text and files to resolved models.
//!
//! Glues the pipeline together (parse, lower, resolve) and turns byte
//! ranges into line/column positions for reporting.

mod error;
pub mod file_loader;

pub use error::{ProjectError, SyntaxDiagnostic};
pub use file_loader::{MODEL_EXT, load_file, load_files, load_str, load_str_named};
