use std::io::Result;
use std::path::Path;
use tempfile::{Builder, NamedTempFile};

/// Creates a secure temporary file inside `dir`.
/// The file is automatically deleted when the `NamedTempFile` object is dropped.
pub fn create_temp_file_in(dir: &Path, prefix: &str, suffix: &str) -> Result<NamedTempFile> {
    Builder::new().prefix(prefix).suffix(suffix).tempfile_in(dir)
}
