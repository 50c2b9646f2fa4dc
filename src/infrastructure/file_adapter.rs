use crate::domain::error::{ConvertError, ConvertResult};
use std::fs;
use std::path::Path;

/// Reads the whole export as UTF-8. Non-UTF-8 input is reported as a read
/// error rather than decoded lossily.
pub fn read_export_file(path: &Path) -> ConvertResult<String> {
    fs::read_to_string(path).map_err(|source| ConvertError::InputRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the rendered document, truncating any existing file.
pub fn write_bookmarks_file(path: &Path, contents: &str) -> ConvertResult<()> {
    fs::write(path, contents.as_bytes()).map_err(|source| ConvertError::OutputWrite {
        path: path.to_path_buf(),
        source,
    })
}
