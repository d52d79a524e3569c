//! Listing the live children of a directory

use crate::error::TreeError;
use crate::fs::{DirectoryEntry, Filesystem};
use crate::path::TreePath;

/// Open `path` and yield its children in native order, skipping deleted slots
/// and the "." / ".." references.
///
/// Each call is a fresh pass over the directory; the handle is closed when the
/// iterator is dropped.
pub fn enumerate_children<'fs, F: Filesystem>(
    fs: &'fs F,
    path: &TreePath,
) -> Result<impl Iterator<Item = DirectoryEntry> + use<'fs, F>, TreeError> {
    Ok(fs.read_dir(path)?.filter(DirectoryEntry::is_listable))
}
