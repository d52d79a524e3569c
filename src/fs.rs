//! Filesystem access used by the walker
//!
//! The walker only needs three primitives: list a directory, query metadata for
//! a path, and the entries themselves. `Filesystem` captures that surface so the
//! host filesystem and the in-memory test filesystem are interchangeable.

use std::fs;
use std::io;

use crate::error::TreeError;
use crate::path::TreePath;

/// Inode value marking a deleted or unused directory slot.
pub const UNUSED_INODE: u64 = 0;

/// A raw slot yielded by directory enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub inode: u64,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, inode: u64) -> Self {
        Self {
            name: name.into(),
            inode,
        }
    }

    /// Deleted slots and self/parent references are never listed.
    pub fn is_listable(&self) -> bool {
        self.inode != UNUSED_INODE && self.name != "." && self.name != ".."
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// Metadata for a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryStat {
    pub kind: EntryKind,
    pub size: u64,
}

impl EntryStat {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Directory listing and metadata primitives.
pub trait Filesystem {
    type Entries: Iterator<Item = DirectoryEntry>;

    /// Open a directory for one enumeration pass. The handle is released when
    /// the returned iterator is dropped.
    fn read_dir(&self, path: &TreePath) -> Result<Self::Entries, TreeError>;

    fn stat(&self, path: &TreePath) -> Result<EntryStat, TreeError>;
}

/// The host filesystem, through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostFs;

/// One open directory on the host filesystem.
pub struct HostEntries {
    inner: fs::ReadDir,
}

impl Iterator for HostEntries {
    type Item = DirectoryEntry;

    fn next(&mut self) -> Option<DirectoryEntry> {
        loop {
            match self.inner.next()? {
                Ok(entry) => {
                    let name = entry.file_name().to_string_lossy().into_owned();
                    return Some(DirectoryEntry::new(name, inode_of(&entry)));
                }
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable directory slot");
                }
            }
        }
    }
}

impl Filesystem for HostFs {
    type Entries = HostEntries;

    fn read_dir(&self, path: &TreePath) -> Result<HostEntries, TreeError> {
        fs::read_dir(path.as_std_path())
            .map(|inner| HostEntries { inner })
            .map_err(|e| {
                tracing::debug!(path = %path, error = %e, "read_dir failed");
                TreeError::Open(path.to_string())
            })
    }

    fn stat(&self, path: &TreePath) -> Result<EntryStat, TreeError> {
        // Symlinks are reported as plain files and never followed.
        let meta = fs::symlink_metadata(path.as_std_path()).map_err(|e| {
            tracing::debug!(path = %path, error = %e, "stat failed");
            match e.kind() {
                io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied => {
                    TreeError::Open(path.to_string())
                }
                _ => TreeError::Stat(path.to_string()),
            }
        })?;

        let kind = if meta.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(EntryStat {
            kind,
            size: meta.len(),
        })
    }
}

#[cfg(unix)]
fn inode_of(entry: &fs::DirEntry) -> u64 {
    use std::os::unix::fs::DirEntryExt;
    entry.ino()
}

#[cfg(not(unix))]
fn inode_of(_entry: &fs::DirEntry) -> u64 {
    // No inode numbers here; every slot std returns is live.
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_listable_entries() {
        assert!(DirectoryEntry::new("a.txt", 7).is_listable());
        assert!(!DirectoryEntry::new("a.txt", UNUSED_INODE).is_listable());
        assert!(!DirectoryEntry::new(".", 1).is_listable());
        assert!(!DirectoryEntry::new("..", 1).is_listable());
        assert!(DirectoryEntry::new("...", 1).is_listable());
    }

    #[test]
    fn test_host_stat_kinds_and_size() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("f.txt"), "hello").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        let root = TreePath::new(dir.path().to_string_lossy()).unwrap();
        let file = HostFs.stat(&root.join("f.txt").unwrap()).unwrap();
        assert_eq!(file.kind, EntryKind::File);
        assert_eq!(file.size, 5);

        let sub = HostFs.stat(&root.join("sub").unwrap()).unwrap();
        assert!(sub.is_dir());
    }

    #[test]
    fn test_host_missing_path_is_open_error() {
        let dir = TempDir::new().unwrap();
        let root = TreePath::new(dir.path().to_string_lossy()).unwrap();
        let missing = root.join("nope").unwrap();

        assert!(matches!(HostFs.stat(&missing), Err(TreeError::Open(_))));
        assert!(matches!(HostFs.read_dir(&missing), Err(TreeError::Open(_))));
    }

    #[test]
    fn test_host_read_dir_lists_children() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("one"), "").unwrap();
        std::fs::write(dir.path().join("two"), "").unwrap();

        let root = TreePath::new(dir.path().to_string_lossy()).unwrap();
        let mut names: Vec<String> = HostFs
            .read_dir(&root)
            .unwrap()
            .filter(DirectoryEntry::is_listable)
            .map(|e| e.name)
            .collect();
        names.sort();
        assert_eq!(names, vec!["one", "two"]);
    }
}
