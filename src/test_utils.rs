//! Test utilities: an ordered in-memory filesystem and temporary directories.
//!
//! This module is only compiled for tests and benchmarks.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::error::TreeError;
use crate::fs::{DirectoryEntry, EntryKind, EntryStat, Filesystem, UNUSED_INODE};
use crate::path::TreePath;

#[derive(Debug)]
enum Node {
    File { size: u64 },
    Dir { entries: Vec<DirectoryEntry> },
}

/// In-memory filesystem that enumerates entries in insertion order.
///
/// Every listing starts with "." and ".." slots, like a real directory file.
/// Deleted slots and unopenable or unstat-able paths can be injected to drive
/// error handling deterministically.
#[derive(Debug)]
pub struct MemFs {
    nodes: HashMap<String, Node>,
    next_inode: u64,
    deny_open: HashSet<String>,
    deny_stat: HashSet<String>,
}

impl MemFs {
    /// Create a filesystem holding a single empty directory at `root`.
    pub fn new(root: &str) -> Self {
        let mut fs = Self {
            nodes: HashMap::new(),
            next_inode: 1,
            deny_open: HashSet::new(),
            deny_stat: HashSet::new(),
        };
        fs.add_dir(root);
        fs
    }

    /// Add a directory, creating missing parents.
    pub fn add_dir(&mut self, path: &str) {
        if self.nodes.contains_key(path) {
            return;
        }
        self.link(path);
        self.nodes
            .insert(path.to_string(), Node::Dir { entries: Vec::new() });
    }

    /// Add a file of `size` bytes, creating missing parents.
    pub fn add_file(&mut self, path: &str, size: u64) {
        self.link(path);
        self.nodes.insert(path.to_string(), Node::File { size });
    }

    /// Append a deleted slot (inode 0) to the listing of `parent`.
    pub fn add_deleted(&mut self, parent: &str, name: &str) {
        self.add_entry(parent, name, UNUSED_INODE);
    }

    /// Append a raw slot to the listing of `parent` without creating a node.
    pub fn add_entry(&mut self, parent: &str, name: &str, inode: u64) {
        self.add_dir(parent);
        if let Some(Node::Dir { entries }) = self.nodes.get_mut(parent) {
            entries.push(DirectoryEntry::new(name, inode));
        }
    }

    /// Make `read_dir` on `path` fail.
    pub fn deny_open(&mut self, path: &str) {
        self.deny_open.insert(path.to_string());
    }

    /// Make `stat` on `path` fail.
    pub fn deny_stat(&mut self, path: &str) {
        self.deny_stat.insert(path.to_string());
    }

    /// Register `path` in its parent's listing.
    fn link(&mut self, path: &str) {
        if path == "/" {
            return;
        }
        let Some((parent, name)) = path.rsplit_once('/') else {
            return;
        };
        let parent = if parent.is_empty() { "/" } else { parent };
        let inode = self.next_inode;
        self.next_inode += 1;
        self.add_entry(parent, name, inode);
    }
}

impl Filesystem for MemFs {
    type Entries = std::vec::IntoIter<DirectoryEntry>;

    fn read_dir(&self, path: &TreePath) -> Result<Self::Entries, TreeError> {
        let open_error = || TreeError::Open(path.to_string());
        if self.deny_open.contains(path.as_str()) {
            return Err(open_error());
        }
        match self.nodes.get(node_key(path)) {
            Some(Node::Dir { entries }) => {
                let mut listing = vec![
                    DirectoryEntry::new(".", 1),
                    DirectoryEntry::new("..", 1),
                ];
                listing.extend(entries.iter().cloned());
                Ok(listing.into_iter())
            }
            _ => Err(open_error()),
        }
    }

    fn stat(&self, path: &TreePath) -> Result<EntryStat, TreeError> {
        if self.deny_stat.contains(path.as_str()) {
            return Err(TreeError::Stat(path.to_string()));
        }
        match self.nodes.get(node_key(path)) {
            Some(Node::File { size }) => Ok(EntryStat {
                kind: EntryKind::File,
                size: *size,
            }),
            Some(Node::Dir { .. }) => Ok(EntryStat {
                kind: EntryKind::Directory,
                size: 0,
            }),
            None => Err(TreeError::Open(path.to_string())),
        }
    }
}

fn node_key(path: &TreePath) -> &str {
    match path.root_label() {
        "" => "/",
        trimmed => trimmed,
    }
}

/// A temporary directory tree on the host filesystem.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestDir {
    dir: TempDir,
}

impl TestDir {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memfs_keeps_insertion_order() {
        let mut fs = MemFs::new("root");
        fs.add_file("root/z", 0);
        fs.add_file("root/a", 0);

        let root = TreePath::new("root").unwrap();
        let names: Vec<String> = fs.read_dir(&root).unwrap().map(|e| e.name).collect();
        assert_eq!(names, vec![".", "..", "z", "a"]);
    }

    #[test]
    fn test_memfs_creates_parents() {
        let mut fs = MemFs::new("root");
        fs.add_file("root/a/b/c.md", 4);

        let ab = TreePath::new("root/a/b").unwrap();
        assert!(fs.stat(&ab).unwrap().is_dir());
        assert_eq!(fs.stat(&ab.join("c.md").unwrap()).unwrap().size, 4);
    }

    #[test]
    fn test_dir_creates_files() {
        let dir = TestDir::new();
        let file = dir.add_file("nested/deep/file.txt", "x");
        assert!(file.exists());
        assert!(dir.add_dir("empty").is_dir());
    }
}
