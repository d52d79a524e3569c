//! Bounded, owned paths used by the walker

use std::fmt;
use std::path::Path;

use crate::error::TreeError;

/// Capacity of a path, in bytes, including room for a terminator.
pub const PATH_CAPACITY: usize = 512;

/// An owned filesystem location with a fixed maximum length.
///
/// Each recursion frame owns its own value: `join` builds a fresh path for the
/// child and leaves the parent untouched, so nothing has to be restored when
/// the child returns.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreePath(String);

impl TreePath {
    pub fn new(path: impl Into<String>) -> Result<Self, TreeError> {
        let path = path.into();
        if path.len() >= PATH_CAPACITY {
            return Err(TreeError::PathTooLong);
        }
        Ok(Self(path))
    }

    /// Build the path of a child entry named `name`.
    pub fn join(&self, name: &str) -> Result<Self, TreeError> {
        let needs_separator = !self.0.is_empty() && !self.0.ends_with('/');
        let len = self.0.len() + usize::from(needs_separator) + name.len();
        if len >= PATH_CAPACITY {
            return Err(TreeError::PathTooLong);
        }

        let mut joined = String::with_capacity(len);
        joined.push_str(&self.0);
        if needs_separator {
            joined.push('/');
        }
        joined.push_str(name);
        Ok(Self(joined))
    }

    /// The final component: everything after the last '/'.
    pub fn file_name(&self) -> &str {
        match self.0.rfind('/') {
            Some(idx) => &self.0[idx + 1..],
            None => &self.0,
        }
    }

    /// Label used for the root of a walk: the path as given, minus trailing '/'.
    pub fn root_label(&self) -> &str {
        self.0.trim_end_matches('/')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_std_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
