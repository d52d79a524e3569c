//! Extension filtering and the subtree containment predicate

use std::fmt;
use std::str::FromStr;

use crate::error::UsageError;
use crate::fs::{EntryKind, Filesystem};
use crate::path::TreePath;

use super::enumerate::enumerate_children;

/// A file extension such as `.md`, compared against the suffix of a name
/// starting at its last '.'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter(String);

impl ExtensionFilter {
    pub fn new(extension: impl Into<String>) -> Result<Self, UsageError> {
        let extension = extension.into();
        if !extension.starts_with('.') {
            return Err(UsageError::InvalidFilter(extension));
        }
        Ok(Self(extension))
    }

    /// Whether `name` ends exactly in this extension. A name without any '.'
    /// never matches; a name that is only the extension (`.md`) does.
    pub fn matches(&self, name: &str) -> bool {
        name.rfind('.').is_some_and(|dot| name[dot..] == self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ExtensionFilter {
    type Err = UsageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ExtensionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether the subtree under `path` holds at least one qualifying file.
///
/// Without a filter any file qualifies. The search is depth-first and stops at
/// the first match. Nothing is printed or counted here; unreadable entries are
/// treated as holding no match.
pub fn subtree_has_match<F: Filesystem>(
    fs: &F,
    path: &TreePath,
    filter: Option<&ExtensionFilter>,
) -> bool {
    let Ok(children) = enumerate_children(fs, path) else {
        return false;
    };

    for entry in children {
        let Ok(child) = path.join(&entry.name) else {
            continue;
        };
        let Ok(stat) = fs.stat(&child) else {
            continue;
        };

        let found = match stat.kind {
            EntryKind::File => filter.is_none_or(|f| f.matches(&entry.name)),
            EntryKind::Directory => subtree_has_match(fs, &child, filter),
        };
        if found {
            return true;
        }
    }

    false
}
