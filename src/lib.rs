//! Twig - a small tree command with extension filters, sizes and counts

pub mod error;
pub mod fs;
pub mod output;
pub mod path;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{TreeError, UsageError};
pub use fs::{DirectoryEntry, EntryKind, EntryStat, Filesystem, HostFs};
pub use output::{BufferedOutput, OutputConfig, RenderedLine, StreamingFormatter, TreeOutput};
pub use path::TreePath;
pub use tree::{ExtensionFilter, TraversalConfig, TreeWalker, format_prefix, subtree_has_match};
