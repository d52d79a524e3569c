//! TreeWalker - depth-first rendering of a directory subtree

use tracing::{debug, trace};

use crate::error::TreeError;
use crate::fs::{EntryKind, EntryStat, Filesystem};
use crate::output::{Annotation, RenderedLine, TreeOutput};
use crate::path::TreePath;

use super::config::TraversalConfig;
use super::enumerate::enumerate_children;
use super::filter::subtree_has_match;
use super::prefix::{AncestorFlags, format_prefix};

/// A child found during the classification pass of a directory.
enum Child {
    /// Directory, or file passing the filter: counted and rendered
    Counted {
        name: String,
        path: TreePath,
        stat: EntryStat,
    },
    /// File rejected by the extension filter
    Filtered,
    /// Path could not be built or queried; reported when its turn comes
    Failed(TreeError),
}

/// Streams a directory subtree as a connector-annotated tree diagram.
pub struct TreeWalker<'a, F: Filesystem> {
    fs: &'a F,
    config: &'a TraversalConfig,
}

impl<'a, F: Filesystem> TreeWalker<'a, F> {
    pub fn new(fs: &'a F, config: &'a TraversalConfig) -> Self {
        Self { fs, config }
    }

    /// Render the subtree rooted at `root`.
    ///
    /// Per-path failures are reported through `output` and only cut off the
    /// affected subtree. An `Err` means the walk was aborted: the tree was
    /// deeper than `MAX_DEPTH` or the output could not be written.
    pub fn walk<O: TreeOutput>(&self, root: &str, output: &mut O) -> Result<(), TreeError> {
        let mut last = AncestorFlags::new();
        match TreePath::new(root) {
            Ok(path) => self.render(&path, 0, &mut last, output),
            Err(e) => report(e, output),
        }
    }

    fn render<O: TreeOutput>(
        &self,
        path: &TreePath,
        depth: usize,
        last: &mut AncestorFlags,
        output: &mut O,
    ) -> Result<(), TreeError> {
        if self.config.beyond_max_depth(depth) {
            return Ok(());
        }

        match self.fs.stat(path) {
            Ok(stat) => self.render_entry(path, &stat, depth, last, output),
            Err(e) => report(e, output),
        }
    }

    fn render_entry<O: TreeOutput>(
        &self,
        path: &TreePath,
        stat: &EntryStat,
        depth: usize,
        last: &mut AncestorFlags,
        output: &mut O,
    ) -> Result<(), TreeError> {
        let name = if depth == 0 {
            path.root_label()
        } else {
            path.file_name()
        };

        match stat.kind {
            EntryKind::Directory => self.render_directory(path, name, depth, last, output),
            EntryKind::File => self.render_file(name, stat, depth, last, output),
        }
    }

    fn render_directory<O: TreeOutput>(
        &self,
        path: &TreePath,
        name: &str,
        depth: usize,
        last: &mut AncestorFlags,
        output: &mut O,
    ) -> Result<(), TreeError> {
        let children = match self.classify_children(path) {
            Ok(children) => children,
            Err(e) => return report(e, output),
        };

        let should_announce = !self.config.show_count
            && self.config.extension_filter.as_ref().is_none_or(|filter| {
                subtree_has_match(self.fs, path, Some(filter))
            });
        if should_announce {
            output.line(&RenderedLine::directory(
                format_prefix(depth, last.as_slice()),
                name,
            ))?;
        }

        let mut dir_count = 0usize;
        let mut file_count = 0usize;
        for child in &children {
            if let Child::Counted { stat, .. } = child {
                match stat.kind {
                    EntryKind::Directory => dir_count += 1,
                    EntryKind::File => file_count += 1,
                }
            }
        }
        trace!(path = %path, dir_count, file_count, "classified directory");

        if self.config.show_count {
            output.line(
                &RenderedLine::directory(format_prefix(depth, last.as_slice()), name)
                    .with_annotation(Annotation::Counts {
                        dirs: dir_count,
                        files: file_count,
                    }),
            )?;
            if self.config.show_size && !self.config.beyond_max_depth(depth + 1) {
                self.list_file_sizes(&children, depth, last, output)?;
            }
        }

        let total = dir_count + file_count;
        let mut index = 0usize;
        for child in children {
            match child {
                Child::Counted {
                    path: child_path,
                    stat,
                    ..
                } => {
                    last.set(depth, index + 1 == total)?;
                    index += 1;
                    if self.config.beyond_max_depth(depth + 1) {
                        continue;
                    }
                    self.render_entry(&child_path, &stat, depth + 1, last, output)?;
                }
                Child::Filtered => {}
                Child::Failed(e) => {
                    if !self.config.beyond_max_depth(depth + 1) {
                        report(e, output)?;
                    }
                }
            }
        }

        Ok(())
    }

    fn render_file<O: TreeOutput>(
        &self,
        name: &str,
        stat: &EntryStat,
        depth: usize,
        last: &AncestorFlags,
        output: &mut O,
    ) -> Result<(), TreeError> {
        if !self.config.includes_file(name) || self.config.show_count {
            return Ok(());
        }

        let mut line = RenderedLine::file(format_prefix(depth, last.as_slice()), name);
        if self.config.show_size {
            line = line.with_annotation(Annotation::Size(stat.size));
        }
        output.line(&line)?;
        Ok(())
    }

    /// Under count display with sizes, list the counted files of a directory
    /// one per line beneath its count line.
    fn list_file_sizes<O: TreeOutput>(
        &self,
        children: &[Child],
        depth: usize,
        last: &mut AncestorFlags,
        output: &mut O,
    ) -> Result<(), TreeError> {
        last.set(depth, true)?;
        let prefix = format_prefix(depth + 1, last.as_slice());

        for child in children {
            if let Child::Counted { name, stat, .. } = child {
                if stat.kind == EntryKind::File {
                    output.line(
                        &RenderedLine::file(prefix.clone(), name)
                            .with_annotation(Annotation::Size(stat.size)),
                    )?;
                }
            }
        }
        Ok(())
    }

    /// One enumeration pass over `path`, classifying each live child.
    fn classify_children(&self, path: &TreePath) -> Result<Vec<Child>, TreeError> {
        let children = enumerate_children(self.fs, path)?
            .map(|entry| {
                let child = match path.join(&entry.name) {
                    Ok(child) => child,
                    Err(e) => return Child::Failed(e),
                };
                match self.fs.stat(&child) {
                    Ok(stat) if stat.is_dir() || self.config.includes_file(&entry.name) => {
                        Child::Counted {
                            name: entry.name,
                            path: child,
                            stat,
                        }
                    }
                    Ok(_) => Child::Filtered,
                    Err(e) => Child::Failed(e),
                }
            })
            .collect();
        Ok(children)
    }
}

/// Hand a recoverable error to the output; anything else aborts the walk.
fn report<O: TreeOutput>(error: TreeError, output: &mut O) -> Result<(), TreeError> {
    if !error.is_recoverable() {
        return Err(error);
    }
    debug!(%error, "abandoning subtree");
    output.diagnostic(&error)?;
    Ok(())
}
