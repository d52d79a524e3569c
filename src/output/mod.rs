//! Output formatting for tree lines
//!
//! The walker produces `RenderedLine`s and per-path diagnostics; a `TreeOutput`
//! decides where they go. `StreamingFormatter` writes straight to the terminal,
//! `BufferedOutput` keeps everything in memory.

mod buffered;
mod config;
mod streaming;

use std::fmt;
use std::io;

use crate::error::TreeError;

pub use buffered::BufferedOutput;
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;

/// Sink for walker output. Lines arrive in display order, one at a time.
pub trait TreeOutput {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()>;

    /// Report a recoverable per-path failure.
    fn diagnostic(&mut self, error: &TreeError) -> io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Directory,
    File,
}

/// Trailing detail appended after a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Size(u64),
    Counts { dirs: usize, files: usize },
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Annotation::Size(bytes) => write!(f, "(size: {} bytes)", bytes),
            Annotation::Counts { dirs, files } => {
                write!(f, "[{} directories, {} files]", dirs, files)
            }
        }
    }
}

/// One fully formatted output line: connector prefix, label, and an optional
/// annotation. Directory labels already carry their trailing '/'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedLine {
    pub prefix: String,
    pub label: String,
    pub kind: LineKind,
    pub annotation: Option<Annotation>,
}

impl RenderedLine {
    pub fn directory(prefix: String, name: &str) -> Self {
        let label = if name.ends_with('/') {
            name.to_string()
        } else {
            format!("{}/", name)
        };
        Self {
            prefix,
            label,
            kind: LineKind::Directory,
            annotation: None,
        }
    }

    pub fn file(prefix: String, name: &str) -> Self {
        Self {
            prefix,
            label: name.to_string(),
            kind: LineKind::File,
            annotation: None,
        }
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotation = Some(annotation);
        self
    }
}

impl fmt::Display for RenderedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.label)?;
        if let Some(annotation) = &self.annotation {
            write!(f, " {}", annotation)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directory_label_gets_one_slash() {
        assert_eq!(RenderedLine::directory(String::new(), "root").label, "root/");
        assert_eq!(RenderedLine::directory(String::new(), "").label, "/");
    }

    #[test]
    fn test_plain_text() {
        let line = RenderedLine::file("└── ".to_string(), "c.md");
        assert_eq!(line.to_string(), "└── c.md");

        let sized = RenderedLine::file("├── ".to_string(), "a.txt")
            .with_annotation(Annotation::Size(12));
        assert_eq!(sized.to_string(), "├── a.txt (size: 12 bytes)");

        let counted = RenderedLine::directory(String::new(), "root")
            .with_annotation(Annotation::Counts { dirs: 2, files: 3 });
        assert_eq!(counted.to_string(), "root/ [2 directories, 3 files]");
    }
}
