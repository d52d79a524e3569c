//! In-memory output sink

use std::io;

use crate::error::TreeError;

use super::{RenderedLine, TreeOutput};

/// Collects plain-text lines and diagnostics instead of printing them.
#[derive(Debug, Default)]
pub struct BufferedOutput {
    lines: Vec<String>,
    diagnostics: Vec<String>,
}

impl BufferedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Diagnostics, formatted as they would appear on stderr.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }

    /// All tree lines joined with trailing newlines.
    pub fn format(&self) -> String {
        let mut output = String::new();
        for line in &self.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }
}

impl TreeOutput for BufferedOutput {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }

    fn diagnostic(&mut self, error: &TreeError) -> io::Result<()> {
        self.diagnostics.push(format!("tree: {}", error));
        Ok(())
    }
}
