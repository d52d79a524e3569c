//! Streaming output formatter
//!
//! Writes tree lines to stdout as they are produced and diagnostics to stderr.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::TreeError;

use super::config::OutputConfig;
use super::{LineKind, RenderedLine, TreeOutput};

pub struct StreamingFormatter {
    stdout: StandardStream,
    stderr: StandardStream,
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self {
            stdout: StandardStream::stdout(choice),
            stderr: StandardStream::stderr(ColorChoice::Never),
        }
    }
}

impl TreeOutput for StreamingFormatter {
    fn line(&mut self, line: &RenderedLine) -> io::Result<()> {
        write!(self.stdout, "{}", line.prefix)?;

        match line.kind {
            LineKind::Directory => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
            }
            LineKind::File => {
                self.stdout
                    .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
            }
        }
        write!(self.stdout, "{}", line.label)?;
        self.stdout.reset()?;

        if let Some(annotation) = &line.annotation {
            write!(self.stdout, " ")?;
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            write!(self.stdout, "{}", annotation)?;
            self.stdout.reset()?;
        }

        writeln!(self.stdout)
    }

    fn diagnostic(&mut self, error: &TreeError) -> io::Result<()> {
        // Keep stderr ordered relative to what was already printed.
        self.stdout.flush()?;
        writeln!(self.stderr, "tree: {}", error)
    }
}
