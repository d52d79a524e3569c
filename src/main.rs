//! CLI entry point for tree

use std::io::IsTerminal;
use std::process;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use twig::{
    ExtensionFilter, HostFs, OutputConfig, StreamingFormatter, TraversalConfig, TreeWalker,
};

/// Environment variable holding the tracing filter, e.g. `TREE_LOG=debug`.
const LOG_ENV: &str = "TREE_LOG";

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "tree")]
#[command(about = "List a directory subtree as a tree diagram")]
#[command(version)]
struct Args {
    /// Directory to display (the last one given wins)
    #[arg(value_name = "PATH")]
    paths: Vec<String>,

    /// Only show, count and descend towards files with this extension (e.g. .rs)
    #[arg(short = 'F', value_name = "EXT")]
    filter: Option<ExtensionFilter>,

    /// Show file sizes in bytes
    #[arg(short = 'S')]
    size: bool,

    /// Show directory and file counts instead of names
    #[arg(short = 'C')]
    count: bool,

    /// Descend only N levels deep
    #[arg(short = 'L', value_name = "N")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("off"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::try_parse().unwrap_or_else(|e| {
        if !e.use_stderr() {
            // --help / --version
            let _ = e.print();
            process::exit(0);
        }
        eprintln!("tree: argument parsing error: {}", e);
        process::exit(1);
    });

    init_tracing();

    let config = TraversalConfig {
        extension_filter: args.filter,
        show_size: args.size,
        show_count: args.count,
        max_depth: args.level,
    };
    let root = args.paths.last().map_or(".", String::as_str);
    tracing::debug!(root, ?config, "starting walk");

    let mut formatter = StreamingFormatter::new(OutputConfig {
        use_color: should_use_color(args.color),
    });

    if let Err(e) = TreeWalker::new(&HostFs, &config).walk(root, &mut formatter) {
        eprintln!("tree: {}", e);
        process::exit(1);
    }
}
