//! Directory tree walking logic
//!
//! `TreeWalker` renders a subtree depth-first, streaming one line at a time to a
//! `TreeOutput`. The supporting pieces are split by concern:
//!
//! - `enumerate`: lists the live children of a directory
//! - `filter`: extension matching and the subtree containment predicate
//! - `prefix`: connector glyphs and the per-depth "last sibling" arena

mod config;
mod enumerate;
mod filter;
mod prefix;
mod walker;

pub use config::TraversalConfig;
pub use enumerate::enumerate_children;
pub use filter::{ExtensionFilter, subtree_has_match};
pub use prefix::{AncestorFlags, MAX_DEPTH, format_prefix};
pub use walker::TreeWalker;
