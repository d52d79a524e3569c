//! Configuration types for the tree walker

use super::filter::ExtensionFilter;

/// Options for one traversal, fixed before the walk starts.
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// Only files whose name ends in this extension are shown, counted, or
    /// considered when deciding whether a directory is worth listing.
    pub extension_filter: Option<ExtensionFilter>,
    /// Append `(size: N bytes)` to file lines
    pub show_size: bool,
    /// Replace directory lines with `name/ [D directories, F files]` and
    /// suppress plain file lines
    pub show_count: bool,
    /// Deepest level to render; the root is level 0. `None` is unbounded.
    pub max_depth: Option<usize>,
}

impl TraversalConfig {
    /// Whether an entry at `depth` falls past the depth limit.
    pub fn beyond_max_depth(&self, depth: usize) -> bool {
        self.max_depth.is_some_and(|max| depth > max)
    }

    /// Whether a file named `name` passes the extension filter.
    pub fn includes_file(&self, name: &str) -> bool {
        self.extension_filter
            .as_ref()
            .is_none_or(|filter| filter.matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit() {
        let unbounded = TraversalConfig::default();
        assert!(!unbounded.beyond_max_depth(1000));

        let limited = TraversalConfig {
            max_depth: Some(1),
            ..Default::default()
        };
        assert!(!limited.beyond_max_depth(0));
        assert!(!limited.beyond_max_depth(1));
        assert!(limited.beyond_max_depth(2));

        let root_only = TraversalConfig {
            max_depth: Some(0),
            ..Default::default()
        };
        assert!(!root_only.beyond_max_depth(0));
        assert!(root_only.beyond_max_depth(1));
    }

    #[test]
    fn test_includes_file() {
        let config = TraversalConfig::default();
        assert!(config.includes_file("anything"));

        let config = TraversalConfig {
            extension_filter: Some(ExtensionFilter::new(".md").unwrap()),
            ..Default::default()
        };
        assert!(config.includes_file("c.md"));
        assert!(!config.includes_file("a.txt"));
    }
}
