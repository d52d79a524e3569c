//! Connector glyphs and the ancestor "last sibling" arena

use crate::error::TreeError;

/// Deepest nesting the walker can record.
pub const MAX_DEPTH: usize = 128;

const VERTICAL: &str = "│   ";
const BLANK: &str = "    ";
const TEE: &str = "├── ";
const CORNER: &str = "└── ";

/// Per-depth record of whether the entry at that depth was the last among
/// its siblings.
///
/// A frame at depth `d` writes slot `d` before recursing into each child and
/// only reads slots below `d`, so sibling frames never see each other's values.
#[derive(Debug, Clone)]
pub struct AncestorFlags {
    last: [bool; MAX_DEPTH],
}

impl AncestorFlags {
    pub fn new() -> Self {
        Self {
            last: [false; MAX_DEPTH],
        }
    }

    pub fn set(&mut self, depth: usize, is_last: bool) -> Result<(), TreeError> {
        let slot = self
            .last
            .get_mut(depth)
            .ok_or(TreeError::DepthExceeded(MAX_DEPTH))?;
        *slot = is_last;
        Ok(())
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.last
    }
}

impl Default for AncestorFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading glyphs for an entry at `depth`.
///
/// Levels `0..depth - 1` get a vertical bar or blank column block depending on
/// whether that ancestor was last; the final block is a corner when
/// `last[depth - 1]` is set and a tee otherwise. Depth 0 has no prefix.
pub fn format_prefix(depth: usize, last: &[bool]) -> String {
    if depth == 0 {
        return String::new();
    }

    let is_last = |i: usize| last.get(i).copied().unwrap_or(false);

    let mut prefix = String::with_capacity(depth * CORNER.len());
    for i in 0..depth - 1 {
        prefix.push_str(if is_last(i) { BLANK } else { VERTICAL });
    }
    prefix.push_str(if is_last(depth - 1) { CORNER } else { TEE });
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_has_no_prefix() {
        assert_eq!(format_prefix(0, &[true, true]), "");
    }

    #[test]
    fn test_final_connector() {
        assert_eq!(format_prefix(1, &[false]), "├── ");
        assert_eq!(format_prefix(1, &[true]), "└── ");
    }

    #[test]
    fn test_ancestor_columns() {
        assert_eq!(format_prefix(3, &[false, true, false]), "│       ├── ");
        assert_eq!(format_prefix(3, &[true, false, true]), "    │   └── ");
    }

    #[test]
    fn test_prefix_is_pure_and_proportional() {
        let flags = [false, true, false, true, false];
        for depth in 1..=flags.len() {
            let first = format_prefix(depth, &flags);
            assert_eq!(first, format_prefix(depth, &flags));
            assert_eq!(first.chars().count(), depth * 4);
        }
    }

    #[test]
    fn test_flags_reject_overflow() {
        let mut flags = AncestorFlags::new();
        assert!(flags.set(MAX_DEPTH - 1, true).is_ok());
        assert!(flags.as_slice()[MAX_DEPTH - 1]);
        assert!(matches!(
            flags.set(MAX_DEPTH, true),
            Err(TreeError::DepthExceeded(MAX_DEPTH))
        ));
    }
}
