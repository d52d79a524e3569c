//! Test harness for tree integration tests

use std::path::Path;
use std::process::Command;

pub use twig::test_utils::TestDir;

pub fn run_tree(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_tree");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("FORCE_COLOR")
        .env_remove("TREE_LOG")
        .output()
        .expect("Failed to run tree");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Non-empty stdout lines.
#[allow(dead_code)]
pub fn lines(stdout: &str) -> Vec<&str> {
    stdout.lines().filter(|l| !l.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_runs_binary() {
        let dir = TestDir::new();
        let (_stdout, _stderr, success) = run_tree(dir.path(), &[]);
        assert!(success);
    }
}
