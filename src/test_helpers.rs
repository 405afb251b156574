//! Shared test utilities.
//!
//! Builds throwaway gallery trees and inspects the pages written into them.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! build_tree(tmp.path(), &["a.png", "2024/summer/b.jpg", "empty/"]);
//!
//! // ... run the walker ...
//!
//! let html = read_page(&tmp.path().join("index.html"));
//! assert_eq!(hrefs(&html), vec!["index.html", "2024/index.html", ...]);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// =========================================================================
// Fixture setup
// =========================================================================

/// Create files and directories under `root`.
///
/// Entries ending in `/` are directories; anything else is a file with
/// placeholder content. Parent directories are created as needed.
pub fn build_tree(root: &Path, entries: &[&str]) {
    for entry in entries {
        let path = root.join(entry.trim_end_matches('/'));
        if entry.ends_with('/') {
            fs::create_dir_all(&path).unwrap();
        } else {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(&path, "fake image").unwrap();
        }
    }
}

// =========================================================================
// Page inspection
// =========================================================================

/// Read a generated page. Panics with the path on failure.
pub fn read_page(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// All `href` attribute values in document order.
pub fn hrefs(html: &str) -> Vec<String> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|rest| rest.split_once('"').map(|(value, _)| value.to_string()))
        .collect()
}

/// Every `.html` file under `root`, relative to it, sorted.
pub fn html_files(root: &Path) -> Vec<PathBuf> {
    all_files(root)
        .into_iter()
        .filter(|p| p.extension().is_some_and(|e| e == "html"))
        .collect()
}

/// Every regular file under `root`, relative to it, sorted.
pub fn all_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}

/// `path` relative to the canonical form of `root`.
pub fn relative_to(root: &Path, path: &Path) -> PathBuf {
    let root = fs::canonicalize(root).unwrap();
    path.strip_prefix(&root)
        .unwrap_or_else(|_| panic!("{} is not under {}", path.display(), root.display()))
        .to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hrefs_in_order() {
        let html = r#"<a href="a.html">A</a><a class="x" href="b/index.html">B</a>"#;
        assert_eq!(hrefs(html), vec!["a.html", "b/index.html"]);
    }
}
