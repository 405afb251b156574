//! Relative-link algebra.
//!
//! Every generated page links back to the root index with a chain of `../`
//! segments, one per directory level between the page and the root. The
//! count comes from the lexical relative path, so it is the same on every
//! platform regardless of separator.
//!
//! ```text
//! root/                  → index.html
//! root/2024/             → ../index.html
//! root/2024/summer/      → ../../index.html
//! ```

use crate::error::GalleryError;
use crate::naming::INDEX_PAGE;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Absolute, canonical form of a user-supplied gallery root.
///
/// Anything that is not an existing directory is
/// [`GalleryError::InvalidRoot`].
pub fn resolve_root(path: &Path) -> Result<PathBuf, GalleryError> {
    if !path.is_dir() {
        return Err(GalleryError::InvalidRoot(path.to_path_buf()));
    }
    fs::canonicalize(path).map_err(|_| GalleryError::InvalidRoot(path.to_path_buf()))
}

/// `../` repeated once per directory level from `dir` up to `root`.
///
/// Empty when `dir` is the root. A `dir` outside `root` means the walker
/// built a path it should not have and is reported as
/// [`GalleryError::OutsideRoot`].
pub fn root_prefix(root: &Path, dir: &Path) -> Result<String, GalleryError> {
    let rel = dir
        .strip_prefix(root)
        .map_err(|_| GalleryError::OutsideRoot {
            root: root.to_path_buf(),
            dir: dir.to_path_buf(),
        })?;
    let depth = rel
        .components()
        .filter(|c| matches!(c, Component::Normal(_)))
        .count();
    Ok("../".repeat(depth))
}

/// Relative href from a page in `dir` to the root index page.
pub fn root_index_href(root: &Path, dir: &Path) -> Result<String, GalleryError> {
    Ok(format!("{}{}", root_prefix(root, dir)?, INDEX_PAGE))
}

/// Percent-encode each `/`-separated segment of a relative href.
///
/// `..` segments and the separators pass through untouched.
pub fn encode_href(href: &str) -> String {
    href.split('/')
        .map(|segment| match segment {
            "" | "." | ".." => segment.to_string(),
            _ => urlencoding::encode(segment).into_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
