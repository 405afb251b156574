//! Directory entry classification.

use crate::naming;
use std::fs;
use std::path::Path;

/// What the walker does with a directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Recursed into and listed as a subdirectory, whatever its contents.
    Directory,
    /// Regular file with a recognized image extension.
    Image,
    /// Everything else, including previously generated pages.
    Ignored,
}

/// Classify the entry at `path`. Symlinks are followed; an entry whose
/// metadata cannot be read (e.g. a dangling link) is ignored.
pub fn classify(path: &Path) -> EntryKind {
    let Ok(meta) = fs::metadata(path) else {
        return EntryKind::Ignored;
    };
    if meta.is_dir() {
        return EntryKind::Directory;
    }
    let is_image = meta.is_file()
        && path
            .file_name()
            .is_some_and(|name| naming::is_image_name(&name.to_string_lossy()));
    if is_image {
        EntryKind::Image
    } else {
        EntryKind::Ignored
    }
}
