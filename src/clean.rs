//! Clean mode: delete every `.html` file under the gallery root.
//!
//! Best effort. A file that cannot be deleted, or a directory that cannot be
//! read, is reported and skipped; the rest of the tree is still cleaned.
//! Images and every other non-HTML file are never touched. There is no check
//! that a page was generated by this tool: any `.html` file is removed.
//!
//! Symlinked directories are followed. `walkdir` detects links that loop
//! back to an ancestor and reports them as traversal failures instead of
//! descending. A dangling symlink named `*.html` is removed like any other
//! HTML file.

use crate::naming;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanEvent {
    Removed { path: PathBuf },
    RemoveFailed { path: PathBuf, error: String },
    /// A directory could not be listed or a symlink loop was found.
    TraversalFailed {
        path: Option<PathBuf>,
        error: String,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanReport {
    pub removed: usize,
    pub failed: usize,
}

pub fn clean(root: &Path, report: &mut dyn FnMut(CleanEvent)) -> CleanReport {
    let mut summary = CleanReport::default();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                match err.path().filter(|path| is_dangling_html_link(path)) {
                    Some(path) => remove(path.to_path_buf(), &mut summary, report),
                    None => {
                        summary.failed += 1;
                        report(CleanEvent::TraversalFailed {
                            path: err.path().map(Path::to_path_buf),
                            error: err.to_string(),
                        });
                    }
                }
                continue;
            }
        };

        if entry.file_type().is_dir()
            || !naming::is_html_name(&entry.file_name().to_string_lossy())
        {
            continue;
        }

        remove(entry.into_path(), &mut summary, report);
    }

    summary
}

fn remove(path: PathBuf, summary: &mut CleanReport, report: &mut dyn FnMut(CleanEvent)) {
    match fs::remove_file(&path) {
        Ok(()) => {
            summary.removed += 1;
            report(CleanEvent::Removed { path });
        }
        Err(err) => {
            summary.failed += 1;
            report(CleanEvent::RemoveFailed {
                path,
                error: err.to_string(),
            });
        }
    }
}

/// A symlink named `*.html` whose target does not exist. Following links,
/// `walkdir` reports it as an error instead of yielding it.
fn is_dangling_html_link(path: &Path) -> bool {
    let is_link = fs::symlink_metadata(path).is_ok_and(|meta| meta.file_type().is_symlink());
    let is_html = path
        .file_name()
        .is_some_and(|name| naming::is_html_name(&name.to_string_lossy()));
    is_link && is_html && fs::metadata(path).is_err()
}
