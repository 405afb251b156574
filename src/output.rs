//! CLI output formatting for both modes.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! ==> Generating pages in /home/me/photos
//! Visited 2024
//! Visited 2024/summer
//! Linked 2024/best -> 2024/summer
//!     2024/summer/index.html (0 directories, 3 pictures)
//!     2024/summer: 3 picture pages
//!     2024/index.html (1 directory, 0 pictures)
//!     index.html (1 directory, 0 pictures)
//! Generated 3 index pages and 3 picture pages in 3 directories
//! ```
//!
//! Warnings (page name collisions, skipped symlink cycles) go to stderr.
//!
//! ## Clean
//!
//! ```text
//! ==> Removing HTML files in /home/me/photos
//! Removed 2024/summer/a.html
//! Failed to remove 2024/locked.html: Permission denied (os error 13)
//! Removed 7 HTML files (1 failed)
//! ```
//!
//! # Architecture
//!
//! Each event has a `format_*` function (returns `String`) for testability
//! and a `print_*` wrapper that writes to stdout or stderr. Format functions
//! do no I/O. Paths are shown relative to the gallery root.

use crate::clean::{CleanEvent, CleanReport};
use crate::naming::INDEX_PAGE;
use crate::walk::{GalleryEvent, WalkSummary};
use std::path::Path;

/// Display `path` relative to `root`, `.` for the root itself.
fn display_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if rel.as_os_str().is_empty() => ".".to_string(),
        Ok(rel) => rel.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

fn plural(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

// ============================================================================
// Generate
// ============================================================================

/// True for events that belong on stderr.
pub fn is_warning(event: &GalleryEvent) -> bool {
    matches!(
        event,
        GalleryEvent::CycleSkipped { .. } | GalleryEvent::PageNameCollision { .. }
    )
}

pub fn format_gallery_event(event: &GalleryEvent, root: &Path) -> String {
    match event {
        GalleryEvent::DirectoryVisited { path } => {
            format!("Visited {}", display_path(path, root))
        }
        GalleryEvent::AliasListed { path, target } => format!(
            "Linked {} -> {}",
            display_path(path, root),
            display_path(target, root)
        ),
        GalleryEvent::CycleSkipped { path } => format!(
            "warning: {} was already visited (symlink cycle), not descending",
            display_path(path, root)
        ),
        GalleryEvent::PageNameCollision { dir, page, images } if page == INDEX_PAGE => format!(
            "warning: {} in {} would replace {}; no picture page written",
            images.join(", "),
            display_path(dir, root),
            page
        ),
        GalleryEvent::PageNameCollision { dir, page, images } => format!(
            "warning: {} in {} is claimed by {}; {} wins",
            page,
            display_path(dir, root),
            images.join(", "),
            images.last().map(String::as_str).unwrap_or_default()
        ),
        GalleryEvent::IndexWritten {
            path,
            subdirs,
            images,
        } => format!(
            "    {} ({}, {})",
            display_path(path, root),
            plural(*subdirs, "directory", "directories"),
            plural(*images, "picture", "pictures")
        ),
        GalleryEvent::PicturesWritten { dir, count } => format!(
            "    {}: {}",
            display_path(dir, root),
            plural(*count, "picture page", "picture pages")
        ),
    }
}

pub fn print_gallery_event(event: &GalleryEvent, root: &Path) {
    let line = format_gallery_event(event, root);
    if is_warning(event) {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}

pub fn format_walk_summary(summary: &WalkSummary) -> String {
    format!(
        "Generated {} and {} in {}",
        plural(summary.index_pages, "index page", "index pages"),
        plural(summary.picture_pages, "picture page", "picture pages"),
        plural(summary.directories, "directory", "directories")
    )
}

// ============================================================================
// Clean
// ============================================================================

pub fn format_clean_event(event: &CleanEvent, root: &Path) -> String {
    match event {
        CleanEvent::Removed { path } => format!("Removed {}", display_path(path, root)),
        CleanEvent::RemoveFailed { path, error } => {
            format!("Failed to remove {}: {}", display_path(path, root), error)
        }
        CleanEvent::TraversalFailed { path: Some(path), error } => {
            format!("Skipped {}: {}", display_path(path, root), error)
        }
        CleanEvent::TraversalFailed { path: None, error } => format!("Skipped: {}", error),
    }
}

pub fn print_clean_event(event: &CleanEvent, root: &Path) {
    let line = format_clean_event(event, root);
    match event {
        CleanEvent::Removed { .. } => println!("{}", line),
        _ => eprintln!("{}", line),
    }
}

pub fn format_clean_summary(report: &CleanReport) -> String {
    let removed = plural(report.removed, "HTML file", "HTML files");
    if report.failed == 0 {
        format!("Removed {removed}")
    } else {
        format!("Removed {removed} ({} failed)", report.failed)
    }
}
