//! Directory traversal and page generation.
//!
//! The walker is depth-first: every subdirectory is fully processed,
//! including its own pages, before the pages of its parent are written.
//!
//! ```text
//! walk(root)
//! ├── walk(root/2023)          → 2023/index.html, 2023/*.html
//! ├── walk(root/2024)
//! │   └── walk(root/2024/summer)
//! └── root/index.html, root/*.html
//! ```
//!
//! Sibling directories are visited in whatever order the filesystem lists
//! them. Only the recorded names are sorted, once per directory, into a
//! [`DirListing`] that both generators read.
//!
//! ## Symlinked Directories
//!
//! A symlinked directory is always listed by name. Whether it is walked
//! depends on where it resolves:
//!
//! - **Inside the root**: not walked through the link. The target is reached
//!   by its real path, so its pages get the depth of that path and every root
//!   link resolves. A [`GalleryEvent::AliasListed`] is reported.
//! - **Outside the root**: walked through the link. The walker remembers the
//!   canonical path of every directory it has entered; one that resolves to a
//!   directory already entered is not walked again, and a
//!   [`GalleryEvent::CycleSkipped`] is reported.

use crate::classify::{EntryKind, classify};
use crate::config::{self, GalleryConfig};
use crate::error::GalleryError;
use crate::naming::{self, INDEX_PAGE};
use crate::{generate, paths};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Immutable context of one generation run.
#[derive(Debug, Clone)]
pub struct Gallery {
    root: PathBuf,
    config: GalleryConfig,
}

impl Gallery {
    /// Validate `root` and load its `gallery.toml`.
    pub fn open(root: &Path) -> Result<Self, GalleryError> {
        let root = paths::resolve_root(root)?;
        let config = config::load_config(&root)?;
        Ok(Self { root, config })
    }

    /// Gallery with an explicit config, skipping `gallery.toml`.
    #[cfg(test)]
    pub(crate) fn with_config(root: &Path, config: GalleryConfig) -> Result<Self, GalleryError> {
        let root = paths::resolve_root(root)?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn is_root(&self, dir: &Path) -> bool {
        dir == self.root
    }
}

/// A directory's subdirectory and image names, each sorted exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirListing {
    dir: PathBuf,
    subdirs: Vec<String>,
    images: Vec<String>,
}

impl DirListing {
    pub fn new(dir: PathBuf, mut subdirs: Vec<String>, mut images: Vec<String>) -> Self {
        subdirs.sort();
        images.sort();
        Self {
            dir,
            subdirs,
            images,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn subdirs(&self) -> &[String] {
        &self.subdirs
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Picture page names claimed by more than one image, or by an image and
    /// the index page itself.
    pub fn page_name_collisions(&self) -> Vec<(String, Vec<String>)> {
        let mut by_page: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for image in &self.images {
            by_page
                .entry(naming::picture_page_name(image))
                .or_default()
                .push(image.clone());
        }
        by_page
            .into_iter()
            .filter(|(page, images)| images.len() > 1 || page == INDEX_PAGE)
            .collect()
    }
}

/// Progress reported while generating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryEvent {
    /// A subdirectory is about to be walked.
    DirectoryVisited { path: PathBuf },
    /// A symlinked subdirectory resolves to a directory inside the root,
    /// which gets its pages at its real location.
    AliasListed { path: PathBuf, target: PathBuf },
    /// A subdirectory outside the root resolves to a directory already walked.
    CycleSkipped { path: PathBuf },
    /// Several images share a picture page name, or an image's page name is
    /// the index page. The last image in sorted order wins a shared name; an
    /// image named like the index page gets no picture page.
    PageNameCollision {
        dir: PathBuf,
        page: String,
        images: Vec<String>,
    },
    IndexWritten {
        path: PathBuf,
        subdirs: usize,
        images: usize,
    },
    PicturesWritten { dir: PathBuf, count: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub directories: usize,
    pub index_pages: usize,
    pub picture_pages: usize,
}

/// Generate index and picture pages for every directory under the gallery
/// root, root included.
///
/// Stops at the first directory that cannot be listed or page that cannot be
/// written; pages already written stay on disk.
pub fn walk(
    gallery: &Gallery,
    report: &mut dyn FnMut(GalleryEvent),
) -> Result<WalkSummary, GalleryError> {
    let mut walker = Walker {
        gallery,
        visited: HashSet::new(),
        summary: WalkSummary::default(),
        report,
    };
    walker.enter(gallery.root());
    walker.walk_dir(gallery.root())?;
    Ok(walker.summary)
}

struct Walker<'a> {
    gallery: &'a Gallery,
    visited: HashSet<PathBuf>,
    summary: WalkSummary,
    report: &'a mut dyn FnMut(GalleryEvent),
}

impl Walker<'_> {
    /// Record `dir` as entered. False if it was entered before.
    fn enter(&mut self, dir: &Path) -> bool {
        let canonical = fs::canonicalize(dir).unwrap_or_else(|_| dir.to_path_buf());
        self.visited.insert(canonical)
    }

    /// Where `path` resolves when it is a link to a directory inside the
    /// root. `None` for real directories and links leading outside the root.
    fn in_root_alias(&self, path: &Path) -> Option<PathBuf> {
        let target = fs::canonicalize(path).ok()?;
        (target != path && target.starts_with(self.gallery.root())).then_some(target)
    }

    fn walk_dir(&mut self, dir: &Path) -> Result<(), GalleryError> {
        let read_dir_err = |source| GalleryError::ReadDir {
            path: dir.to_path_buf(),
            source,
        };

        let mut subdirs = Vec::new();
        let mut images = Vec::new();

        for entry in fs::read_dir(dir).map_err(read_dir_err)? {
            let entry = entry.map_err(read_dir_err)?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().into_owned();

            match classify(&path) {
                EntryKind::Directory => {
                    subdirs.push(name);
                    if let Some(target) = self.in_root_alias(&path) {
                        (self.report)(GalleryEvent::AliasListed { path, target });
                    } else if self.enter(&path) {
                        (self.report)(GalleryEvent::DirectoryVisited { path: path.clone() });
                        self.walk_dir(&path)?;
                    } else {
                        (self.report)(GalleryEvent::CycleSkipped { path });
                    }
                }
                EntryKind::Image => images.push(name),
                EntryKind::Ignored => {}
            }
        }

        let listing = DirListing::new(dir.to_path_buf(), subdirs, images);
        self.generate(&listing)
    }

    fn generate(&mut self, listing: &DirListing) -> Result<(), GalleryError> {
        for (page, images) in listing.page_name_collisions() {
            (self.report)(GalleryEvent::PageNameCollision {
                dir: listing.dir().to_path_buf(),
                page,
                images,
            });
        }

        let index_path = generate::write_index_page(self.gallery, listing)?;
        self.summary.directories += 1;
        self.summary.index_pages += 1;
        (self.report)(GalleryEvent::IndexWritten {
            path: index_path,
            subdirs: listing.subdirs().len(),
            images: listing.images().len(),
        });

        let root_index = paths::root_index_href(self.gallery.root(), listing.dir())?;
        let count = generate::write_picture_pages(self.gallery, listing, &root_index)?;
        self.summary.picture_pages += count;
        if count > 0 {
            (self.report)(GalleryEvent::PicturesWritten {
                dir: listing.dir().to_path_buf(),
                count,
            });
        }
        Ok(())
    }
}
