//! Run errors and their process exit codes.
//!
//! Nothing below `main` terminates the process. Every failure travels back
//! up as a [`GalleryError`], and `main` maps it to an exit status with
//! [`GalleryError::exit_code`]:
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | Success, help, version or `--gen-config` |
//! | 1    | Usage error |
//! | 2    | Invalid root path |
//! | 3    | Index page write failure |
//! | 4    | Picture page write failure |
//! | 5    | Directory listing failure during traversal |
//! | 6    | Configuration error |
//! | 70   | Internal invariant violation |
//!
//! Clean mode never produces a fatal error once the root is valid: per-file
//! deletion failures are reported as events, not errors.

use crate::config::ConfigError;
use std::path::PathBuf;
use thiserror::Error;

pub const EXIT_USAGE: u8 = 1;
pub const EXIT_INVALID_ROOT: u8 = 2;
pub const EXIT_INDEX_WRITE: u8 = 3;
pub const EXIT_PICTURE_WRITE: u8 = 4;
pub const EXIT_READ_DIR: u8 = 5;
pub const EXIT_CONFIG: u8 = 6;
pub const EXIT_INTERNAL: u8 = 70;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("Not an existing directory: {}", .0.display())]
    InvalidRoot(PathBuf),
    #[error("Cannot read directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write index page {}: {source}", path.display())]
    IndexWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Cannot write picture page {}: {source}", path.display())]
    PictureWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{} is not inside gallery root {}", dir.display(), root.display())]
    OutsideRoot { root: PathBuf, dir: PathBuf },
}

impl GalleryError {
    pub fn exit_code(&self) -> u8 {
        match self {
            GalleryError::InvalidRoot(_) => EXIT_INVALID_ROOT,
            GalleryError::ReadDir { .. } => EXIT_READ_DIR,
            GalleryError::IndexWrite { .. } => EXIT_INDEX_WRITE,
            GalleryError::PictureWrite { .. } => EXIT_PICTURE_WRITE,
            GalleryError::Config(_) => EXIT_CONFIG,
            GalleryError::OutsideRoot { .. } => EXIT_INTERNAL,
        }
    }
}
