//! # Folder Gallery
//!
//! Turns a directory tree of images into a browsable static site, in place.
//! Every directory gets an `index.html` listing its subdirectories and
//! images; every image gets a `<stem>.html` page with Back / Next navigation
//! through its directory. Clean mode deletes the generated HTML again.
//!
//! ```text
//! photos/                     photos/
//! ├── a.png                   ├── index.html
//! ├── b.jpg         ──▶       ├── a.png   a.html
//! └── 2024/                   ├── b.jpg   b.html
//!     └── c.jpeg              └── 2024/
//!                                 ├── index.html
//!                                 └── c.jpeg  c.html
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`walk`] | Depth-first traversal; sorts each directory once and drives both generators |
//! | [`generate`] | Renders index and picture pages with Maud and writes them |
//! | [`clean`] | Best-effort deletion of every `.html` file under the root |
//! | [`classify`] | Directory / image / ignored decision for one entry |
//! | [`paths`] | Root validation and the `../` prefix back to the root |
//! | [`naming`] | Image and HTML suffix tests, picture page names |
//! | [`config`] | Optional `gallery.toml`: title, labels, picture size |
//! | [`error`] | Error type and the exit code of each failure |
//! | [`output`] | CLI output formatting of run events |
//!
//! # Design Decisions
//!
//! ## Relative Links Only
//!
//! Every link is relative (`../../index.html`, `sub/index.html`, `b.html`),
//! so the generated tree works from `file://`, from any web server prefix, and
//! after being moved or copied as a whole.
//!
//! ## One Sort Per Directory
//!
//! A [`walk::DirListing`] is sorted when it is built and only read after
//! that. The index page and the picture chain of a directory therefore always
//! agree on order.
//!
//! ## Errors Are Values
//!
//! Nothing below `main` exits the process. Listing and page-write failures
//! propagate as [`error::GalleryError`]; `main` alone maps them to exit
//! codes. Clean mode reports per-file failures as events and keeps going.

pub mod classify;
pub mod clean;
pub mod config;
pub mod error;
pub mod generate;
pub mod naming;
pub mod output;
pub mod paths;
pub mod walk;

#[cfg(test)]
pub(crate) mod test_helpers;
