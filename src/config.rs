//! Gallery configuration.
//!
//! Handles loading and validating `gallery.toml`. Keys set in an optional
//! `gallery.toml` in the gallery root override the stock defaults.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! title = "My images"          # Index page title and header link text
//! picture_heading = "Index"    # Root link text on picture pages
//!
//! [labels]
//! parent = "^^"                # Link to the parent / directory index
//! directories = "Directories"  # Heading of the subdirectory list
//! pictures = "Pictures"        # Heading of the image list
//! back = "Back"
//! next = "Next"
//!
//! [picture]
//! max_size = "95%"             # CSS max-width and max-height of the image
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse. Override just the values you want:
//!
//! ```toml
//! title = "Holiday 2024"
//! ```
//!
//! Unknown keys are rejected to catch typos early. The file is neither an
//! image nor HTML, so the walker never lists it and clean mode never deletes
//! it.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// File name looked up in the gallery root.
pub const CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Gallery configuration loaded from `gallery.toml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    /// Title of every index page; also the text of the root link.
    pub title: String,
    /// Text of the root link on picture pages.
    pub picture_heading: String,
    /// Link and section labels.
    pub labels: LabelsConfig,
    /// Picture page layout.
    pub picture: PictureConfig,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "My images".to_string(),
            picture_heading: "Index".to_string(),
            labels: LabelsConfig::default(),
            picture: PictureConfig::default(),
        }
    }
}

impl GalleryConfig {
    /// Reject empty values; an empty label would render an unclickable link.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("title", &self.title),
            ("picture_heading", &self.picture_heading),
            ("labels.parent", &self.labels.parent),
            ("labels.directories", &self.labels.directories),
            ("labels.pictures", &self.labels.pictures),
            ("labels.back", &self.labels.back),
            ("labels.next", &self.labels.next),
            ("picture.max_size", &self.picture.max_size),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LabelsConfig {
    pub parent: String,
    pub directories: String,
    pub pictures: String,
    pub back: String,
    pub next: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            parent: "^^".to_string(),
            directories: "Directories".to_string(),
            pictures: "Pictures".to_string(),
            back: "Back".to_string(),
            next: "Next".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PictureConfig {
    /// Any CSS length, applied to both `max-width` and `max-height`.
    pub max_size: String,
}

impl Default for PictureConfig {
    fn default() -> Self {
        Self {
            max_size: "95%".to_string(),
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse the contents of a `gallery.toml` and validate the result.
///
/// Missing keys fall back to their defaults through `#[serde(default)]`.
pub fn parse_config(content: &str) -> Result<GalleryConfig, ConfigError> {
    let config: GalleryConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load the config for the gallery rooted at `root`.
///
/// Stock defaults when the root has no `gallery.toml` file.
pub fn load_config(root: &Path) -> Result<GalleryConfig, ConfigError> {
    let config_path = root.join(CONFIG_FILE);
    if !config_path.is_file() {
        return Ok(GalleryConfig::default());
    }
    parse_config(&fs::read_to_string(&config_path)?)
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Used by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# folder-gallery configuration
# ============================
# Place this file as gallery.toml in the gallery root directory.
# All settings are optional. Values shown below are the defaults.
# Unknown keys will cause an error.

# Title of every index page, also used as the link back to the root index.
title = "My images"

# Text of the root link at the top of every picture page.
picture_heading = "Index"

# ---------------------------------------------------------------------------
# Link and section labels
# ---------------------------------------------------------------------------
[labels]
# Link to the parent directory (index pages) or directory index (picture pages).
parent = "^^"
directories = "Directories"
pictures = "Pictures"
back = "Back"
next = "Next"

# ---------------------------------------------------------------------------
# Picture pages
# ---------------------------------------------------------------------------
[picture]
# Upper bound for the displayed image, as a CSS length.
max_size = "95%"
"##
}
