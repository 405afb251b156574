//! File-name conventions shared by the walker, the generators and the cleaner.
//!
//! ## Picture Page Names
//!
//! A picture page is named after its image with the final extension swapped
//! for `.html`:
//! - `sunset.jpg` → `sunset.html`
//! - `IMG.0001.JPEG` → `IMG.0001.html`
//! - `a.b.png` → `a.b.html`
//!
//! Two images that differ only in extension (`a.png`, `a.jpg`) map to the same
//! page name. The walker detects this and reports it; see
//! [`crate::walk`]. An image whose page name would be `index.html` gets no
//! picture page; the index page links to the image file instead.

/// Extensions recognized as images, lowercase, without the dot.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Name of the per-directory index page.
pub const INDEX_PAGE: &str = "index.html";

/// True if `name` ends in a recognized image extension, ignoring case.
pub fn is_image_name(name: &str) -> bool {
    match name.rsplit_once('.') {
        Some((_, ext)) => IMAGE_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known)),
        None => false,
    }
}

/// True if `name` ends in `.html`, ignoring case.
pub fn is_html_name(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("html"))
}

/// File name with its final extension removed. Names without a dot are
/// returned unchanged.
pub fn stem(name: &str) -> &str {
    name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name)
}

/// Picture page file name for an image: `<stem>.html`.
pub fn picture_page_name(image: &str) -> String {
    format!("{}.html", stem(image))
}

/// False for images whose picture page would replace the index page.
pub fn has_picture_page(image: &str) -> bool {
    picture_page_name(image) != INDEX_PAGE
}
