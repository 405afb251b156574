//! Index and picture page generation.
//!
//! ## Generated Pages
//!
//! - **Index page** (`<dir>/index.html`): link to the root index, link to the
//!   parent index (every directory except the root), one link per
//!   subdirectory and, when the directory has images, one link per picture
//!   page.
//! - **Picture page** (`<dir>/<stem>.html`): link to the root index, link to
//!   the directory's own index, a Back / name / Next row and the image
//!   itself. The image links to the next picture page when there is one.
//!   An image named like the index page (`index.png`) gets no picture page
//!   and is skipped by the Back / Next chain.
//!
//! ## Output Structure
//!
//! ```text
//! gallery/
//! ├── index.html          # root: no parent link
//! ├── a.png
//! ├── a.html              # Back inert, Next → b.html, image → b.html
//! ├── b.jpg
//! ├── b.html              # Back → a.html, Next inert, image not a link
//! └── 2024/
//!     ├── index.html      # root link ../index.html, parent ../index.html
//!     └── ...
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Text is escaped by maud; hrefs and image sources are percent-encoded per
//! path segment so names with spaces or `#` still resolve.

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::naming::{INDEX_PAGE, has_picture_page, picture_page_name};
use crate::paths::{self, encode_href};
use crate::walk::{DirListing, Gallery};
use maud::{DOCTYPE, Markup, html};
use std::fs;
use std::path::PathBuf;

/// One image's place in its directory's prev/next chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PicturePage<'a> {
    pub image: &'a str,
    pub page: String,
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Build the prev/next chain over an already sorted image list.
///
/// Images without a picture page of their own are left out of the chain.
pub fn picture_chain(images: &[String]) -> Vec<PicturePage<'_>> {
    let paged: Vec<&str> = images
        .iter()
        .map(String::as_str)
        .filter(|image| has_picture_page(image))
        .collect();
    paged
        .iter()
        .enumerate()
        .map(|(idx, &image)| PicturePage {
            image,
            page: picture_page_name(image),
            prev: idx.checked_sub(1).map(|prev| picture_page_name(paged[prev])),
            next: paged.get(idx + 1).map(|next| picture_page_name(next)),
        })
        .collect()
}

/// Index page link target for an image: its picture page, or the image
/// itself when it has none.
fn image_href(image: &str) -> String {
    if has_picture_page(image) {
        encode_href(&picture_page_name(image))
    } else {
        encode_href(image)
    }
}

/// Write `index.html` into the listed directory. Returns the written path.
pub fn write_index_page(gallery: &Gallery, listing: &DirListing) -> Result<PathBuf, GalleryError> {
    let root_href = paths::root_index_href(gallery.root(), listing.dir())?;
    let is_root = gallery.is_root(listing.dir());
    let markup = render_index_page(gallery.config(), &root_href, is_root, listing);

    let path = listing.dir().join(INDEX_PAGE);
    fs::write(&path, markup.into_string()).map_err(|source| GalleryError::IndexWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write one picture page per image in the listing. Returns the page count.
///
/// `root_index` is the relative href of the root index as seen from the
/// listed directory.
pub fn write_picture_pages(
    gallery: &Gallery,
    listing: &DirListing,
    root_index: &str,
) -> Result<usize, GalleryError> {
    let chain = picture_chain(listing.images());
    for page in &chain {
        let markup = render_picture_page(gallery.config(), root_index, page);
        let path = listing.dir().join(&page.page);
        fs::write(&path, markup.into_string())
            .map_err(|source| GalleryError::PictureWrite { path, source })?;
    }
    Ok(chain.len())
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a directory index page.
pub fn render_index_page(
    config: &GalleryConfig,
    root_href: &str,
    is_root: bool,
    listing: &DirListing,
) -> Markup {
    let labels = &config.labels;
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (config.title) }
            }
            body {
                a.root href=(encode_href(root_href)) { h1 { (config.title) } }
                @if !is_root {
                    a.parent href="../index.html" { (labels.parent) }
                    br;
                }
                hr;
                h2 { (labels.directories) }
                ul.directories {
                    @for dir in listing.subdirs() {
                        li { a href=(encode_href(&format!("{dir}/{INDEX_PAGE}"))) { (dir) } }
                    }
                }
                @if !listing.images().is_empty() {
                    hr;
                    h2 { (labels.pictures) }
                    ul.pictures {
                        @for image in listing.images() {
                            li { a href=(image_href(image)) { (image) } }
                        }
                    }
                }
            }
        }
    }
}

fn picture_css(config: &GalleryConfig) -> String {
    format!(
        "h1 {{ text-align: center; }}
div {{ text-align: center; }}
img {{ display: block; margin-left: auto; margin-right: auto; max-width: {size}; max-height: {size}; }}
span.inert {{ color: purple; text-decoration: underline; cursor: default; }}",
        size = config.picture.max_size
    )
}

/// Renders a picture page.
pub fn render_picture_page(config: &GalleryConfig, root_href: &str, page: &PicturePage) -> Markup {
    let labels = &config.labels;
    let src = encode_href(page.image);
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="UTF-8";
                title { (page.image) }
                style { (picture_css(config)) }
            }
            body {
                a.root href=(encode_href(root_href)) { h1 { (config.picture_heading) } }
                hr;
                div.picture-nav {
                    a.up href=(INDEX_PAGE) { (labels.parent) }
                    p {
                        @if let Some(prev) = &page.prev {
                            a.back href=(encode_href(prev)) { (labels.back) }
                        } @else {
                            span.inert.back { (labels.back) }
                        }
                        " " (page.image) " "
                        @if let Some(next) = &page.next {
                            a.next href=(encode_href(next)) { (labels.next) }
                        } @else {
                            span.inert.next { (labels.next) }
                        }
                    }
                }
                hr;
                @if let Some(next) = &page.next {
                    a.advance href=(encode_href(next)) {
                        img src=(src) alt=(page.image);
                    }
                } @else {
                    img src=(src) alt=(page.image);
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use std::path::Path;
    use tempfile::TempDir;

    fn images(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn listing(subdirs: &[&str], imgs: &[&str]) -> DirListing {
        DirListing::new(PathBuf::from("/gallery/dir"), images(subdirs), images(imgs))
    }

    #[test]
    fn chain_links_neighbours() {
        let imgs = images(&["a.png", "b.jpg", "c.jpeg"]);
        let chain = picture_chain(&imgs);

        assert_eq!(chain[0].page, "a.html");
        assert_eq!(chain[0].prev, None);
        assert_eq!(chain[0].next.as_deref(), Some("b.html"));

        assert_eq!(chain[1].prev.as_deref(), Some("a.html"));
        assert_eq!(chain[1].next.as_deref(), Some("c.html"));

        assert_eq!(chain[2].prev.as_deref(), Some("b.html"));
        assert_eq!(chain[2].next, None);
    }

    #[test]
    fn chain_of_one_has_no_neighbours() {
        let imgs = images(&["only.png"]);
        let chain = picture_chain(&imgs);
        assert_eq!(chain.len(), 1);
        assert_eq!(chain[0].prev, None);
        assert_eq!(chain[0].next, None);
    }

    #[test]
    fn index_page_root_has_no_parent_link() {
        let html = render_index_page(
            &GalleryConfig::default(),
            "index.html",
            true,
            &listing(&["sub"], &[]),
        )
        .into_string();
        assert!(!hrefs(&html).contains(&"../index.html".to_string()));
        assert!(!html.contains("class=\"parent\""));
    }

    #[test]
    fn index_page_non_root_links_parent() {
        let html = render_index_page(
            &GalleryConfig::default(),
            "../../index.html",
            false,
            &listing(&[], &[]),
        )
        .into_string();
        let links = hrefs(&html);
        assert_eq!(links[0], "../../index.html");
        assert!(links.contains(&"../index.html".to_string()));
    }

    #[test]
    fn index_page_lists_subdirectories_and_pictures() {
        let html = render_index_page(
            &GalleryConfig::default(),
            "index.html",
            true,
            &listing(&["b", "a"], &["y.jpg", "x.png"]),
        )
        .into_string();
        assert_eq!(
            hrefs(&html),
            vec![
                "index.html",
                "a/index.html",
                "b/index.html",
                "x.html",
                "y.html"
            ]
        );
        assert!(html.contains(">x.png<"));
        assert!(html.contains("<h2>Pictures</h2>"));
    }

    #[test]
    fn index_page_without_images_has_no_pictures_section() {
        let html = render_index_page(
            &GalleryConfig::default(),
            "index.html",
            true,
            &listing(&["a"], &[]),
        )
        .into_string();
        assert!(!html.contains("Pictures"));
        assert!(html.contains("<h2>Directories</h2>"));
    }

    #[test]
    fn index_page_uses_configured_labels() {
        let mut config = GalleryConfig::default();
        config.title = "Holiday".to_string();
        config.labels.parent = "Up".to_string();
        let html = render_index_page(&config, "../index.html", false, &listing(&[], &[]))
            .into_string();
        assert!(html.contains("<title>Holiday</title>"));
        assert!(html.contains(">Up<"));
    }

    #[test]
    fn index_page_encodes_hrefs_and_escapes_text() {
        let html = render_index_page(
            &GalleryConfig::default(),
            "index.html",
            true,
            &listing(&["my trip"], &["<b>#1.png"]),
        )
        .into_string();
        assert!(hrefs(&html).contains(&"my%20trip/index.html".to_string()));
        assert!(hrefs(&html).contains(&"%3Cb%3E%231.html".to_string()));
        assert!(html.contains("&lt;b&gt;#1.png"));
        assert!(!html.contains("<b>#1"));
    }

    #[test]
    fn picture_page_first_has_inert_back() {
        let imgs = images(&["a.png", "b.jpg", "c.jpeg"]);
        let chain = picture_chain(&imgs);
        let html = render_picture_page(&GalleryConfig::default(), "../index.html", &chain[0])
            .into_string();

        assert!(html.contains("<title>a.png</title>"));
        assert!(html.contains(r#"<span class="inert back">Back</span>"#));
        assert!(html.contains(r#"<a class="next" href="b.html">Next</a>"#));
        assert!(html.contains(r#"<a class="advance" href="b.html"><img src="a.png""#));
        assert_eq!(hrefs(&html)[0], "../index.html");
        assert!(hrefs(&html).contains(&"index.html".to_string()));
    }

    #[test]
    fn picture_page_middle_links_both_ways() {
        let imgs = images(&["a.png", "b.jpg", "c.jpeg"]);
        let chain = picture_chain(&imgs);
        let html =
            render_picture_page(&GalleryConfig::default(), "index.html", &chain[1]).into_string();

        assert!(html.contains(r#"<a class="back" href="a.html">Back</a>"#));
        assert!(html.contains(r#"<a class="next" href="c.html">Next</a>"#));
        assert!(!html.contains("inert back"));
    }

    #[test]
    fn picture_page_last_image_is_not_a_link() {
        let imgs = images(&["a.png", "b.jpg", "c.jpeg"]);
        let chain = picture_chain(&imgs);
        let html =
            render_picture_page(&GalleryConfig::default(), "index.html", &chain[2]).into_string();

        assert!(html.contains(r#"<a class="back" href="b.html">Back</a>"#));
        assert!(html.contains(r#"<span class="inert next">Next</span>"#));
        assert!(!html.contains("advance"));
        assert!(html.contains(r#"<img src="c.jpeg" alt="c.jpeg">"#));
        assert!(!hrefs(&html).contains(&"c.html".to_string()));
    }

    #[test]
    fn picture_page_applies_max_size() {
        let mut config = GalleryConfig::default();
        config.picture.max_size = "80vh".to_string();
        let imgs = images(&["a.png"]);
        let chain = picture_chain(&imgs);
        let html = render_picture_page(&config, "index.html", &chain[0]).into_string();
        assert!(html.contains("max-width: 80vh"));
        assert!(html.contains("max-height: 80vh"));
    }

    #[test]
    fn chain_skips_image_named_like_index_page() {
        let imgs = images(&["a.png", "index.png", "z.jpg"]);
        let chain = picture_chain(&imgs);

        let pages: Vec<&str> = chain.iter().map(|p| p.page.as_str()).collect();
        assert_eq!(pages, ["a.html", "z.html"]);
        assert_eq!(chain[0].next.as_deref(), Some("z.html"));
        assert_eq!(chain[1].prev.as_deref(), Some("a.html"));
    }

    #[test]
    fn index_page_links_index_named_image_directly() {
        let html = render_index_page(
            &GalleryConfig::default(),
            "index.html",
            true,
            &listing(&[], &["a.png", "index.png"]),
        )
        .into_string();
        assert_eq!(hrefs(&html), vec!["index.html", "a.html", "index.png"]);
    }

    // =========================================================================
    // Writer tests
    // =========================================================================

    fn gallery(root: &Path) -> Gallery {
        Gallery::with_config(root, GalleryConfig::default()).unwrap()
    }

    #[test]
    fn write_index_page_creates_file() {
        let tmp = TempDir::new().unwrap();
        build_tree(tmp.path(), &["sub/"]);
        let gallery = gallery(tmp.path());
        let listing = DirListing::new(
            gallery.root().join("sub"),
            vec![],
            vec!["x.png".to_string()],
        );

        let path = write_index_page(&gallery, &listing).unwrap();

        assert_eq!(path, gallery.root().join("sub/index.html"));
        let html = read_page(&path);
        assert_eq!(hrefs(&html), vec!["../index.html", "../index.html", "x.html"]);
    }

    #[test]
    fn write_picture_pages_writes_one_per_image() {
        let tmp = TempDir::new().unwrap();
        let gallery = gallery(tmp.path());
        let listing = DirListing::new(
            gallery.root().to_path_buf(),
            vec![],
            images(&["c.jpeg", "a.png", "b.jpg"]),
        );

        let count = write_picture_pages(&gallery, &listing, "index.html").unwrap();

        assert_eq!(count, 3);
        for page in ["a.html", "b.html", "c.html"] {
            assert!(tmp.path().join(page).is_file(), "{page}");
        }
    }

    #[test]
    fn write_index_page_failure_is_index_error() {
        let tmp = TempDir::new().unwrap();
        let gallery = gallery(tmp.path());
        let listing = DirListing::new(gallery.root().join("missing"), vec![], vec![]);

        let result = write_index_page(&gallery, &listing);
        assert!(matches!(result, Err(GalleryError::IndexWrite { .. })));
    }

    #[test]
    fn write_picture_pages_failure_is_picture_error() {
        let tmp = TempDir::new().unwrap();
        let gallery = gallery(tmp.path());
        let listing = DirListing::new(
            gallery.root().join("missing"),
            vec![],
            images(&["a.png"]),
        );

        let result = write_picture_pages(&gallery, &listing, "../index.html");
        match result {
            Err(GalleryError::PictureWrite { path, .. }) => {
                assert!(path.ends_with("missing/a.html"))
            }
            other => panic!("expected picture write error, got {other:?}"),
        }
    }
}
