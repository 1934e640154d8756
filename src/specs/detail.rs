// src/specs/detail.rs
//! Scraping spec for per-item detail pages.
//!
//! Two independent lookups, both best-effort from the caller's point of
//! view: the description block, and the full-size artwork URL.

use crate::core::html::{attr_value, has_class, next_open_tag_ci, opens_tag_ci, to_lower};
use crate::core::sanitize::clean_text;

/// Inner text of the first `<div class="description-content">`.
/// `None` when the page has no description block (or an empty one).
pub fn description(doc: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((d_s, d_e)) = next_open_tag_ci(doc, "<div", pos) {
        let opener = &doc[d_s..d_e];
        pos = d_e;
        if !has_class(opener, "description-content") {
            continue;
        }
        let close_rel = to_lower(&doc[d_e..]).find("</div>")?;
        let text = clean_text(&doc[d_e..d_e + close_rel]);
        return if text.is_empty() { None } else { Some(text) };
    }
    None
}

/// Artwork URL: the `src` of the image inside the first anchor titled
/// `anchor_title` ("Wish" on character pages, "Base" on weapon pages),
/// truncated at the `revision` suffix the CDN appends.
pub fn image_url(doc: &str, anchor_title: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_open_tag_ci(doc, "<a", pos) {
        let opener = &doc[a_s..a_e];
        pos = a_e;
        if !opens_tag_ci(opener, "a") {
            continue;
        }
        if attr_value(opener, "title") != Some(anchor_title) {
            continue;
        }

        let close = to_lower(&doc[a_e..]).find("</a>")? + a_e;
        let anchor_inner = &doc[a_e..close];
        let (i_s, i_e) = next_open_tag_ci(anchor_inner, "<img", 0)?;
        let src = attr_value(&anchor_inner[i_s..i_e], "src")?;
        return Some(strip_revision(src).to_string());
    }
    None
}

/// `…/Amber.png/revision/latest?cb=123` → `…/Amber.png/`
fn strip_revision(src: &str) -> &str {
    match src.find("revision") {
        Some(i) => &src[..i],
        None => src,
    }
}
