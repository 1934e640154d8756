// src/specs/voice.rs
//! Scraping spec for character `/Voice-Overs` sub-pages.
//!
//! The greeting heading's `id` is not uniform across the wiki: most pages
//! use plain `Hello`, Cyno's page says `Hello:_The_Present`, Heizou's
//! `Hello...`. The cascade below is that list of known special cases, in
//! lookup order. A new greeting variant means adding its id here — nothing
//! else changes.

use crate::core::html::{attr_value, next_open_tag_ci, next_tag_block_ci, opens_tag_ci, to_lower};
use crate::core::sanitize::clean_text;

/// Heading ids tried in order when looking for the hello voice line.
pub const HELLO_HEADING_IDS: [&str; 3] = ["Hello", "Hello:_The_Present", "Hello..."];

/// English text of the character's hello line, or `None` when every known
/// heading variant misses.
pub fn hello_line(doc: &str) -> Option<String> {
    HELLO_HEADING_IDS
        .iter()
        .copied()
        .find_map(|id| hello_for_heading(doc, id))
}

fn hello_for_heading(doc: &str, heading_id: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((th_s, th_e)) = next_open_tag_ci(doc, "<th", pos) {
        let opener = &doc[th_s..th_e];
        pos = th_e;
        // <thead> shares the prefix
        if !opens_tag_ci(opener, "th") {
            continue;
        }
        if attr_value(opener, "id") != Some(heading_id) {
            continue;
        }
        // The line lives in the cell following the heading
        let (td_s, td_e) = next_tag_block_ci(doc, "<td", "</td>", th_e)?;
        return english_span(&doc[td_s..td_e]);
    }
    None
}

/// Text of the first `<span lang="en">` in a cell.
fn english_span(cell: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((s_s, s_e)) = next_open_tag_ci(cell, "<span", pos) {
        let opener = &cell[s_s..s_e];
        pos = s_e;
        if attr_value(opener, "lang") != Some("en") {
            continue;
        }
        let close_rel = to_lower(&cell[s_e..]).find("</span>")?;
        let text = clean_text(&cell[s_e..s_e + close_rel]);
        return if text.is_empty() { None } else { Some(text) };
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vo_page(heading_id: &str) -> String {
        format!(
            r#"
            <table class="wikitable">
              <tr>
                <th id="{heading_id}">Hello</th>
                <td>
                  <span lang="zh">你好</span>
                  <span lang="en">Hi there! I'm Amber.</span>
                </td>
              </tr>
            </table>
            "#
        )
    }

    #[test]
    fn plain_hello_heading() {
        assert_eq!(
            hello_line(&vo_page("Hello")).as_deref(),
            Some("Hi there! I'm Amber.")
        );
    }

    #[test]
    fn cascade_covers_known_variants() {
        for id in HELLO_HEADING_IDS {
            assert!(hello_line(&vo_page(id)).is_some(), "variant {id} missed");
        }
    }

    #[test]
    fn unknown_heading_variant_misses() {
        assert_eq!(hello_line(&vo_page("Greetings")), None);
    }

    #[test]
    fn exact_id_match_required() {
        // th#Hello must not be satisfied by th#Hello:_The_Present and vice versa
        let doc = vo_page("Hello:_The_Present");
        assert_eq!(
            hello_line(&doc).as_deref(),
            Some("Hi there! I'm Amber."),
            "variant id should be found by its own cascade entry, not a prefix match"
        );
    }

    #[test]
    fn english_span_required() {
        let doc = r#"
            <table><tr><th id="Hello">Hello</th>
            <td><span lang="ja">こんにちは</span></td></tr></table>
        "#;
        assert_eq!(hello_line(doc), None);
    }

    #[test]
    fn thead_is_not_a_heading_cell() {
        let doc = r#"
            <table>
              <thead id="Hello"><tr><td><span lang="en">wrong</span></td></tr></thead>
              <tr><th id="Hello">Hello</th><td><span lang="en">right</span></td></tr>
            </table>
        "#;
        assert_eq!(hello_line(doc).as_deref(), Some("right"));
    }
}
