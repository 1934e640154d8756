// src/specs/listing.rs
//! Scraping spec for the category listing pages.
//!
//! Ground truth is the single `article-table` on the page. Layout per row:
//! first cell is the small icon/number, second cell carries the item name
//! and the detail-page anchor, third cell the rarity star icon.

use std::error::Error;

use crate::core::html::{
    attr_value, has_class, inner_after_open_tag, next_open_tag_ci, next_tag_block_ci, opens_tag_ci,
};
use crate::core::sanitize::clean_text;
use crate::params::LISTING_TABLE_CLASS;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingRow {
    pub name: String,
    /// Site-relative detail link, e.g. `/wiki/Amber`.
    pub href: String,
    /// Alt text of the rarity icon; `None` when the cell has no image.
    pub icon_alt: Option<String>,
}

/// Extract all item rows from a listing document. A missing listing table
/// is a structural error and aborts the category run; a malformed name
/// cell likewise (the page format has changed and the output would be
/// garbage).
pub fn parse_listing(doc: &str) -> Result<Vec<ListingRow>, Box<dyn Error>> {
    let table = listing_table(doc)
        .ok_or_else(|| format!("{} table not found", LISTING_TABLE_CLASS))?;

    let mut out = Vec::new();
    let mut pos = 0usize;
    let mut header_seen = false;

    while let Some((tr_s, tr_e)) = next_tag_block_ci(table, "<tr", "</tr>", pos) {
        let tr = &table[tr_s..tr_e];
        pos = tr_e;

        // First row is the header
        if !header_seen {
            header_seen = true;
            continue;
        }

        let cells = td_cells(tr);

        let name_cell = cells
            .get(1)
            .ok_or_else(|| format!("listing row has no name cell: {}", clean_text(tr)))?;
        let name = clean_text(name_cell);
        let href = first_anchor_href(name_cell)
            .ok_or_else(|| format!("listing row has no detail link: {}", name))?;

        let icon_alt = cells.get(2).and_then(|c| first_image_alt(c));

        out.push(ListingRow { name, href, icon_alt });
    }

    Ok(out)
}

/// First `<table>` whose class list contains `article-table`.
fn listing_table(doc: &str) -> Option<&str> {
    let mut pos = 0usize;
    while let Some((t_s, t_e)) = next_open_tag_ci(doc, "<table", pos) {
        let opener = &doc[t_s..t_e];
        pos = t_e;
        if !has_class(opener, LISTING_TABLE_CLASS) {
            continue;
        }
        if let Some((b_s, b_e)) = next_tag_block_ci(doc, "<table", "</table>", t_s) {
            return Some(&doc[b_s..b_e]);
        }
    }
    None
}

/// Raw inner HTML of each `<td>` in a row, in order.
fn td_cells(tr: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut pos = 0usize;
    while let Some((td_s, td_e)) = next_tag_block_ci(tr, "<td", "</td>", pos) {
        cells.push(inner_after_open_tag(&tr[td_s..td_e]));
        pos = td_e;
    }
    cells
}

fn first_anchor_href(cell: &str) -> Option<String> {
    let mut pos = 0usize;
    while let Some((a_s, a_e)) = next_open_tag_ci(cell, "<a", pos) {
        let opener = &cell[a_s..a_e];
        pos = a_e;
        if !opens_tag_ci(opener, "a") {
            continue;
        }
        if let Some(href) = attr_value(opener, "href") {
            return Some(href.to_string());
        }
    }
    None
}

fn first_image_alt(cell: &str) -> Option<String> {
    let (i_s, i_e) = next_open_tag_ci(cell, "<img", 0)?;
    attr_value(&cell[i_s..i_e], "alt").map(str::to_string)
}
