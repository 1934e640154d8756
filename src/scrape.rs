// src/scrape.rs
//
// The fetch-parse-accumulate loop for one category. Strictly sequential:
// one row, one item, one page fetch at a time. Transport failures abort
// the run; per-field extraction misses degrade to null and keep going.

use std::error::Error;

use crate::{
    core::net,
    data::{self, Item},
    params::{CategoryOptions, IconlessPolicy, ORIGIN, VOICE_OVER_SUFFIX, WIKI_PREFIX},
    progress::Progress,
    specs::{detail, listing, voice},
};

pub struct CategoryBundle {
    pub items: Vec<Item>,
    /// Rows dropped under `IconlessPolicy::Skip`.
    pub skipped_rows: usize,
}

pub fn collect_category(
    opts: &CategoryOptions,
    iconless: IconlessPolicy,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<CategoryBundle, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {} listing…", opts.name));
    }
    let doc = net::http_get(&join!(ORIGIN, opts.list_path))?;
    let rows = listing::parse_listing(&doc)?;

    if let Some(p) = progress.as_deref_mut() {
        p.begin(rows.len());
    }

    let mut items: Vec<Item> = Vec::with_capacity(rows.len());
    let mut skipped_rows = 0usize;

    for row in rows {
        let detail_doc = net::http_get(&join!(ORIGIN, &row.href))?;
        let description = detail::description(&detail_doc);

        let image_url = detail::image_url(&detail_doc, opts.image_anchor_title);
        if image_url.is_none() {
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(&row.name, "image");
            }
            loge!("{}: no '{}' artwork on {}", opts.name, opts.image_anchor_title, row.href);
        }

        let hello = if opts.is_character {
            let vo_url = voice_over_url(&row.href);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&vo_url);
            }
            let vo_doc = net::http_get(&vo_url)?;
            let line = voice::hello_line(&vo_doc);
            if line.is_none() {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&row.name, "hello line");
                }
                loge!("{}: no hello line on {}", opts.name, vo_url);
            }
            line
        } else {
            None
        };

        let item_type = match data::item_type_for_row(row.icon_alt.as_deref(), opts, iconless) {
            Some(label) => label,
            None => {
                skipped_rows += 1;
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&row.name, "rarity icon (row dropped)");
                }
                loge!("{}: no rarity icon for {}, row dropped", opts.name, row.name);
                continue;
            }
        };

        let item = Item {
            name: row.name,
            item_type: s!(item_type),
            description: data::pick_description(description, hello),
            image_url,
        };
        if let Some(p) = progress.as_deref_mut() {
            p.item_done(&item.name);
        }
        items.push(item);
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    Ok(CategoryBundle { items, skipped_rows })
}

/// `/wiki/Amber` → `https://…/wiki/Amber/Voice-Overs`.
/// The original tool dropped the `/wiki/` prefix here and leaned on a
/// server redirect; building the canonical path skips that round trip.
fn voice_over_url(href: &str) -> String {
    let page = href.strip_prefix(WIKI_PREFIX).unwrap_or(href);
    join!(ORIGIN, WIKI_PREFIX, page, VOICE_OVER_SUFFIX)
}
