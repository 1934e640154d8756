// src/data.rs
//
// Canonical output record plus the two pure decisions made per row:
// which rarity label applies, and which description text wins.

use serde::{Deserialize, Serialize};

use crate::params::{CategoryOptions, IconlessPolicy};

/// One scraped item, serialized verbatim into the category's JSON array.
/// Field order is part of the output format.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub item_type: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Map an icon's alt text to the category's rarity label. The wiki encodes
/// rarity only in the star-count digit of the alt text ("5 Stars", "Icon 4
/// Star" and similar), so a substring check is all there is.
pub fn rarity_label<'a>(alt: &str, opts: &'a CategoryOptions) -> &'a str {
    if alt.contains('5') {
        opts.five_star_label
    } else if alt.contains('4') {
        opts.four_star_label
    } else {
        opts.default_label
    }
}

/// Decide a row's `item_type`, or `None` when the row is dropped (no
/// rarity icon under [`IconlessPolicy::Skip`]).
pub fn item_type_for_row<'a>(
    icon_alt: Option<&str>,
    opts: &'a CategoryOptions,
    policy: IconlessPolicy,
) -> Option<&'a str> {
    match icon_alt {
        Some(alt) => Some(rarity_label(alt, opts)),
        None => match policy {
            IconlessPolicy::Skip => None,
            IconlessPolicy::IncludeDefault => Some(opts.default_label),
        },
    }
}

/// Description precedence: the detail page's own description wins; the
/// hello voice line is a character-only fallback.
pub fn pick_description(page: Option<String>, hello: Option<String>) -> Option<String> {
    page.or(hello)
}
