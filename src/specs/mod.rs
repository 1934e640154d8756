// src/specs/mod.rs
//! # Page-scraping specs
//!
//! Each spec encodes *where the ground truth lives in the wiki's HTML* for
//! one kind of page, and nothing else:
//!
//! - `listing` — the `article-table` on a category list page
//!   (`/wiki/Character/List`, `/wiki/Weapon/List`). One `ListingRow` per
//!   table row: item name, detail href, rarity-icon alt text.
//! - `detail` — a per-item page. Description block and artwork URL.
//! - `voice` — a character's `/Voice-Overs` sub-page. English hello line,
//!   via an explicit heading-id cascade (the wiki is not consistent across
//!   entries; see `HELLO_HEADING_IDS`).
//!
//! Specs are pure: they take a fetched document and return extracted data.
//! Networking lives in `core::net`, orchestration in `scrape`, export in
//! `file`. That split keeps every extractor testable offline against
//! fixture HTML.
//!
//! Conventions:
//! - Case-insensitive tag detection via `core::html`; no full-document
//!   regexes, no DOM building.
//! - Text output is always entity-decoded, tag-stripped and
//!   whitespace-collapsed (`core::sanitize::clean_text`).
//! - A spec returns `Option`/`Err` and never logs; the caller decides what
//!   a miss means (local recovery vs aborting the run).

pub mod detail;
pub mod listing;
pub mod voice;
