// src/params.rs
use std::path::PathBuf;

// Net config
pub const ORIGIN: &str = "https://genshin-impact.fandom.com";
pub const WIKI_PREFIX: &str = "/wiki/";
pub const VOICE_OVER_SUFFIX: &str = "/Voice-Overs";

// Listing pages
pub const CHARACTER_LIST_PATH: &str = "/wiki/Character/List";
pub const WEAPON_LIST_PATH: &str = "/wiki/Weapon/List";
pub const LISTING_TABLE_CLASS: &str = "article-table";

// Output
pub const CHARACTERS_FILE: &str = "genshin_characters.json";
pub const WEAPONS_FILE: &str = "genshin_weapons.json";

/// What to do with a listing row whose rarity cell carries no icon image.
/// The wiki occasionally has these; they may still be valid items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconlessPolicy {
    /// Drop the row (original site behavior), but count and report it.
    Skip,
    /// Keep the row under the category's default label.
    IncludeDefault,
}

/// One category run, passed as plain data. Two canonical instances exist;
/// see [`characters`] and [`weapons`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryOptions {
    pub name: &'static str,
    pub list_path: &'static str,
    pub out_file: &'static str,
    pub five_star_label: &'static str,
    pub four_star_label: &'static str,
    pub default_label: &'static str,
    /// `title` attribute of the anchor wrapping the item artwork on the
    /// detail page ("Wish" for characters, "Base" for weapons).
    pub image_anchor_title: &'static str,
    pub is_character: bool,
}

pub fn characters() -> CategoryOptions {
    CategoryOptions {
        name: "characters",
        list_path: CHARACTER_LIST_PATH,
        out_file: CHARACTERS_FILE,
        five_star_label: "FiveStarCharacterLimited",
        four_star_label: "FourStarCharacter",
        default_label: "FourStarCharacter",
        image_anchor_title: "Wish",
        is_character: true,
    }
}

pub fn weapons() -> CategoryOptions {
    CategoryOptions {
        name: "weapons",
        list_path: WEAPON_LIST_PATH,
        out_file: WEAPONS_FILE,
        five_star_label: "FiveStarWeapon",
        four_star_label: "FourStarWeapon",
        default_label: "ThreeStarItem",
        image_anchor_title: "Base",
        is_character: false,
    }
}

/// Parsed CLI parameters.
#[derive(Clone, Debug)]
pub struct Params {
    pub categories: Vec<CategoryOptions>,
    pub out_dir: Option<PathBuf>,
    pub iconless: IconlessPolicy,
}

impl Params {
    pub fn new() -> Self {
        Self {
            categories: vec![characters(), weapons()],
            out_dir: None,
            iconless: IconlessPolicy::Skip,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}
