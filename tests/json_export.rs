// tests/json_export.rs
//
// Output-format tests for the category JSON files: 4-space indent, null
// fields, overwrite semantics, byte-identical reruns.

use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;

use gi_scrape::data::Item;
use gi_scrape::file;

fn tmp(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("gi_export_{name}"));
    let _ = fs::remove_file(&p);
    p
}

fn sample_items() -> Vec<Item> {
    vec![
        Item {
            name: "Amber".into(),
            item_type: "FourStarCharacter".into(),
            description: Some("Outrider of the Knights of Favonius.".into()),
            image_url: Some("https://static.example/Amber_Wish.png/".into()),
        },
        Item {
            name: "Zhongli".into(),
            item_type: "FiveStarCharacterLimited".into(),
            description: None,
            image_url: None,
        },
    ]
}

#[test]
fn four_space_indent_and_null_fields() {
    let p = tmp("indent.json");
    file::write_json(&p, &sample_items()).unwrap();

    let text = fs::read_to_string(&p).unwrap();
    assert!(text.starts_with("[\n    {\n        \"name\""), "got: {}", &text[..40.min(text.len())]);
    // Options serialize as JSON null, with the fixed field order
    assert!(text.contains("\"description\": null"));
    assert!(text.contains("\"image_url\": null"));
    assert!(!text.ends_with('\n'));
}

#[test]
fn round_trip_preserves_items() {
    let p = tmp("roundtrip.json");
    let items = sample_items();
    file::write_json(&p, &items).unwrap();

    let text = fs::read_to_string(&p).unwrap();
    let back: Vec<Item> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, items);
}

#[test]
fn rerun_is_byte_identical() {
    let p = tmp("idempotent.json");
    let items = sample_items();

    file::write_json(&p, &items).unwrap();
    let first = fs::read(&p).unwrap();
    file::write_json(&p, &items).unwrap();
    let second = fs::read(&p).unwrap();
    assert_eq!(first, second);
}

#[test]
fn overwrites_existing_file() {
    let p = tmp("overwrite.json");
    fs::write(&p, "not json, and much longer than the real output will be…").unwrap();

    file::write_json(&p, &Vec::<Item>::new()).unwrap();
    assert_eq!(fs::read_to_string(&p).unwrap(), "[]");
}

#[test]
fn out_dir_resolution() {
    use std::path::Path;
    assert_eq!(
        file::resolve_out_path(None, "genshin_weapons.json"),
        PathBuf::from("genshin_weapons.json")
    );
    assert_eq!(
        file::resolve_out_path(Some(Path::new("out")), "genshin_weapons.json"),
        PathBuf::from("out").join("genshin_weapons.json")
    );
}
