//! Integration tests for extraction followed by classification.
//!
//! These tests build pages the way a caller would (page items plus an
//! optional embedded payload) and check the verdicts end to end.

use engine::{classify, Classifier, FilterConfig, KeywordGroup};
use metadata::{extract, locate_payload, ItemRecord, MetadataTable, PageItem};

fn single_item_page(author: &str, title: &str, description: &str) -> (Vec<PageItem>, MetadataTable) {
    let items = vec![PageItem::new(1, Some("r-general")).with_caption(author, title)];
    let mut records = MetadataTable::new();
    records.insert(1, ItemRecord::new(1, author, title, description));
    (items, records)
}

fn create_test_page() -> (Vec<PageItem>, MetadataTable) {
    let items = vec![
        PageItem::new(10, Some("r-general")).with_caption("Painter", "Red Fox"),
        PageItem::new(11, Some("r-mature")).with_caption("Inker", "Catalog"),
        PageItem::new(12, Some("r-adult")).with_caption("Friend", "Night"),
        PageItem::new(13, Some("r-general")).with_caption("Spammer", "Buy"),
    ];
    let scripts = vec![
        "window.onload = init;".to_string(),
        r#"var descriptions = {"10": {"title": "Red Fox", "username": "Painter", "description": "jumps over the fence"}, "11": {"title": "Catalog", "username": "Inker", "description": "page one"}, "12": {"title": "Night", "username": "Friend", "description": ""}, "13": {"title": "Buy", "username": "Spammer", "description": "cheap cat pictures"}};"#.to_string(),
    ];

    let records = extract(&items, locate_payload(&scripts));
    (items, records)
}

#[test]
fn test_full_page_classification() {
    let (items, records) = create_test_page();
    assert_eq!(records.len(), 4);
    assert_eq!(records[&10].description, "jumps over the fence");

    let config = FilterConfig::new()
        .with_rating_classes(["r-general", "r-mature"])
        .with_blocked_artists(["spammer"])
        .with_keyword_lines(["fox fence", "cat"]);

    let verdicts = classify(&items, &records, &config);

    // 10: keyword group "fox fence" spans title and description
    // 11: "cat" does not match inside "Catalog"
    // 12: rating not permitted
    // 13: blocked artist
    assert!(verdicts.is_suppressed(10));
    assert!(!verdicts.is_suppressed(11));
    assert!(verdicts.is_suppressed(12));
    assert!(verdicts.is_suppressed(13));
}

#[test]
fn test_classify_is_idempotent() {
    let (items, records) = create_test_page();
    let config = FilterConfig::new()
        .with_rating_classes(["r-general"])
        .with_keyword_lines(["fox"]);

    let first = classify(&items, &records, &config);
    let second = classify(&items, &records, &config);
    assert_eq!(first, second);

    let classifier = Classifier::new(&config);
    assert_eq!(classifier.classify(&items, &records), first);
}

#[test]
fn test_allow_overrides_block() {
    let (items, records) = single_item_page("DualListed", "red fox", "");
    let config = FilterConfig::new()
        .with_rating_classes(["r-mature"])
        .with_blocked_artists(["duallisted"])
        .with_allowed_artists(["duallisted"])
        .with_keyword_lines(["red"]);

    let verdicts = classify(&items, &records, &config);
    assert!(!verdicts.is_suppressed(1));
}

#[test]
fn test_empty_keyword_group_is_inert() {
    let (items, records) = single_item_page("Anyone", "anything", "whatever text");
    let mut config = FilterConfig::new();
    config.blocked_keyword_groups = vec![KeywordGroup::parse("   "), KeywordGroup::parse("")];

    let verdicts = classify(&items, &records, &config);
    assert!(!verdicts.is_suppressed(1));
}

#[test]
fn test_and_within_group_or_across_groups() {
    let (items, records) = single_item_page("Anyone", "red fox jumps", "");

    let matching = FilterConfig::new().with_keyword_lines(["red fox", "cat"]);
    assert!(classify(&items, &records, &matching).is_suppressed(1));

    let partial = FilterConfig::new().with_keyword_lines(["red cat"]);
    assert!(!classify(&items, &records, &partial).is_suppressed(1));
}

#[test]
fn test_whole_word_boundary() {
    let (items, records) = single_item_page("Anyone", "catalog", "");
    let config = FilterConfig::new().with_keyword_lines(["cat"]);

    assert!(!classify(&items, &records, &config).is_suppressed(1));
}

#[test]
fn test_rating_exclusion_then_allow_override() {
    let items = vec![PageItem::new(1, Some("r-adult"))];
    let mut records = MetadataTable::new();
    records.insert(1, ItemRecord::new(1, "Friend", "Night", ""));

    let allowed = FilterConfig::new()
        .with_rating_classes(["general"])
        .with_allowed_artists(["friend"]);
    assert!(!classify(&items, &records, &allowed).is_suppressed(1));

    let not_allowed = FilterConfig::new().with_rating_classes(["general"]);
    assert!(classify(&items, &records, &not_allowed).is_suppressed(1));
}

#[test]
fn test_extraction_fallback_feeds_classifier() {
    let items = vec![PageItem::new(1, Some("r-general")).with_caption("Foo", "Bar")];
    let scripts = vec!["var descriptions = {broken".to_string()];

    let records = extract(&items, locate_payload(&scripts));
    assert_eq!(records[&1], ItemRecord::new(1, "Foo", "Bar", ""));

    let config = FilterConfig::new().with_blocked_artists(["foo"]);
    assert!(classify(&items, &records, &config).is_suppressed(1));
}

#[test]
fn test_fail_open_on_missing_metadata() {
    let (mut items, records) = create_test_page();
    items.push(PageItem::new(404, Some("r-adult")).with_caption("Spammer", "fox"));

    let config = FilterConfig::new()
        .with_rating_classes(["r-general"])
        .with_blocked_artists(["spammer"])
        .with_keyword_lines(["fox"]);

    let verdicts = classify(&items, &records, &config);
    assert_eq!(verdicts.as_map().get(&404), Some(&false));
}

#[test]
fn test_case_insensitive_matching() {
    let (items, records) = single_item_page("MiXeDCase", "LOUD TITLE", "");

    let by_artist = FilterConfig::new().with_blocked_artists(["mixedcase"]);
    assert!(classify(&items, &records, &by_artist).is_suppressed(1));

    let by_keyword = FilterConfig::new().with_keyword_lines(["loud"]);
    assert!(classify(&items, &records, &by_keyword).is_suppressed(1));
}

#[test]
fn test_deserialized_blank_groups_are_inert() {
    let (items, records) = single_item_page("Anyone", "a harmless title", "");
    let config: FilterConfig = serde_json::from_str(
        r#"{
            "enabled": true,
            "rating_classes": [],
            "blocked_artists": [],
            "allowed_artists": [],
            "blocked_keyword_groups": [[" "], [""]]
        }"#,
    )
    .unwrap();

    assert!(config.blocked_keyword_groups.iter().all(KeywordGroup::is_empty));
    assert!(!classify(&items, &records, &config).is_suppressed(1));
}

#[test]
fn test_keyword_order_does_not_change_verdicts() {
    let (items, records) = create_test_page();
    let lines = ["fox fence", "over jumps", "cheap pictures cat", "page one"];

    let forward = FilterConfig::new().with_keyword_lines(lines);

    let mut reversed = forward.clone();
    reversed.blocked_keyword_groups = forward
        .blocked_keyword_groups
        .iter()
        .rev()
        .map(|group| group.terms().iter().rev().cloned().collect())
        .collect();

    let expected = classify(&items, &records, &forward);
    assert_eq!(expected.suppressed_count(), 3);
    assert_eq!(classify(&items, &records, &reversed), expected);
}
