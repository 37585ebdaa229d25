//! Documentation Model Tests
//!
//! Decoding of the host's JSON payloads

use serde_json::json;
use supernova_xliff::{
    groups_from_json, pages_from_json, BlockContent, BlockKind, ExportOptions, RegistryScope,
    XliffError,
};

#[test]
fn should_decode_text_blocks_with_spans() {
    let pages = json!([{
        "persistentId": "p1",
        "name": "Intro",
        "blocks": [{
            "id": "h1",
            "type": "Heading",
            "text": { "spans": [
                { "text": "Hello, ", "attributes": [{ "type": "Bold" }] },
                { "text": "world!", "attributes": [] }
            ] },
            "children": []
        }]
    }]);
    let pages = pages_from_json(&pages.to_string()).unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].persistent_id, "p1");
    assert_eq!(pages[0].name, "Intro");

    let block = &pages[0].blocks[0];
    assert_eq!(block.kind(), BlockKind::Heading);
    let text = block.as_text().expect("heading carries text");
    assert_eq!(text.plain_text(), "Hello, world!");
}

#[test]
fn should_decode_opaque_kinds_and_keep_their_children() {
    let pages = json!([{
        "persistentId": "p1",
        "blocks": [{
            "id": "img",
            "type": "Image",
            "url": "https://example.com/a.png",
            "children": [{ "id": "t1", "type": "Text", "text": { "spans": [] } }]
        }]
    }]);
    let pages = pages_from_json(&pages.to_string()).unwrap();
    let image = &pages[0].blocks[0];
    assert!(matches!(image.content, BlockContent::Image));
    assert!(image.as_text().is_none());
    assert_eq!(image.children.len(), 1);
    assert_eq!(image.children[0].kind(), BlockKind::Text);
}

#[test]
fn should_map_unknown_kinds_to_unsupported() {
    let pages = json!([{
        "persistentId": "p1",
        "blocks": [{ "id": "x", "type": "FigmaFrames", "frames": [] }]
    }]);
    let pages = pages_from_json(&pages.to_string()).unwrap();
    assert_eq!(pages[0].blocks[0].kind(), BlockKind::Unsupported);
    assert_eq!(pages[0].blocks[0].kind().to_string(), "Unsupported");
}

#[test]
fn should_default_missing_children_and_blocks() {
    let pages = json!([{ "persistentId": "p1" }]);
    let pages = pages_from_json(&pages.to_string()).unwrap();
    assert!(pages[0].blocks.is_empty());
}

#[test]
fn should_reject_text_block_without_text() {
    let pages = json!([{
        "persistentId": "p1",
        "blocks": [{ "id": "t1", "type": "Text" }]
    }]);
    let err = pages_from_json(&pages.to_string()).unwrap_err();
    assert!(matches!(err, XliffError::Json(_)));
    assert!(err.to_string().starts_with("invalid documentation input"));
}

#[test]
fn should_accept_groups_with_any_shape() {
    let groups = json!([{ "id": "g1", "title": "Foundations", "childrenIds": ["p1"] }, {}]);
    let groups = groups_from_json(&groups.to_string()).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].title, "Foundations");
}

#[test]
fn should_parse_options_with_defaults() {
    let options = ExportOptions::from_json("null").unwrap();
    assert_eq!(options.registry_scope, RegistryScope::Export);
    assert!(options.log_duplicates);

    let options = ExportOptions::from_json(r#"{ "registryScope": "session" }"#).unwrap();
    assert_eq!(options.registry_scope, RegistryScope::Session);
    assert!(options.log_duplicates);
}

#[test]
fn should_reject_unknown_option_values() {
    let err = ExportOptions::from_json(r#"{ "registryScope": "forever" }"#).unwrap_err();
    assert!(matches!(err, XliffError::InvalidOptions(_)));

    let err = ExportOptions::from_json(r#"{ "targetLanguage": "de" }"#).unwrap_err();
    assert!(matches!(err, XliffError::InvalidOptions(_)));
}
