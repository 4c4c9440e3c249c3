//! Unit tests for embedding request items

use mme_domain::value_objects::EmbeddingInput;
use serde_json::json;

#[test]
fn test_text_item_wire_format() {
    let item = EmbeddingInput::text("hello");
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({"type": "text", "text": "hello"})
    );
}

#[test]
fn test_image_item_wire_format() {
    let item = EmbeddingInput::image_url("https://example.com/image1.jpg");
    assert_eq!(
        serde_json::to_value(&item).unwrap(),
        json!({"type": "image_url", "image_url": {"url": "https://example.com/image1.jpg"}})
    );
}

#[test]
fn test_mixed_items_parse_from_wire_format() {
    let items: Vec<EmbeddingInput> = serde_json::from_value(json!([
        {"type": "text", "text": "caption"},
        {"type": "image_url", "image_url": {"url": "https://example.com/a.png"}}
    ]))
    .unwrap();

    assert_eq!(
        items,
        vec![
            EmbeddingInput::text("caption"),
            EmbeddingInput::image_url("https://example.com/a.png"),
        ]
    );
}

#[test]
fn test_item_accessors() {
    let text = EmbeddingInput::text("caption");
    let image = EmbeddingInput::image_url("https://example.com/a.png");

    assert!(text.is_text());
    assert!(!image.is_text());
    assert_eq!(text.content(), "caption");
    assert_eq!(image.content(), "https://example.com/a.png");
}
