//! Tests for inline image encoding.

use atelier_core::InlineImage;

#[test]
fn test_data_uri_round_trip_preserves_bytes() {
    let bytes = vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a];
    let image = InlineImage::from_bytes("image/png", &bytes);

    let parsed = InlineImage::from_data_uri(&image.to_data_uri()).expect("valid data URI");

    assert_eq!(parsed, image);
    assert_eq!(parsed.decode().expect("decodes"), bytes);
}

#[test]
fn test_data_uri_without_base64_marker_rejected() {
    let err = InlineImage::from_data_uri("data:image/png,abcd").unwrap_err();
    assert!(err.names_field("dataUri"));
}

#[test]
fn test_data_uri_with_garbage_payload_rejected() {
    let err = InlineImage::from_data_uri("data:image/png;base64,@@@@").unwrap_err();
    assert!(err.to_string().contains("base64"));
}

#[test]
fn test_plain_url_is_not_a_data_uri() {
    assert!(InlineImage::from_data_uri("https://example.com/a.png").is_err());
}

#[test]
fn test_serializes_with_camel_case_keys() {
    let image = InlineImage::from_bytes("image/webp", b"abc");
    let json = serde_json::to_value(&image).unwrap();
    assert_eq!(json["mimeType"], "image/webp");
    assert_eq!(json["encodedBytes"], "YWJj");
}
