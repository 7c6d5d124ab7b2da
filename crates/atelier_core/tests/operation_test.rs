//! Tests for caller request validation.

use atelier_core::{
    CatalogRequest, ExploreItemsRequest, ExploreOutfitRequest, GenerateNameRequest, InlineImage,
    OutfitImageRequest, Persona, RecommendRequest,
};

fn recommend_request(creativity_level: i64) -> RecommendRequest {
    RecommendRequest {
        mood: "开心".to_string(),
        weather: "晴朗".to_string(),
        closet_items: vec!["T恤".to_string(), "牛仔裤".to_string()],
        persona: Persona::default(),
        creativity_level,
    }
}

#[test]
fn test_recommend_request_returns_creativity() {
    let level = recommend_request(5).validate().expect("valid request");
    assert_eq!(level.get(), 5);
}

#[test]
fn test_recommend_request_rejects_out_of_range_creativity() {
    for level in [0, 11, -1, 100] {
        let err = recommend_request(level).validate().unwrap_err();
        assert!(err.names_field("creativityLevel"), "level {}", level);
    }
}

#[test]
fn test_recommend_request_reports_every_blank_field() {
    let request = RecommendRequest {
        mood: " ".to_string(),
        weather: String::new(),
        closet_items: vec![],
        persona: Persona::default(),
        creativity_level: 0,
    };

    let err = request.validate().unwrap_err();
    assert!(err.names_field("mood"));
    assert!(err.names_field("weather"));
    assert!(err.names_field("closetItems"));
    assert!(err.names_field("creativityLevel"));
}

#[test]
fn test_recommend_request_from_json() {
    let request: RecommendRequest = serde_json::from_str(
        r#"{"mood":"开心","weather":"晴朗","closetItems":["T恤","牛仔裤"],"creativityLevel":5}"#,
    )
    .expect("parses");
    assert!(request.persona.is_empty());
    assert!(request.validate().is_ok());
}

#[test]
fn test_explore_outfit_request_needs_selection() {
    let request = ExploreOutfitRequest {
        selected_items: vec!["".to_string()],
        mood: "放松".to_string(),
        weather: "多云".to_string(),
        persona: Persona::default(),
        creativity_level: 3,
    };
    let err = request.validate().unwrap_err();
    assert!(err.names_field("selectedItems"));
}

#[test]
fn test_explore_items_count_defaults_and_bounds() {
    assert_eq!(ExploreItemsRequest::default().validate().unwrap(), 10);
    assert!(ExploreItemsRequest { count: Some(0) }.validate().is_err());
    assert!(ExploreItemsRequest { count: Some(31) }.validate().is_err());
    assert_eq!(ExploreItemsRequest { count: Some(3) }.validate().unwrap(), 3);
}

#[test]
fn test_name_request_needs_attributes() {
    let err = GenerateNameRequest { attributes: vec![] }.validate().unwrap_err();
    assert!(err.names_field("attributes"));
}

#[test]
fn test_catalog_request_needs_fallback_name() {
    let request = CatalogRequest {
        image: InlineImage::from_bytes("image/png", b"png"),
        fallback_name: "  ".to_string(),
    };
    assert!(request.validate().unwrap_err().names_field("fallbackName"));
}

#[test]
fn test_image_request_needs_description() {
    let err = OutfitImageRequest::garments_only("").validate().unwrap_err();
    assert!(err.names_field("outfitDescription"));
}
