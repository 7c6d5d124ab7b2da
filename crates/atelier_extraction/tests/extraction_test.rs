//! Tests for payload recovery and contract validation.

use atelier_extraction::{
    Contract, FieldSpec, FieldType, extract, extract_validated, validate,
};
use serde::Deserialize;
use serde_json::json;

const RECOMMENDATION: Contract = Contract::new(
    "recommend_from_closet",
    &[
        FieldSpec::required("recommendedOutfit", FieldType::String),
        FieldSpec::optional("imagePromptDetails", FieldType::String),
    ],
);

const NAME: Contract = Contract::new(
    "generate_name",
    &[FieldSpec::required("name", FieldType::String)],
);

const ATTRIBUTES: Contract = Contract::new(
    "identify_attributes",
    &[FieldSpec::required(
        "attributes",
        FieldType::Array(&FieldType::String),
    )],
);

const SCORED: Contract = Contract::new(
    "scored",
    &[
        FieldSpec::required("score", FieldType::Number),
        FieldSpec::required("rank", FieldType::Integer),
        FieldSpec::optional("featured", FieldType::Boolean),
    ],
);

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Recommendation {
    recommended_outfit: String,
    image_prompt_details: Option<String>,
}

const PAYLOAD: &str = r#"{"recommendedOutfit":"白色T恤配牛仔裤","imagePromptDetails":"白色T恤和浅蓝色牛仔裤"}"#;

#[test]
fn test_fenced_payload_equals_direct_parse() {
    let direct = extract(PAYLOAD, &RECOMMENDATION).unwrap();
    let fenced = extract(&format!("```json\n{}\n```", PAYLOAD), &RECOMMENDATION).unwrap();
    assert_eq!(direct, fenced);
}

#[test]
fn test_fence_with_surrounding_prose() {
    let raw = format!("好的，这是推荐：\n```json\n{}\n```\n希望你喜欢！", PAYLOAD);
    let direct = extract(PAYLOAD, &RECOMMENDATION).unwrap();
    assert_eq!(extract(&raw, &RECOMMENDATION).unwrap(), direct);
}

#[test]
fn test_single_quotes_recover_same_payload() {
    let single = PAYLOAD.replace('"', "'");
    let direct = extract(PAYLOAD, &RECOMMENDATION).unwrap();
    assert_eq!(extract(&single, &RECOMMENDATION).unwrap(), direct);
}

#[test]
fn test_object_salvaged_from_prose() {
    let raw = format!("根据你的心情，我建议如下 {} 祝你愉快。", PAYLOAD);
    let payload = extract(&raw, &RECOMMENDATION).unwrap();
    assert_eq!(payload["recommendedOutfit"], json!("白色T恤配牛仔裤"));
}

#[test]
fn test_salvage_skips_objects_without_expected_keys() {
    let raw = format!("示例 {{\"other\": 1}} 结果 {}", PAYLOAD);
    let payload = extract(&raw, &RECOMMENDATION).unwrap();
    assert!(payload.get("other").is_none());
    assert_eq!(payload["imagePromptDetails"], json!("白色T恤和浅蓝色牛仔裤"));
}

#[test]
fn test_plain_prose_wraps_single_string_field() {
    let payload = extract("\"优雅红色丝绸裙\"\n", &NAME).unwrap();
    assert_eq!(payload, json!({"name": "优雅红色丝绸裙"}));

    let payload = extract("  复古牛仔夹克 ", &NAME).unwrap();
    assert_eq!(payload, json!({"name": "复古牛仔夹克"}));
}

#[test]
fn test_plain_prose_fails_for_multi_field_contract() {
    let err = extract("这是一套很好看的衣服", &RECOMMENDATION).unwrap_err();
    assert_eq!(err.raw, "这是一套很好看的衣服");
    assert_eq!(err.expected_keys, vec!["recommendedOutfit", "imagePromptDetails"]);
}

#[test]
fn test_bare_array_wraps_into_single_array_field() {
    let payload = extract(r#"["红色", "棉布", "连衣裙"]"#, &ATTRIBUTES).unwrap();
    assert_eq!(payload, json!({"attributes": ["红色", "棉布", "连衣裙"]}));
}

#[test]
fn test_validation_drops_unknown_fields() {
    let payload = json!({"recommendedOutfit": "风衣", "extra": true});
    let validated = validate(&payload, &RECOMMENDATION).unwrap();
    assert_eq!(validated.len(), 1);
    assert!(validated.get("extra").is_none());
}

#[test]
fn test_validation_names_missing_required_field() {
    let err = validate(&json!({"imagePromptDetails": "x"}), &RECOMMENDATION).unwrap_err();
    assert!(err.names_field("recommendedOutfit"));
    assert!(!err.names_field("imagePromptDetails"));
}

#[test]
fn test_validation_rejects_blank_required_string() {
    let err = validate(&json!({"name": "   "}), &NAME).unwrap_err();
    assert!(err.names_field("name"));
}

#[test]
fn test_invalid_optional_field_is_dropped() {
    let payload = json!({"recommendedOutfit": "风衣", "imagePromptDetails": ["a"]});
    let validated = validate(&payload, &RECOMMENDATION).unwrap();
    assert!(validated.get("imagePromptDetails").is_none());
}

#[test]
fn test_numeric_and_boolean_coercion() {
    let payload = json!({"score": "4.5", "rank": "2", "featured": "TRUE"});
    let validated = validate(&payload, &SCORED).unwrap();
    assert_eq!(validated["score"], json!(4.5));
    assert_eq!(validated["rank"], json!(2));
    assert_eq!(validated["featured"], json!(true));
}

#[test]
fn test_uncoercible_types_are_reported() {
    let err = validate(&json!({"score": "high", "rank": 1.5}), &SCORED).unwrap_err();
    assert!(err.names_field("score"));
    assert!(err.names_field("rank"));
}

#[test]
fn test_array_elements_checked_uniformly() {
    let err = validate(&json!({"attributes": ["红色", {"x": 1}]}), &ATTRIBUTES).unwrap_err();
    assert!(err.names_field("attributes[1]"));

    let validated = validate(&json!({"attributes": ["红色", 42]}), &ATTRIBUTES).unwrap();
    assert_eq!(validated["attributes"], json!(["红色", "42"]));
}

#[test]
fn test_extract_validated_leaves_no_fence_characters() {
    let raw = format!("```json\n{}\n```", PAYLOAD);
    let result: Recommendation = extract_validated(&raw, &RECOMMENDATION).unwrap();
    assert!(!result.recommended_outfit.contains('`'));
    let details = result.image_prompt_details.unwrap();
    assert!(!details.contains('`'));
}
