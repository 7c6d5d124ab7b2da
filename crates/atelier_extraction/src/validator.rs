//! Field-contract validation with conservative type coercion.

use crate::{Contract, FieldSpec, FieldType};
use atelier_error::{FieldViolation, ValidationError};
use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};

/// Checks `payload` against `contract`.
///
/// Declared fields are coerced to their declared type where the conversion
/// is unambiguous; undeclared fields are dropped. A required field that is
/// missing, null, blank, or of an incompatible type is a violation. An
/// optional field that fails coercion is dropped with a warning, as is a
/// blank string element inside an array.
#[tracing::instrument(skip_all, fields(contract = contract.name))]
pub fn validate(payload: &Value, contract: &Contract) -> Result<Map<String, Value>, ValidationError> {
    let Value::Object(object) = payload else {
        return Err(ValidationError::field(
            contract.name,
            "$",
            format!("expected an object, got {}", kind_of(payload)),
        ));
    };

    let mut violations = Vec::new();
    let validated = validate_fields(object, contract.fields, "", &mut violations);

    if violations.is_empty() {
        Ok(validated)
    } else {
        tracing::debug!(count = violations.len(), "Payload failed its contract");
        Err(ValidationError::new(contract.name, violations))
    }
}

/// Validates `payload` and deserializes the result into `T`.
pub fn validate_into<T: DeserializeOwned>(
    payload: &Value,
    contract: &Contract,
) -> Result<T, ValidationError> {
    let validated = validate(payload, contract)?;
    serde_json::from_value(Value::Object(validated))
        .map_err(|e| ValidationError::field(contract.name, "$", e.to_string()))
}

fn validate_fields(
    object: &Map<String, Value>,
    fields: &[FieldSpec],
    prefix: &str,
    violations: &mut Vec<FieldViolation>,
) -> Map<String, Value> {
    let mut validated = Map::new();

    for spec in fields {
        let path = if prefix.is_empty() {
            spec.name.to_string()
        } else {
            format!("{}.{}", prefix, spec.name)
        };

        let value = match object.get(spec.name) {
            Some(Value::Null) | None => {
                if spec.required {
                    violations.push(FieldViolation::new(&path, "missing required field"));
                }
                continue;
            }
            Some(value) => value,
        };

        let mut problems = Vec::new();
        let coerced = coerce(value, &spec.ty, &path, &mut problems);

        if spec.required && is_blank_text(&coerced) {
            problems.push(FieldViolation::new(&path, "must not be blank"));
        }

        match (problems.is_empty(), spec.required) {
            (true, _) => {
                validated.insert(spec.name.to_string(), coerced);
            }
            (false, true) => violations.extend(problems),
            (false, false) => {
                tracing::warn!(field = %path, "Dropping optional field that failed its contract");
            }
        }
    }

    validated
}

fn coerce(value: &Value, ty: &FieldType, path: &str, problems: &mut Vec<FieldViolation>) -> Value {
    match (ty, value) {
        (FieldType::String, Value::String(text)) => Value::String(text.trim().to_string()),
        (FieldType::String, Value::Number(n)) => Value::String(n.to_string()),
        (FieldType::String, Value::Bool(b)) => Value::String(b.to_string()),

        (FieldType::Integer, Value::Number(n)) => match integral(n) {
            Some(int) => Value::Number(int),
            None => mismatch(ty, value, path, problems),
        },
        (FieldType::Integer, Value::String(text)) => match text.trim().parse::<i64>() {
            Ok(int) => Value::Number(int.into()),
            Err(_) => mismatch(ty, value, path, problems),
        },

        (FieldType::Number, Value::Number(_)) => value.clone(),
        (FieldType::Number, Value::String(text)) => {
            match text.trim().parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Value::Number(n),
                None => mismatch(ty, value, path, problems),
            }
        }

        (FieldType::Boolean, Value::Bool(_)) => value.clone(),
        (FieldType::Boolean, Value::String(text)) => match text.trim().to_ascii_lowercase().as_str() {
            "true" => Value::Bool(true),
            "false" => Value::Bool(false),
            _ => mismatch(ty, value, path, problems),
        },

        (FieldType::Array(element), Value::Array(items)) => Value::Array(
            items
                .iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    let item_path = format!("{}[{}]", path, index);
                    let coerced = coerce(item, element, &item_path, problems);
                    if is_blank_text(&coerced) {
                        tracing::warn!(field = %item_path, "Dropping blank array element");
                        return None;
                    }
                    Some(coerced)
                })
                .collect(),
        ),

        (FieldType::Object(fields), Value::Object(object)) => {
            Value::Object(validate_fields(object, fields, path, problems))
        }

        _ => mismatch(ty, value, path, problems),
    }
}

fn mismatch(ty: &FieldType, value: &Value, path: &str, problems: &mut Vec<FieldViolation>) -> Value {
    problems.push(FieldViolation::new(
        path,
        format!("expected {}, got {}", ty.describe(), kind_of(value)),
    ));
    Value::Null
}

fn integral(n: &Number) -> Option<Number> {
    if n.is_i64() || n.is_u64() {
        return Some(n.clone());
    }
    n.as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| Number::from(f as i64))
}

fn is_blank_text(value: &Value) -> bool {
    matches!(value, Value::String(text) if text.trim().is_empty())
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ITEM_FIELDS: &[FieldSpec] = &[
        FieldSpec::required("name", FieldType::String),
        FieldSpec::optional("rank", FieldType::Integer),
    ];
    const ITEMS: Contract = Contract::new(
        "items",
        &[FieldSpec::required(
            "items",
            FieldType::Array(&FieldType::Object(ITEM_FIELDS)),
        )],
    );

    #[test]
    fn test_nested_paths_name_the_offending_element() {
        let payload = json!({"items": [{"name": "a"}, {"name": "b"}, {"rank": 3}]});
        let err = validate(&payload, &ITEMS).unwrap_err();
        assert!(err.names_field("items[2].name"));
        assert_eq!(err.violations.len(), 1);
    }

    #[test]
    fn test_integral_float_coerces_to_integer() {
        let payload = json!({"items": [{"name": "a", "rank": 2.0}]});
        let validated = validate(&payload, &ITEMS).unwrap();
        assert_eq!(validated["items"][0]["rank"], json!(2));
    }

    #[test]
    fn test_blank_elements_dropped() {
        const TAGS: Contract = Contract::new(
            "tags",
            &[FieldSpec::required("tags", FieldType::Array(&FieldType::String))],
        );
        let payload = json!({"tags": ["红色", "", "  ", "连衣裙"]});
        let validated = validate(&payload, &TAGS).unwrap();
        assert_eq!(validated["tags"], json!(["红色", "连衣裙"]));
    }

    #[test]
    fn test_non_object_payload_rejected() {
        let err = validate(&json!("text"), &ITEMS).unwrap_err();
        assert!(err.names_field("$"));
    }
}
