//! Recovery strategies, each a pure function from raw model text to an
//! optional payload.
//!
//! Strategies never fail loudly; `None` hands control to the next one.

use crate::{Contract, FieldType};
use regex::Regex;
use serde_json::{Map, Value};
use std::sync::LazyLock;

/// A single recovery strategy.
pub type Strategy = fn(&str, &Contract) -> Option<Value>;

/// Strategies in the order they are attempted.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("direct_parse", direct_parse),
    ("fenced_block", fenced_block),
    ("quote_normalization", quote_normalization),
    ("object_salvage", object_salvage),
    ("plain_string", plain_string),
];

static FENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:[A-Za-z0-9_-]*[ \t]*\r?\n)?(.*?)\s*```").expect("fence pattern is valid")
});

const SINGLE_QUOTES: [char; 3] = ['\'', '\u{2018}', '\u{2019}'];
const WRAPPING_QUOTES: [char; 6] = ['"', '\u{201C}', '\u{201D}', '\'', '\u{2018}', '\u{2019}'];

/// Parses the whole text as JSON.
pub fn direct_parse(raw: &str, contract: &Contract) -> Option<Value> {
    parse_payload(raw.trim(), contract)
}

/// Parses the content of the first fenced block.
pub fn fenced_block(raw: &str, contract: &Contract) -> Option<Value> {
    parse_payload(unfence(raw)?, contract)
}

/// Replaces single quotes with double quotes, then parses.
pub fn quote_normalization(raw: &str, contract: &Contract) -> Option<Value> {
    let source = unfence(raw).unwrap_or(raw);
    if !source.contains(SINGLE_QUOTES) {
        return None;
    }
    parse_payload(&normalize_quotes(source), contract)
}

/// Scans for a balanced `{...}` region mentioning an expected key and
/// parses it, with quote normalization as a second attempt.
pub fn object_salvage(raw: &str, contract: &Contract) -> Option<Value> {
    let key_pattern = contract
        .fields
        .iter()
        .map(|f| regex::escape(f.name))
        .collect::<Vec<_>>()
        .join("|");
    let mentions_key = Regex::new(&format!(r#"["'‘’]({})["'‘’]\s*:"#, key_pattern)).ok()?;

    balanced_objects(raw)
        .filter(|candidate| mentions_key.is_match(candidate))
        .find_map(|candidate| {
            parse_object(candidate).or_else(|| parse_object(&normalize_quotes(candidate)))
        })
}

/// Wraps the trimmed, quote-stripped text as the value of the contract's
/// only string field.
pub fn plain_string(raw: &str, contract: &Contract) -> Option<Value> {
    let field = contract.single_string_field()?;
    let text = unfence(raw).unwrap_or(raw).trim();
    let text = text.trim_matches(WRAPPING_QUOTES).trim();
    if text.is_empty() {
        return None;
    }
    let mut object = Map::new();
    object.insert(field.to_string(), Value::String(text.to_string()));
    Some(Value::Object(object))
}

fn unfence(raw: &str) -> Option<&str> {
    FENCE
        .captures(raw)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().trim())
}

fn normalize_quotes(text: &str) -> String {
    text.replace(SINGLE_QUOTES, "\"")
}

fn parse_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(Value::is_object)
}

/// Parses `text` and shapes it into an object payload.
///
/// A bare value is accepted when the contract has a single field of the
/// matching type, and is wrapped under that field's key.
fn parse_payload(text: &str, contract: &Contract) -> Option<Value> {
    let value = serde_json::from_str::<Value>(text).ok()?;
    if value.is_object() {
        return Some(value);
    }

    let field = contract.single_field()?;
    let fits = matches!(
        (&field.ty, &value),
        (FieldType::Array(_), Value::Array(_)) | (FieldType::String, Value::String(_))
    );
    if !fits {
        return None;
    }
    let mut object = Map::new();
    object.insert(field.name.to_string(), value);
    Some(Value::Object(object))
}

/// Every balanced brace region, outermost first, in order of appearance.
fn balanced_objects(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .filter(|(_, c)| *c == '{')
        .filter_map(move |(start, _)| balanced_end(&text[start..]).map(|end| &text[start..start + end]))
}

/// Byte length of the balanced object at the start of `text`.
fn balanced_end(text: &str) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (index, c) in text.char_indices() {
        if in_string {
            match c {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index + c.len_utf8());
                }
            }
            _ => {}
        }
    }
    None
}
