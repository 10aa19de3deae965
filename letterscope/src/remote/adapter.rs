//! Counting service response adapter

use letterscope_common::{Category, FrequencyMap};
use log::warn;
use serde_json::Value;

use crate::domain::RemoteError;

/// Convert a service answer into a [`FrequencyMap`] for `category`.
///
/// Keys are single letters, matched case-insensitively. Keys missing from the
/// answer are filled with zero; keys outside the category are dropped.
///
/// # Errors
/// Returns [`RemoteError::InvalidResponse`] if the answer is not a JSON object,
/// names the same letter twice (`"a"` and `"A"`), or a category key has a
/// value that is not a non-negative integer.
pub fn adapt_response(value: &Value, category: Category) -> Result<FrequencyMap, RemoteError> {
    let object = value.as_object().ok_or_else(|| {
        RemoteError::InvalidResponse(format!("expected a JSON object, got {}", json_kind(value)))
    })?;

    let mut counts = FrequencyMap::zeroed(category);
    let mut seen = vec![false; category.letters().len()];
    let mut dropped = Vec::new();

    for (key, raw) in object {
        let Some((letter, index)) =
            single_letter(key).and_then(|l| category.index_of(l).map(|i| (l, i)))
        else {
            dropped.push(key.as_str());
            continue;
        };
        if seen[index] {
            return Err(RemoteError::InvalidResponse(format!("letter {letter} appears twice")));
        }
        let count = raw.as_u64().ok_or_else(|| {
            RemoteError::InvalidResponse(format!(
                "count for \"{key}\" is not a non-negative integer: {raw}"
            ))
        })?;
        counts.set(letter, count);
        seen[index] = true;
    }

    if !dropped.is_empty() {
        warn!("Dropped {} keys outside {category}: {}", dropped.len(), dropped.join(", "));
    }
    let missing = seen.iter().filter(|&&s| !s).count();
    if missing > 0 {
        warn!("Counting service omitted {missing} of {} keys, filled with zero", seen.len());
    }

    Ok(counts)
}

/// Upper-cased letter if `key` is exactly one character
fn single_letter(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c.to_ascii_uppercase()),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
