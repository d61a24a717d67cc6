use serde_json::{Map, Value};
use tracing::warn;

/// Returns the first balanced top-level JSON object embedded in `text`.
///
/// Scans from the first `{`, tracking string and escape state so braces
/// inside string literals do not affect depth. Returns `None` when no `{`
/// exists or the object never closes.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + 1]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Decodes the LLM reply into the analysis object.
///
/// The model is instructed to answer with bare JSON but routinely wraps it in
/// prose or code fences. Any failure (no object, unbalanced braces, invalid
/// JSON) yields an empty map; callers treat that as "analysis failed" rather
/// than an error.
///
/// Post-condition: when a `NutritionalAnalysis` section is present it always
/// carries a `serving_size` key, defaulted to `null`, so downstream consumers
/// need no existence check.
pub fn parse_analysis_response(response: &str) -> Map<String, Value> {
    let Some(span) = extract_json_object(response) else {
        warn!("no JSON object found in analysis response");
        return Map::new();
    };

    let mut map = match serde_json::from_str::<Value>(span) {
        Ok(Value::Object(map)) => map,
        Ok(_) => return Map::new(),
        Err(e) => {
            warn!("failed to decode analysis response as JSON: {}", e);
            return Map::new();
        }
    };

    if let Some(Value::Object(nutrition)) = map.get_mut("NutritionalAnalysis") {
        nutrition
            .entry("serving_size".to_string())
            .or_insert(Value::Null);
    }

    map
}
