//! Parser for replies of the shape
//! `{"mood": {"score": 7, "justification": "..."}, "anxiety": {...}, ...}`.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::assessment::extractor::ReplyParser;
use crate::models::assessment::{Dimension, DimensionResult, DimensionResults, Score};

/// Parses the whole reply as one JSON object.
///
/// Failure is all-or-nothing at the syntax level: a reply that is not a JSON
/// object marks every dimension invalid. Once parsed, a missing or malformed
/// dimension only affects that dimension.
pub struct StructuredJsonParser;

impl ReplyParser for StructuredJsonParser {
    fn parse(&self, raw: &str) -> DimensionResults {
        let object = match serde_json::from_str::<Value>(raw) {
            Ok(Value::Object(object)) => object,
            Ok(other) => {
                warn!(kind = json_kind(&other), "reply JSON is not an object");
                return DimensionResults::from_fn(|_| DimensionResult::invalid());
            }
            Err(e) => {
                warn!("Error decoding response JSON: {e}");
                return DimensionResults::from_fn(|_| DimensionResult::invalid());
            }
        };

        DimensionResults::from_fn(|dimension| read_dimension(&object, dimension))
    }
}

fn read_dimension(object: &Map<String, Value>, dimension: Dimension) -> DimensionResult {
    let Some(entry) = object.get(dimension.key()).and_then(Value::as_object) else {
        debug!(%dimension, "dimension missing from reply JSON");
        return DimensionResult::empty();
    };

    let score = entry.get("score").and_then(score_from_json);
    let justification = entry.get("justification").and_then(text_from_json);

    DimensionResult::new(score, justification)
}

/// Integers become levels. Anything else non-null is carried as written.
fn score_from_json(value: &Value) -> Option<Score> {
    match value {
        Value::Null => None,
        Value::Number(n) => Some(match n.as_i64() {
            Some(level) => Score::Level(level),
            None => Score::Verbatim(n.to_string()),
        }),
        Value::String(s) => Some(Score::Verbatim(s.clone())),
        other => Some(Score::Verbatim(other.to_string())),
    }
}

fn text_from_json(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
