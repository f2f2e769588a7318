//! Parser for free-form replies of the shape
//! `Mood: Severity score - 7. Justification: Patient reports low energy.`

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::assessment::extractor::ReplyParser;
use crate::models::assessment::{Dimension, DimensionResult, DimensionResults, Score};

/// Per-dimension patterns, indexed in `Dimension::ALL` order.
struct Patterns {
    score: Regex,
    justification: Regex,
}

static PATTERNS: LazyLock<[Patterns; 4]> = LazyLock::new(|| {
    Dimension::ALL.map(|d| {
        let label = regex::escape(d.label());
        Patterns {
            score: Regex::new(&format!(r"(?is){label}.*?Severity score - ([0-9]+)"))
                .expect("static regex"),
            justification: Regex::new(&format!(r"(?is){label}.*?Justification:\s*(.+?)(?:\n|$)"))
                .expect("static regex"),
        }
    })
});

fn patterns(dimension: Dimension) -> &'static Patterns {
    &PATTERNS[dimension.index()]
}

/// Scans the reply twice per dimension: once for the score, once for the
/// justification. Either may be found without the other. Never fails.
pub struct LabeledTextParser;

impl ReplyParser for LabeledTextParser {
    fn parse(&self, raw: &str) -> DimensionResults {
        DimensionResults::from_fn(|dimension| {
            let result = DimensionResult::new(
                find_score(raw, dimension),
                find_justification(raw, dimension),
            );
            if result.score.is_none() {
                debug!(%dimension, "no severity score in reply");
            }
            result
        })
    }
}

fn find_score(raw: &str, dimension: Dimension) -> Option<Score> {
    let digits = patterns(dimension).score.captures(raw)?.get(1)?.as_str();

    let score = match digits.parse::<i64>() {
        Ok(n) => Score::Level(n),
        // More digits than fit an i64; keep them as written.
        Err(_) => Score::Verbatim(digits.to_string()),
    };
    if !score.is_in_range() {
        warn!(%dimension, %score, "severity score outside 0-10");
    }
    Some(score)
}

fn find_justification(raw: &str, dimension: Dimension) -> Option<String> {
    patterns(dimension)
        .justification
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
}
