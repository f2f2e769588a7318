//! Turns a raw model reply into one result per dimension.
//!
//! Two reply formats are supported, each behind the [`ReplyParser`] trait.
//! The format is picked by configuration, never guessed from the reply.
//!
//! Both parsers are total: every call yields exactly four results, whatever the
//! input. They differ in how they degrade:
//! - labeled text degrades per field (score and justification are independent)
//! - structured JSON fails the whole reply on a syntax error, but degrades per
//!   dimension when keys are missing

use crate::assessment::labeled_text::LabeledTextParser;
use crate::assessment::structured_json::StructuredJsonParser;
use crate::models::assessment::{DimensionResults, ReplyFormat};

/// A strategy for reading per-dimension results out of a model reply.
pub trait ReplyParser: Send + Sync {
    fn parse(&self, raw: &str) -> DimensionResults;
}

impl ReplyFormat {
    pub fn parser(self) -> &'static dyn ReplyParser {
        match self {
            ReplyFormat::LabeledText => &LabeledTextParser,
            ReplyFormat::StructuredJson => &StructuredJsonParser,
        }
    }
}

pub fn extract(raw_reply: &str, format: ReplyFormat) -> DimensionResults {
    format.parser().parse(raw_reply)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::assessment::{
        Dimension, DimensionResult, Score, INVALID_RESPONSE_FORMAT, NOT_PROVIDED,
    };

    const FORMATS: [ReplyFormat; 2] = [ReplyFormat::LabeledText, ReplyFormat::StructuredJson];

    #[test]
    fn test_totality_over_awkward_inputs() {
        let inputs = [
            "",
            "   ",
            "\n\n",
            "{",
            "null",
            "Mood: Severity score - ",
            "Justification:",
            "{\"mood\": {\"score\": 1}}",
            "Ünïcödé — mood ✓ Severity score - 3",
        ];
        for format in FORMATS {
            for input in inputs {
                let r = extract(input, format);
                let dims: Vec<_> = r.iter().map(|(d, _)| d).collect();
                assert_eq!(dims, Dimension::ALL, "format={format} input={input:?}");
                for (_, result) in r.iter() {
                    assert!(!result.justification.is_empty());
                }
            }
        }
    }

    #[test]
    fn test_example_labeled_text() {
        let raw = "Mood: Severity score - 7. Justification: Patient reports low energy.\nAnxiety: Severity score - 3. Justification: Mild worry.";
        let r = extract(raw, ReplyFormat::LabeledText);

        assert_eq!(
            r.get(Dimension::Mood),
            &DimensionResult::new(
                Some(Score::Level(7)),
                Some("Patient reports low energy.".to_string())
            )
        );
        assert_eq!(
            r.get(Dimension::Anxiety),
            &DimensionResult::new(Some(Score::Level(3)), Some("Mild worry.".to_string()))
        );
        assert_eq!(r.get(Dimension::Depression).score, None);
        assert_eq!(r.get(Dimension::Depression).justification, NOT_PROVIDED);
        assert_eq!(r.get(Dimension::Suicidality).score, None);
        assert_eq!(r.get(Dimension::Suicidality).justification, NOT_PROVIDED);
    }

    #[test]
    fn test_example_not_json() {
        let r = extract("not json", ReplyFormat::StructuredJson);
        for (_, result) in r.iter() {
            assert_eq!(result.score, None);
            assert_eq!(result.justification, INVALID_RESPONSE_FORMAT);
        }
    }

    #[test]
    fn test_example_partial_json() {
        let r = extract(
            r#"{"mood":{"score":5,"justification":"stable"}}"#,
            ReplyFormat::StructuredJson,
        );
        assert_eq!(r.get(Dimension::Mood).score, Some(Score::Level(5)));
        assert_eq!(r.get(Dimension::Mood).justification, "stable");
        for d in [Dimension::Anxiety, Dimension::Depression, Dimension::Suicidality] {
            assert_eq!(r.get(d).score, None);
            assert_eq!(r.get(d).justification, NOT_PROVIDED);
        }
    }

    #[test]
    fn test_same_reply_reads_differently_per_format() {
        let raw = "Mood: Severity score - 4. Justification: euthymic";
        assert_eq!(
            extract(raw, ReplyFormat::LabeledText).get(Dimension::Mood).score,
            Some(Score::Level(4))
        );
        assert_eq!(
            extract(raw, ReplyFormat::StructuredJson)
                .get(Dimension::Mood)
                .justification,
            INVALID_RESPONSE_FORMAT
        );
    }
}
