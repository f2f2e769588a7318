use std::fmt;

use clap::ValueEnum;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// Placeholder justification when a reply carries no justification for a dimension.
pub const NOT_PROVIDED: &str = "Not provided";

/// Placeholder justification when a structured reply could not be parsed at all.
pub const INVALID_RESPONSE_FORMAT: &str = "Invalid response format";

/// One of the four clinical axes scored per report. Closed set, fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Mood,
    Anxiety,
    Depression,
    Suicidality,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Mood,
        Dimension::Anxiety,
        Dimension::Depression,
        Dimension::Suicidality,
    ];

    /// Key used in JSON replies.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Mood => "mood",
            Dimension::Anxiety => "anxiety",
            Dimension::Depression => "depression",
            Dimension::Suicidality => "suicidality",
        }
    }

    /// Heading the model is asked to write in labeled-text replies.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Mood => "Mood",
            Dimension::Anxiety => "Anxiety",
            Dimension::Depression => "Depression",
            Dimension::Suicidality => "Suicidality",
        }
    }

    pub fn score_field(self) -> &'static str {
        match self {
            Dimension::Mood => "mood_score",
            Dimension::Anxiety => "anxiety_score",
            Dimension::Depression => "depression_score",
            Dimension::Suicidality => "suicidality_score",
        }
    }

    pub fn justification_field(self) -> &'static str {
        match self {
            Dimension::Mood => "mood_justification",
            Dimension::Anxiety => "anxiety_justification",
            Dimension::Depression => "depression_justification",
            Dimension::Suicidality => "suicidality_justification",
        }
    }

    /// Position in [`Dimension::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Syntactic convention the model is instructed to follow in its reply.
/// Chosen per pipeline run, never sniffed from the reply itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReplyFormat {
    /// "Mood: Severity score - 7. Justification: ..." lines.
    LabeledText,
    /// `{"mood": {"score": 7, "justification": "..."}, ...}`
    #[default]
    StructuredJson,
}

impl ReplyFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyFormat::LabeledText => "labeled-text",
            ReplyFormat::StructuredJson => "structured-json",
        }
    }
}

impl fmt::Display for ReplyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ReplyFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "labeled-text" | "labeled_text" => Ok(ReplyFormat::LabeledText),
            "structured-json" | "structured_json" | "json" => Ok(ReplyFormat::StructuredJson),
            other => Err(format!(
                "unknown reply format '{other}' (expected 'labeled-text' or 'structured-json')"
            )),
        }
    }
}

/// A severity score as extracted from a reply.
///
/// `Level` is an integer read from the reply. `Verbatim` holds anything else a
/// structured reply put in the score slot (a float, a quoted number, ...),
/// passed through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Score {
    Level(i64),
    Verbatim(String),
}

impl Score {
    pub const MIN: i64 = 0;
    pub const MAX: i64 = 10;

    pub fn is_in_range(&self) -> bool {
        matches!(self, Score::Level(n) if (Self::MIN..=Self::MAX).contains(n))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Score::Level(n) => write!(f, "{n}"),
            Score::Verbatim(s) => f.write_str(s),
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Score::Level(n) => serializer.serialize_i64(*n),
            Score::Verbatim(s) => serializer.serialize_str(s),
        }
    }
}

/// Score and justification for a single dimension.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionResult {
    pub score: Option<Score>,
    /// Never empty; falls back to [`NOT_PROVIDED`].
    pub justification: String,
}

impl DimensionResult {
    pub fn new(score: Option<Score>, justification: Option<String>) -> Self {
        let justification = justification
            .filter(|j| !j.trim().is_empty())
            .unwrap_or_else(|| NOT_PROVIDED.to_string());
        Self {
            score,
            justification,
        }
    }

    /// Nothing found for this dimension.
    pub fn empty() -> Self {
        Self::new(None, None)
    }

    /// Whole reply was unparseable.
    pub fn invalid() -> Self {
        Self {
            score: None,
            justification: INVALID_RESPONSE_FORMAT.to_string(),
        }
    }
}

/// Exactly one result per [`Dimension`]. There is no way to build one with a
/// dimension missing.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionResults([DimensionResult; 4]);

impl DimensionResults {
    pub fn from_fn(mut f: impl FnMut(Dimension) -> DimensionResult) -> Self {
        Self(Dimension::ALL.map(&mut f))
    }

    pub fn get(&self, dimension: Dimension) -> &DimensionResult {
        &self.0[dimension.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, &DimensionResult)> {
        Dimension::ALL.into_iter().zip(self.0.iter())
    }
}

/// Names of the flattened record fields, in output order.
pub const RECORD_FIELDS: [&str; 9] = [
    "report",
    "mood_score",
    "mood_justification",
    "anxiety_score",
    "anxiety_justification",
    "depression_score",
    "depression_justification",
    "suicidality_score",
    "suicidality_justification",
];

/// One report together with its per-dimension results. Serializes flat into
/// the nine [`RECORD_FIELDS`].
#[derive(Debug, Clone, PartialEq)]
pub struct AssessmentRecord {
    pub report: String,
    pub results: DimensionResults,
}

impl Serialize for AssessmentRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AssessmentRecord", RECORD_FIELDS.len())?;
        state.serialize_field("report", &self.report)?;
        for (dimension, result) in self.results.iter() {
            state.serialize_field(dimension.score_field(), &result.score)?;
            state.serialize_field(dimension.justification_field(), &result.justification)?;
        }
        state.end()
    }
}

/// A record after validation: every field as trimmed text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedRecord {
    pub report: String,
    pub mood_score: String,
    pub mood_justification: String,
    pub anxiety_score: String,
    pub anxiety_justification: String,
    pub depression_score: String,
    pub depression_justification: String,
    pub suicidality_score: String,
    pub suicidality_justification: String,
}
