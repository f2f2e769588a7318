// Prompt templates for the severity assessment. Replace `{report}` before sending.
// The instructions must match the reply format the extractor is configured for.

/// Asks for a single JSON object keyed by dimension.
pub const JSON_PROMPT_TEMPLATE: &str = r#"[INST] <<SYS>>
You are an attentive, specialized psychiatric assistant. Below is a psychiatric history. Evaluate the following mental health dimensions: mood, anxiety, depression, and suicidality. For each dimension, assign a severity score (0-10) and provide a detailed justification.

Output your response in the following JSON format:
{
  "mood": {"score": X, "justification": "..."},
  "anxiety": {"score": X, "justification": "..."},
  "depression": {"score": X, "justification": "..."},
  "suicidality": {"score": X, "justification": "..."}
}

Replace X with the severity score and provide the justification as a string.
<</SYS>>[/INST]
History: {report}
Question: What are the severity scores for mood, anxiety, depression, and suicidality? Justify each score in JSON format, providing a detailed explanation.
[/INST]"#;

/// Asks for one labeled line per dimension.
pub const LABELED_PROMPT_TEMPLATE: &str = r#"[INST] <<SYS>>
You are an attentive, specialized psychiatric assistant. Below is a psychiatric history. Evaluate the following mental health dimensions: mood, anxiety, depression, and suicidality. For each dimension, assign a severity score (0-10) and provide a detailed justification.

Output exactly one line per dimension, in this format:
Mood: Severity score - X. Justification: ...
Anxiety: Severity score - X. Justification: ...
Depression: Severity score - X. Justification: ...
Suicidality: Severity score - X. Justification: ...

Replace X with the severity score. Keep each justification on a single line.
<</SYS>>[/INST]
History: {report}
Question: What are the severity scores for mood, anxiety, depression, and suicidality? Justify each score, providing a detailed explanation.
[/INST]"#;
