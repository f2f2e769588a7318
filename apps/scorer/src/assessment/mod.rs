// Assessment core: reply extraction, record assembly, batch validation.
// The inference stage is the only part that talks to the completion client.

pub mod assembler;
pub mod extractor;
pub mod inference;
pub mod labeled_text;
pub mod structured_json;
pub mod validation;
