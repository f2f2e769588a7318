use crate::models::assessment::{AssessmentRecord, DimensionResults};

/// Pairs a report with its extracted results.
/// Pure; the flattening into nine fields happens at serialization.
pub fn assemble(report: &str, results: &DimensionResults) -> AssessmentRecord {
    AssessmentRecord {
        report: report.to_string(),
        results: results.clone(),
    }
}
