use serde::{Deserialize, Serialize};

/// Structured output of a document analysis run.
///
/// Three ordered finding lists, one per category. A new run replaces the
/// whole report; findings are never merged or appended across runs. This is
/// the exact shape a real analysis backend would return over the wire.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Positive clinical findings ("Medical Benefits").
    pub benefits: Vec<String>,
    /// Risks and considerations.
    pub risks: Vec<String>,
    /// Safety-profile notes — effects the document rules out.
    pub safety_notes: Vec<String>,
}

impl AnalysisReport {
    /// Total findings across all three categories.
    pub fn finding_count(&self) -> usize {
        self.benefits.len() + self.risks.len() + self.safety_notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.finding_count() == 0
    }
}
