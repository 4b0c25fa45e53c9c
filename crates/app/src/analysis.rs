use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use dioxus::prelude::*;
use shared_types::{AnalysisReport, DocumentMeta};

/// How long the stub pretends to think, in milliseconds.
const STUB_ANALYSIS_DELAY_MS: u32 = 3_000;

type AnalysisFuture = Pin<Box<dyn Future<Output = AnalysisReport>>>;

/// Capability boundary to the analysis backend: submit document → report.
///
/// Analysis cannot fail in this application (the stub is unconditional), so
/// the operation returns the report directly. A real backend implementation
/// slots in behind [`AnalysisClient`] without changing the dashboard.
pub trait AnalysisProvider {
    fn analyze(&self, document: DocumentMeta) -> AnalysisFuture;
}

/// Cloneable handle over the active provider, shared via context.
#[derive(Clone)]
pub struct AnalysisClient {
    provider: Rc<dyn AnalysisProvider>,
}

impl AnalysisClient {
    pub fn new(provider: impl AnalysisProvider + 'static) -> Self {
        Self {
            provider: Rc::new(provider),
        }
    }

    pub async fn analyze(&self, document: DocumentMeta) -> AnalysisReport {
        tracing::info!(name = %document.name, size_bytes = document.size_bytes, "submitting document for analysis");
        let report = self.provider.analyze(document).await;
        tracing::info!(findings = report.finding_count(), "analysis complete");
        report
    }
}

/// Stand-in for the real analysis service: waits a fixed delay, then returns
/// the same canned report for every document. Not cancellable — the run
/// always lands.
pub struct StubAnalysisProvider {
    delay_ms: u32,
}

impl Default for StubAnalysisProvider {
    fn default() -> Self {
        Self {
            delay_ms: STUB_ANALYSIS_DELAY_MS,
        }
    }
}

impl AnalysisProvider for StubAnalysisProvider {
    fn analyze(&self, _document: DocumentMeta) -> AnalysisFuture {
        let delay_ms = self.delay_ms;
        Box::pin(async move {
            // The only suspension point in the whole flow. The outcome does
            // not depend on the document, its name, or its size.
            let _ = document::eval(&format!(
                "await new Promise((resolve) => setTimeout(resolve, {delay_ms}));"
            ))
            .await;
            canned_report()
        })
    }
}

/// The fixed payload every run produces: five findings per category.
fn canned_report() -> AnalysisReport {
    AnalysisReport {
        benefits: vec![
            "Promotes faster healing in bone fractures".to_string(),
            "Biocompatible with human tissue".to_string(),
            "Minimally invasive during surgery".to_string(),
            "Shows excellent osseointegration properties".to_string(),
            "Reduces recovery time by 30-40%".to_string(),
        ],
        risks: vec![
            "Potential for long-term inflammation".to_string(),
            "Might not integrate well with elderly patients' bones".to_string(),
            "Rare risk of allergic reaction".to_string(),
            "Higher cost compared to traditional methods".to_string(),
            "Requires specialized surgical training".to_string(),
        ],
        safety_notes: vec![
            "No reported interference with MRI scans".to_string(),
            "No effect on nearby muscle tissues".to_string(),
            "Proven safe for pediatric use in most cases".to_string(),
            "Compatible with standard imaging techniques".to_string(),
            "No adverse effects on blood circulation".to_string(),
        ],
    }
}
