use crate::document::DocumentMeta;
use crate::error::DocumentRejection;
use crate::report::AnalysisReport;

/// Which of the result-area states the dashboard should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowStage {
    /// Nothing selected, nothing analyzed.
    Idle,
    /// A document is selected and waiting for the user to start a run.
    DocumentReady,
    /// A run is in flight.
    Analyzing,
    /// The most recent run's report is on screen.
    ReportReady,
}

/// State holder for the upload → analyze → report flow.
///
/// All transitions are guarded here so the view layer only wires events to
/// methods. The file picker stays live while a run is in flight (the start
/// control is the only concurrency guard); a mid-run selection replaces the
/// document and discards the stale report, and the in-flight run still
/// completes and stores its result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisWorkflow {
    document: Option<DocumentMeta>,
    report: Option<AnalysisReport>,
    analyzing: bool,
}

impl AnalysisWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> Option<&DocumentMeta> {
        self.document.as_ref()
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        self.report.as_ref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }

    /// Whether the start control is enabled.
    pub fn can_start(&self) -> bool {
        self.document.is_some() && !self.analyzing
    }

    /// Derived render state. `Analyzing` wins over everything else so the
    /// result area never shows a stale report mid-run.
    pub fn stage(&self) -> WorkflowStage {
        if self.analyzing {
            WorkflowStage::Analyzing
        } else if self.report.is_some() {
            WorkflowStage::ReportReady
        } else if self.document.is_some() {
            WorkflowStage::DocumentReady
        } else {
            WorkflowStage::Idle
        }
    }

    /// Accept a newly picked file as the analysis document.
    ///
    /// Non-PDF selections are rejected without touching any state — the
    /// previous document and report survive untouched. On acceptance the
    /// document is replaced wholesale and any prior report is cleared
    /// immediately, so a stale result is never shown against a new file.
    pub fn select_document(&mut self, document: DocumentMeta) -> Result<(), DocumentRejection> {
        if !document.is_pdf() {
            return Err(DocumentRejection::UnsupportedMediaType {
                content_type: document.content_type,
            });
        }
        self.report = None;
        self.document = Some(document);
        Ok(())
    }

    /// Start a run. Returns the document to submit, or `None` (and no state
    /// change) when there is nothing selected or a run is already in flight.
    pub fn begin_analysis(&mut self) -> Option<DocumentMeta> {
        if !self.can_start() {
            return None;
        }
        self.analyzing = true;
        self.document.clone()
    }

    /// Store a finished run's report and leave the in-flight state.
    pub fn complete_analysis(&mut self, report: AnalysisReport) {
        self.report = Some(report);
        self.analyzing = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::PDF_CONTENT_TYPE;
    use pretty_assertions::assert_eq;

    fn pdf(name: &str, size_bytes: u64) -> DocumentMeta {
        DocumentMeta::new(name, size_bytes, PDF_CONTENT_TYPE)
    }

    fn small_report() -> AnalysisReport {
        AnalysisReport {
            benefits: vec!["b1".into()],
            risks: vec!["r1".into()],
            safety_notes: vec!["s1".into()],
        }
    }

    #[test]
    fn starts_idle_with_nothing_selected() {
        let workflow = AnalysisWorkflow::new();
        assert_eq!(workflow.stage(), WorkflowStage::Idle);
        assert!(workflow.document().is_none());
        assert!(workflow.report().is_none());
        assert!(!workflow.can_start());
    }

    #[test]
    fn selecting_a_pdf_readies_the_workflow() {
        let mut workflow = AnalysisWorkflow::new();
        workflow
            .select_document(pdf("report.pdf", 1_258_291))
            .unwrap();

        assert_eq!(workflow.stage(), WorkflowStage::DocumentReady);
        assert_eq!(workflow.document().unwrap().name, "report.pdf");
        assert!(workflow.can_start());
    }

    #[test]
    fn non_pdf_selection_changes_nothing() {
        let mut workflow = AnalysisWorkflow::new();
        let err = workflow
            .select_document(DocumentMeta::new("report.docx", 4096, "application/msword"))
            .unwrap_err();

        assert_eq!(
            err,
            DocumentRejection::UnsupportedMediaType {
                content_type: "application/msword".to_string()
            }
        );
        assert_eq!(workflow.stage(), WorkflowStage::Idle);
        assert!(workflow.document().is_none());
        assert!(!workflow.can_start());
    }

    #[test]
    fn non_pdf_selection_preserves_existing_document_and_report() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.select_document(pdf("first.pdf", 100)).unwrap();
        workflow.begin_analysis().unwrap();
        workflow.complete_analysis(small_report());

        let before = workflow.clone();
        assert!(workflow
            .select_document(DocumentMeta::new("notes.txt", 10, "text/plain"))
            .is_err());

        assert_eq!(workflow, before);
        assert_eq!(workflow.document().unwrap().name, "first.pdf");
        assert!(workflow.report().is_some());
    }

    #[test]
    fn reselecting_a_pdf_clears_the_prior_report_immediately() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.select_document(pdf("first.pdf", 100)).unwrap();
        workflow.begin_analysis().unwrap();
        workflow.complete_analysis(small_report());
        assert_eq!(workflow.stage(), WorkflowStage::ReportReady);

        // Cleared on selection, before any new run starts.
        workflow.select_document(pdf("second.pdf", 200)).unwrap();
        assert!(workflow.report().is_none());
        assert_eq!(workflow.stage(), WorkflowStage::DocumentReady);
        assert_eq!(workflow.document().unwrap().name, "second.pdf");
    }

    #[test]
    fn begin_analysis_without_a_document_is_a_no_op() {
        let mut workflow = AnalysisWorkflow::new();
        assert!(workflow.begin_analysis().is_none());
        assert_eq!(workflow.stage(), WorkflowStage::Idle);
        assert!(!workflow.is_analyzing());
    }

    #[test]
    fn begin_analysis_while_in_flight_is_a_no_op() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.select_document(pdf("report.pdf", 100)).unwrap();
        assert!(workflow.begin_analysis().is_some());

        assert!(workflow.begin_analysis().is_none());
        assert!(workflow.is_analyzing());
        assert_eq!(workflow.stage(), WorkflowStage::Analyzing);
    }

    #[test]
    fn full_run_toggles_analyzing_and_stores_the_report() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.select_document(pdf("report.pdf", 1_258_291)).unwrap();
        assert!(!workflow.is_analyzing());

        let submitted = workflow.begin_analysis().unwrap();
        assert_eq!(submitted.name, "report.pdf");
        assert!(workflow.is_analyzing());
        assert!(!workflow.can_start());

        workflow.complete_analysis(small_report());
        assert!(!workflow.is_analyzing());
        assert_eq!(workflow.stage(), WorkflowStage::ReportReady);
        assert_eq!(workflow.report().unwrap().finding_count(), 3);
    }

    #[test]
    fn outcome_is_independent_of_name_and_size() {
        // The same completion payload lands identically for wildly
        // different documents.
        for (name, size) in [("tiny.pdf", 1), ("huge-scan.pdf", 900_000_000)] {
            let mut workflow = AnalysisWorkflow::new();
            workflow.select_document(pdf(name, size)).unwrap();
            workflow.begin_analysis().unwrap();
            workflow.complete_analysis(small_report());
            assert_eq!(workflow.report(), Some(&small_report()));
        }
    }

    #[test]
    fn selection_during_a_run_replaces_document_and_drops_stale_report() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.select_document(pdf("first.pdf", 100)).unwrap();
        workflow.begin_analysis().unwrap();
        workflow.complete_analysis(small_report());

        workflow.select_document(pdf("second.pdf", 200)).unwrap();
        workflow.begin_analysis().unwrap();

        // The picker is still live mid-run; only the start control is gated.
        workflow.select_document(pdf("third.pdf", 300)).unwrap();
        assert!(workflow.is_analyzing());
        assert_eq!(workflow.document().unwrap().name, "third.pdf");
        assert!(workflow.report().is_none());

        // The in-flight run still lands.
        workflow.complete_analysis(small_report());
        assert_eq!(workflow.stage(), WorkflowStage::ReportReady);
    }

    #[test]
    fn stage_prefers_analyzing_over_everything() {
        let mut workflow = AnalysisWorkflow::new();
        workflow.select_document(pdf("report.pdf", 100)).unwrap();
        workflow.begin_analysis().unwrap();
        workflow.complete_analysis(small_report());
        workflow.begin_analysis().unwrap();

        // Report present AND in flight — render the run, not the old report.
        assert_eq!(workflow.stage(), WorkflowStage::Analyzing);
    }
}
