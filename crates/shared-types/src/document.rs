use serde::{Deserialize, Serialize};

/// The only media type the analyzer accepts.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Metadata for the user-selected document (no content is ever read).
///
/// `content_type` is the type declared by the browser for the chosen file,
/// not a sniffed value — acceptance is purely declarative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub name: String,
    pub size_bytes: u64,
    pub content_type: String,
}

impl DocumentMeta {
    pub fn new(
        name: impl Into<String>,
        size_bytes: u64,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            content_type: content_type.into(),
        }
    }

    /// Strict equality against `application/pdf` — no parameters, no
    /// case-folding, no extension fallback.
    pub fn is_pdf(&self) -> bool {
        self.content_type == PDF_CONTENT_TYPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pdf_content_type_is_accepted() {
        let doc = DocumentMeta::new("report.pdf", 1_258_291, PDF_CONTENT_TYPE);
        assert!(doc.is_pdf());
    }

    #[test]
    fn other_content_types_are_rejected() {
        let docx = DocumentMeta::new(
            "report.docx",
            4096,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        );
        assert!(!docx.is_pdf());

        let empty = DocumentMeta::new("report.pdf", 4096, "");
        assert!(!empty.is_pdf());
    }

    #[test]
    fn pdf_check_ignores_file_extension() {
        // The extension is cosmetic; only the declared type matters.
        let doc = DocumentMeta::new("scan.dat", 10, PDF_CONTENT_TYPE);
        assert!(doc.is_pdf());

        let fake = DocumentMeta::new("notes.pdf", 10, "text/plain");
        assert!(!fake.is_pdf());
    }

    #[test]
    fn pdf_check_is_exact_match() {
        // Parameters or casing differences do not pass the gate.
        assert!(!DocumentMeta::new("a.pdf", 1, "application/pdf; charset=binary").is_pdf());
        assert!(!DocumentMeta::new("a.pdf", 1, "Application/PDF").is_pdf());
    }
}
