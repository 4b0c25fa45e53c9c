use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a selected file was not accepted as the analysis document.
///
/// The dashboard deliberately gives the user no feedback on rejection (the
/// selection is a silent no-op); this type exists so the rejection is still
/// observable to callers and loggable, rather than a bare `bool`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum DocumentRejection {
    /// The declared media type was not `application/pdf`.
    UnsupportedMediaType { content_type: String },
}

impl fmt::Display for DocumentRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentRejection::UnsupportedMediaType { content_type } => {
                if content_type.is_empty() {
                    write!(f, "unsupported media type: (none declared)")
                } else {
                    write!(f, "unsupported media type: {content_type}")
                }
            }
        }
    }
}

impl std::error::Error for DocumentRejection {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_offending_type() {
        let err = DocumentRejection::UnsupportedMediaType {
            content_type: "text/plain".to_string(),
        };
        assert_eq!(format!("{err}"), "unsupported media type: text/plain");
    }

    #[test]
    fn display_handles_missing_declared_type() {
        let err = DocumentRejection::UnsupportedMediaType {
            content_type: String::new(),
        };
        assert_eq!(format!("{err}"), "unsupported media type: (none declared)");
    }

    #[test]
    fn rejection_roundtrips_through_json() {
        let err = DocumentRejection::UnsupportedMediaType {
            content_type: "image/png".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let parsed: DocumentRejection = serde_json::from_str(&json).unwrap();
        assert_eq!(err, parsed);
    }
}
