use crate::workforce::domain::ids::DocumentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Resume,
    Certification,
    Review,
}

impl DocumentType {
    /// All document categories, in reporting order
    pub const ALL: [DocumentType; 3] = [
        DocumentType::Resume,
        DocumentType::Certification,
        DocumentType::Review,
    ];
}

impl std::str::FromStr for DocumentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "resume" | "cv" => Ok(DocumentType::Resume),
            "certification" | "cert" => Ok(DocumentType::Certification),
            "review" => Ok(DocumentType::Review),
            _ => Err(format!(
                "Invalid document type: {}. Please specify 'resume', 'certification' or 'review'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentType::Resume => write!(f, "resume"),
            DocumentType::Certification => write!(f, "certification"),
            DocumentType::Review => write!(f, "review"),
        }
    }
}

/// Processing status of an uploaded document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(DocumentStatus::Pending),
            "processing" => Ok(DocumentStatus::Processing),
            "completed" => Ok(DocumentStatus::Completed),
            "failed" => Ok(DocumentStatus::Failed),
            _ => Err(format!(
                "Invalid document status: {}. Please specify 'pending', 'processing', 'completed' or 'failed'",
                s
            )),
        }
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "pending"),
            DocumentStatus::Processing => write!(f, "processing"),
            DocumentStatus::Completed => write!(f, "completed"),
            DocumentStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Document entity: the record of one upload and its processing lifecycle.
/// The document bytes themselves live with the storage collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    id: DocumentId,
    document_type: DocumentType,
    filename: String,
    status: DocumentStatus,
    uploaded_at: DateTime<Utc>,
    processed_at: Option<DateTime<Utc>>,
    error: Option<String>,
}

impl Document {
    pub fn new(document_type: DocumentType, filename: String, uploaded_at: DateTime<Utc>) -> Self {
        Self {
            id: DocumentId::new(),
            document_type,
            filename,
            status: DocumentStatus::Pending,
            uploaded_at,
            processed_at: None,
            error: None,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn status(&self) -> DocumentStatus {
        self.status
    }

    pub fn uploaded_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    pub fn processed_at(&self) -> Option<DateTime<Utc>> {
        self.processed_at
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Advances the processing lifecycle. Terminal states stamp
    /// `processed_at`; only Failed carries an error message.
    pub fn set_status(&mut self, status: DocumentStatus, error: Option<String>, at: DateTime<Utc>) {
        self.status = status;
        match status {
            DocumentStatus::Completed => {
                self.processed_at = Some(at);
                self.error = None;
            }
            DocumentStatus::Failed => {
                self.processed_at = Some(at);
                self.error = error;
            }
            DocumentStatus::Pending | DocumentStatus::Processing => {
                self.error = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_document_type_from_str() {
        assert_eq!(
            DocumentType::from_str("resume").unwrap(),
            DocumentType::Resume
        );
        assert_eq!(DocumentType::from_str("CV").unwrap(), DocumentType::Resume);
        assert_eq!(
            DocumentType::from_str("cert").unwrap(),
            DocumentType::Certification
        );
        assert!(DocumentType::from_str("invoice").is_err());
    }

    #[test]
    fn test_document_status_from_str() {
        assert_eq!(
            DocumentStatus::from_str("Completed").unwrap(),
            DocumentStatus::Completed
        );
        assert!(DocumentStatus::from_str("done").is_err());
    }

    #[test]
    fn test_new_document_is_pending() {
        let doc = Document::new(DocumentType::Resume, "cv.pdf".to_string(), Utc::now());
        assert_eq!(doc.status(), DocumentStatus::Pending);
        assert!(doc.processed_at().is_none());
        assert!(doc.error().is_none());
    }

    #[test]
    fn test_completed_stamps_processed_at_and_clears_error() {
        let mut doc = Document::new(DocumentType::Resume, "cv.pdf".to_string(), Utc::now());
        let at = Utc::now();
        doc.set_status(DocumentStatus::Completed, None, at);
        assert_eq!(doc.status(), DocumentStatus::Completed);
        assert_eq!(doc.processed_at(), Some(at));
        assert!(doc.error().is_none());
    }

    #[test]
    fn test_failed_records_error() {
        let mut doc = Document::new(DocumentType::Review, "review.docx".to_string(), Utc::now());
        doc.set_status(
            DocumentStatus::Failed,
            Some("unsupported format".to_string()),
            Utc::now(),
        );
        assert_eq!(doc.status(), DocumentStatus::Failed);
        assert_eq!(doc.error(), Some("unsupported format"));
        assert!(doc.processed_at().is_some());
    }
}
