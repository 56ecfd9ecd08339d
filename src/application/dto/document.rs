use crate::workforce::domain::{Document, DocumentId, DocumentStatus, DocumentType};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Document upload record DTO
#[derive(Debug, Clone, Serialize)]
pub struct DocumentDto {
    pub id: DocumentId,
    pub document_type: DocumentType,
    pub filename: String,
    pub status: DocumentStatus,
    pub uploaded_at: DateTime<Utc>,
    pub processed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

impl DocumentDto {
    pub fn from_entity(document: &Document) -> Self {
        Self {
            id: document.id(),
            document_type: document.document_type(),
            filename: document.filename().to_string(),
            status: document.status(),
            uploaded_at: document.uploaded_at(),
            processed_at: document.processed_at(),
            error: document.error().map(String::from),
        }
    }
}
