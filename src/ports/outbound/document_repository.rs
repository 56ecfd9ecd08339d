use crate::shared::Result;
use crate::workforce::domain::{Document, DocumentId, DocumentStatus, DocumentType};
use crate::workforce::policies::PageRequest;
use async_trait::async_trait;
use chrono::NaiveDate;

/// DocumentRepository port for upload-record persistence
#[async_trait]
pub trait DocumentRepository: Send + Sync {
    /// Loads a document record by id, `None` when absent
    async fn get(&self, id: DocumentId) -> Result<Option<Document>>;

    /// Paged listing, newest upload first, optionally filtered by status.
    /// Returns the page and the total match count.
    async fn list(
        &self,
        status: Option<DocumentStatus>,
        page: PageRequest,
    ) -> Result<(Vec<Document>, u64)>;

    /// Day-bucketed upload counts per document type for the inclusive
    /// UTC calendar window `[from, to]`. Days without uploads are simply
    /// absent; the activity service zero-fills them.
    async fn daily_counts(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(NaiveDate, DocumentType, u64)>>;

    /// Inserts a new document record
    async fn insert(&self, document: Document) -> Result<()>;

    /// Persists changes to an existing document record
    async fn update(&self, document: Document) -> Result<()>;
}
