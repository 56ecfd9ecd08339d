//! Document upload records and their processing lifecycle.

use crate::application::dto::{DocumentDto, PagedResult};
use crate::application::validation::{
    require_max_length, require_text, ValidateRequest, ValidationFailure,
};
use crate::ports::outbound::DocumentRepository;
use crate::shared::Result;
use crate::workforce::domain::{Document, DocumentId, DocumentStatus, DocumentType};
use crate::workforce::policies::PageRequest;
use chrono::Utc;

const MAX_FILENAME: usize = 255;

/// Command to register an uploaded document
#[derive(Debug, Clone)]
pub struct RegisterUploadCommand {
    pub document_type: DocumentType,
    pub filename: String,
}

impl ValidateRequest for RegisterUploadCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::new();
        require_text(&mut failure, "filename", &self.filename);
        require_max_length(&mut failure, "filename", &self.filename, MAX_FILENAME);
        failure.into_result()
    }
}

/// Registers an upload as a pending document record
pub struct RegisterUploadUseCase<D: DocumentRepository> {
    documents: D,
}

impl<D: DocumentRepository> RegisterUploadUseCase<D> {
    pub fn new(documents: D) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, command: RegisterUploadCommand) -> Result<DocumentDto> {
        let document = Document::new(
            command.document_type,
            command.filename.trim().to_string(),
            Utc::now(),
        );
        let dto = DocumentDto::from_entity(&document);
        self.documents.insert(document).await?;
        Ok(dto)
    }
}

/// Command to advance a document's processing status
#[derive(Debug, Clone)]
pub struct UpdateDocumentStatusCommand {
    pub id: DocumentId,
    pub status: DocumentStatus,
    pub error: Option<String>,
}

impl ValidateRequest for UpdateDocumentStatusCommand {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

#[derive(Debug)]
pub enum UpdateDocumentStatusOutcome {
    Updated(DocumentDto),
    NotFound,
}

/// Advances a document's processing status
pub struct UpdateDocumentStatusUseCase<D: DocumentRepository> {
    documents: D,
}

impl<D: DocumentRepository> UpdateDocumentStatusUseCase<D> {
    pub fn new(documents: D) -> Self {
        Self { documents }
    }

    pub async fn execute(
        &self,
        command: UpdateDocumentStatusCommand,
    ) -> Result<UpdateDocumentStatusOutcome> {
        let Some(mut document) = self.documents.get(command.id).await? else {
            return Ok(UpdateDocumentStatusOutcome::NotFound);
        };

        document.set_status(command.status, command.error, Utc::now());

        let dto = DocumentDto::from_entity(&document);
        self.documents.update(document).await?;

        Ok(UpdateDocumentStatusOutcome::Updated(dto))
    }
}

/// Paged document listing query. Out-of-range paging values are clamped.
#[derive(Debug, Clone, Default)]
pub struct ListDocumentsQuery {
    pub status: Option<DocumentStatus>,
    pub page: i32,
    pub page_size: i32,
}

impl ValidateRequest for ListDocumentsQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Lists document records, newest upload first
pub struct ListDocumentsUseCase<D: DocumentRepository> {
    documents: D,
}

impl<D: DocumentRepository> ListDocumentsUseCase<D> {
    pub fn new(documents: D) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, query: ListDocumentsQuery) -> Result<PagedResult<DocumentDto>> {
        let page = PageRequest::clamped(query.page, query.page_size);
        let (documents, total_count) = self.documents.list(query.status, page).await?;
        let items = documents.iter().map(DocumentDto::from_entity).collect();
        Ok(PagedResult::new(items, total_count, page))
    }
}

/// Query for one document record
#[derive(Debug, Clone)]
pub struct GetDocumentQuery {
    pub id: DocumentId,
}

impl ValidateRequest for GetDocumentQuery {
    fn validate(&self) -> std::result::Result<(), ValidationFailure> {
        Ok(())
    }
}

/// Looks up one document record by id
pub struct GetDocumentUseCase<D: DocumentRepository> {
    documents: D,
}

impl<D: DocumentRepository> GetDocumentUseCase<D> {
    pub fn new(documents: D) -> Self {
        Self { documents }
    }

    pub async fn execute(&self, query: GetDocumentQuery) -> Result<Option<DocumentDto>> {
        Ok(self
            .documents
            .get(query.id)
            .await?
            .map(|d| DocumentDto::from_entity(&d)))
    }
}
