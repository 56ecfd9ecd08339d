use crate::ports::outbound::DocumentRepository;
use crate::shared::Result;
use crate::workforce::domain::{Document, DocumentId, DocumentStatus, DocumentType};
use crate::workforce::policies::PageRequest;
use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::Arc;

/// In-memory store for document upload records
#[derive(Clone, Default)]
pub struct InMemoryDocumentStore {
    documents: Arc<DashMap<DocumentId, Document>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentRepository for InMemoryDocumentStore {
    async fn get(&self, id: DocumentId) -> Result<Option<Document>> {
        Ok(self.documents.get(&id).map(|d| d.clone()))
    }

    async fn list(
        &self,
        status: Option<DocumentStatus>,
        page: PageRequest,
    ) -> Result<(Vec<Document>, u64)> {
        let mut matches: Vec<Document> = self
            .documents
            .iter()
            .filter(|d| status.map(|s| d.status() == s).unwrap_or(true))
            .map(|d| d.clone())
            .collect();
        matches.sort_by(|a, b| b.uploaded_at().cmp(&a.uploaded_at()));

        let total = matches.len() as u64;
        let items = matches
            .into_iter()
            .skip(page.offset())
            .take(page.page_size() as usize)
            .collect();
        Ok((items, total))
    }

    async fn daily_counts(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<(NaiveDate, DocumentType, u64)>> {
        let mut buckets: HashMap<(NaiveDate, DocumentType), u64> = HashMap::new();
        for document in self.documents.iter() {
            let day = document.uploaded_at().date_naive();
            if day < from || day > to {
                continue;
            }
            *buckets.entry((day, document.document_type())).or_insert(0) += 1;
        }
        Ok(buckets
            .into_iter()
            .map(|((day, document_type), count)| (day, document_type, count))
            .collect())
    }

    async fn insert(&self, document: Document) -> Result<()> {
        self.documents.insert(document.id(), document);
        Ok(())
    }

    async fn update(&self, document: Document) -> Result<()> {
        if !self.documents.contains_key(&document.id()) {
            anyhow::bail!("Document does not exist: {}", document.id());
        }
        self.documents.insert(document.id(), document);
        Ok(())
    }
}
