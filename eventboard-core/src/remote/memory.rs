//! In-process document collection.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{EventBoardError, EventBoardResult};
use crate::event::EventRecord;
use crate::remote::EventGateway;

/// Documents kept in insertion order, like a freshly listed collection.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    documents: RwLock<Vec<EventRecord>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_events(events: Vec<EventRecord>) -> Self {
        MemoryGateway {
            documents: RwLock::new(events),
        }
    }
}

#[async_trait]
impl EventGateway for MemoryGateway {
    async fn list(&self) -> EventBoardResult<Vec<EventRecord>> {
        Ok(self.documents.read().await.clone())
    }

    async fn get(&self, id: &str) -> EventBoardResult<EventRecord> {
        self.documents
            .read()
            .await
            .iter()
            .find(|doc| doc.id == id)
            .cloned()
            .ok_or_else(|| EventBoardError::NotFound(id.to_string()))
    }

    async fn create(&self, mut record: EventRecord) -> EventBoardResult<EventRecord> {
        record.ensure_id();

        let mut documents = self.documents.write().await;
        if documents.iter().any(|doc| doc.id == record.id) {
            return Err(EventBoardError::Remote(format!(
                "Document with the requested ID already exists: {}",
                record.id
            )));
        }
        documents.push(record.clone());
        Ok(record)
    }

    async fn update(&self, id: &str, mut record: EventRecord) -> EventBoardResult<EventRecord> {
        record.id = id.to_string();

        let mut documents = self.documents.write().await;
        let existing = documents
            .iter_mut()
            .find(|doc| doc.id == id)
            .ok_or_else(|| EventBoardError::NotFound(id.to_string()))?;
        *existing = record.clone();
        Ok(record)
    }

    async fn delete(&self, id: &str) -> EventBoardResult<()> {
        let mut documents = self.documents.write().await;
        let index = documents
            .iter()
            .position(|doc| doc.id == id)
            .ok_or_else(|| EventBoardError::NotFound(id.to_string()))?;
        documents.remove(index);
        Ok(())
    }
}
