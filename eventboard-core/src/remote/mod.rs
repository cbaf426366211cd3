//! Access to the hosted document collection that backs events.
//!
//! [`EventGateway`] is the seam: [`AppwriteGateway`] talks to the real
//! service over HTTP, [`MemoryGateway`] keeps documents in process with the
//! same semantics. Every call on the HTTP gateway is one round trip; nothing
//! is cached or retried.

pub mod appwrite;
pub mod memory;

use async_trait::async_trait;

use crate::error::EventBoardResult;
use crate::event::EventRecord;

pub use appwrite::AppwriteGateway;
pub use memory::MemoryGateway;

#[async_trait]
pub trait EventGateway: Send + Sync {
    /// All documents in the collection.
    async fn list(&self) -> EventBoardResult<Vec<EventRecord>>;

    /// One document, or [`EventBoardError::NotFound`](crate::error::EventBoardError::NotFound).
    async fn get(&self, id: &str) -> EventBoardResult<EventRecord>;

    /// Store a new document. An empty `record.id` gets a generated id.
    async fn create(&self, record: EventRecord) -> EventBoardResult<EventRecord>;

    /// Replace the fields of an existing document. `record.id` is ignored in favour of `id`.
    async fn update(&self, id: &str, record: EventRecord) -> EventBoardResult<EventRecord>;

    /// Remove a document. Deleting an id that doesn't exist is `NotFound`.
    async fn delete(&self, id: &str) -> EventBoardResult<()>;
}
