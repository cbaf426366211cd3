//! Core types for eventboard.
//!
//! This crate provides everything shared by eventboard-cli and eventboard-server:
//! - `EventRecord` and the form-side `EventDraft`
//! - the client-side `EventStore` and the visible-events derivation
//! - the `EventGateway` to the hosted document collection
//! - startup configuration and sharing links

pub mod config;
pub mod constants;
pub mod datetime;
pub mod document;
pub mod error;
pub mod event;
pub mod filter;
pub mod remote;
pub mod share;
pub mod store;
pub mod visible;

pub use config::AppConfig;
pub use error::{EventBoardError, EventBoardResult};
pub use event::{EventDraft, EventRecord, Priority};
pub use filter::{CategoryFilter, FilterState};
pub use remote::{AppwriteGateway, EventGateway, MemoryGateway};
pub use store::{Action, EventStore};
pub use visible::visible_events;
