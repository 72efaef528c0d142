//! Durable record list the display layer reads.

pub mod dto;
pub mod handler;

pub use dto::NetworkRecord;
pub use handler::{RecordStore, StoreError, StoreResult};
