//! Backend capability interfaces
//!
//! Each port is the narrow set of operations the gateway needs from one
//! backend kind. Every port exposes an idempotent create-if-absent call so
//! provisioning stays a backend concern rather than handler logic.

mod backend_error;
mod file_share;
mod message_queue;
mod object_store;
mod record_table;

pub use backend_error::BackendError;
pub use file_share::{FileShare, ShareItem};
pub use message_queue::{MessageQueue, QueueProperties};
pub use object_store::{ObjectItem, ObjectStore};
pub use record_table::RecordTable;

#[cfg(test)]
pub use file_share::MockFileShare;
#[cfg(test)]
pub use message_queue::MockMessageQueue;
#[cfg(test)]
pub use object_store::MockObjectStore;
#[cfg(test)]
pub use record_table::MockRecordTable;
