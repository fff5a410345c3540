//! In-process backends for development and tests.
//!
//! State lives for the lifetime of the adapter and is lost on restart.

mod in_memory_file_share;
mod in_memory_message_queue;
mod in_memory_object_store;
mod in_memory_record_table;

pub use in_memory_file_share::InMemoryFileShare;
pub use in_memory_message_queue::InMemoryMessageQueue;
pub use in_memory_object_store::InMemoryObjectStore;
pub use in_memory_record_table::InMemoryRecordTable;
