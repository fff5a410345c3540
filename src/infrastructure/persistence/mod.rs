mod postgres_message_queue;
mod postgres_record_table;
mod query_builder;

pub use postgres_message_queue::PostgresMessageQueue;
pub use postgres_record_table::PostgresRecordTable;
pub use query_builder::QueryBuilder;
