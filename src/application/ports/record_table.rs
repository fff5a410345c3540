use async_trait::async_trait;
#[cfg(test)]
use mockall::{automock, predicate::*};

use super::BackendError;
use crate::domain::entities::TableEntity;

/// Port for partition/row keyed schemaless records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RecordTable: Send + Sync {
    /// Create the table unless it already exists
    async fn create_table_if_not_exists(&self, table: &str) -> Result<(), BackendError>;

    /// Insert a new entity; an existing (partition, row) pair is a conflict
    async fn insert_entity(&self, table: &str, entity: TableEntity) -> Result<(), BackendError>;

    /// Every entity in one partition, in backend order
    async fn query_partition(
        &self,
        table: &str,
        partition_key: &str,
    ) -> Result<Vec<TableEntity>, BackendError>;

    /// Every entity in the table, in backend order
    async fn query_all(&self, table: &str) -> Result<Vec<TableEntity>, BackendError>;
}
