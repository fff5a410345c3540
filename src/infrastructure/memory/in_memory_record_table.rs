use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use parking_lot::RwLock;

use crate::application::ports::{BackendError, RecordTable};
use crate::domain::entities::TableEntity;
use crate::domain::resources::ResourceKind;

/// Record table held in memory; queries return entities in insertion order
#[derive(Default)]
pub struct InMemoryRecordTable {
    tables: DashMap<String, RwLock<Vec<TableEntity>>>,
}

impl InMemoryRecordTable {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordTable for InMemoryRecordTable {
    async fn create_table_if_not_exists(&self, table: &str) -> Result<(), BackendError> {
        ResourceKind::Table.validate(table)?;
        self.tables.entry(table.to_string()).or_default();
        Ok(())
    }

    async fn insert_entity(&self, table: &str, mut entity: TableEntity) -> Result<(), BackendError> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| BackendError::NotFound(format!("table {}", table)))?;

        let mut rows = rows.write();
        let exists = rows.iter().any(|row| {
            row.partition_key == entity.partition_key && row.row_key == entity.row_key
        });
        if exists {
            return Err(BackendError::Conflict(format!(
                "{}/{}",
                entity.partition_key, entity.row_key
            )));
        }

        entity.timestamp = Some(Utc::now());
        rows.push(entity);
        Ok(())
    }

    async fn query_partition(
        &self,
        table: &str,
        partition_key: &str,
    ) -> Result<Vec<TableEntity>, BackendError> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| BackendError::NotFound(format!("table {}", table)))?;

        let matching = rows
            .read()
            .iter()
            .filter(|row| row.partition_key == partition_key)
            .cloned()
            .collect();
        Ok(matching)
    }

    async fn query_all(&self, table: &str) -> Result<Vec<TableEntity>, BackendError> {
        let rows = self
            .tables
            .get(table)
            .ok_or_else(|| BackendError::NotFound(format!("table {}", table)))?;

        let all = rows.read().clone();
        Ok(all)
    }
}
