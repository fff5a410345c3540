use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::application::ports::{BackendError, RecordTable};
use crate::domain::entities::TableEntity;
use crate::domain::resources::ResourceKind;
use crate::infrastructure::persistence::QueryBuilder;

/// Record table stored as JSONB rows keyed by (table, partition, row)
pub struct PostgresRecordTable {
    pool: PgPool,
}

impl PostgresRecordTable {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn require_table(&self, table: &str) -> Result<(), BackendError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM record_tables WHERE name = $1)")
                .bind(table)
                .fetch_one(&self.pool)
                .await?;

        if exists {
            Ok(())
        } else {
            Err(BackendError::NotFound(format!("table {}", table)))
        }
    }
}

#[async_trait]
impl RecordTable for PostgresRecordTable {
    async fn create_table_if_not_exists(&self, table: &str) -> Result<(), BackendError> {
        ResourceKind::Table.validate(table)?;

        sqlx::query("INSERT INTO record_tables (name) VALUES ($1) ON CONFLICT (name) DO NOTHING")
            .bind(table)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn insert_entity(&self, table: &str, entity: TableEntity) -> Result<(), BackendError> {
        self.require_table(table).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO table_entities (table_name, partition_key, row_key, properties)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (table_name, partition_key, row_key) DO NOTHING
            "#,
        )
        .bind(table)
        .bind(&entity.partition_key)
        .bind(&entity.row_key)
        .bind(Json(&entity.properties))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(BackendError::Conflict(format!(
                "{}/{}",
                entity.partition_key, entity.row_key
            )));
        }

        Ok(())
    }

    async fn query_partition(
        &self,
        table: &str,
        partition_key: &str,
    ) -> Result<Vec<TableEntity>, BackendError> {
        self.require_table(table).await?;

        let rows = sqlx::query_as::<_, EntityRow>(&QueryBuilder::partition_entities())
            .bind(table)
            .bind(partition_key)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(EntityRow::into_domain).collect())
    }

    async fn query_all(&self, table: &str) -> Result<Vec<TableEntity>, BackendError> {
        self.require_table(table).await?;

        let rows = sqlx::query_as::<_, EntityRow>(&QueryBuilder::all_entities())
            .bind(table)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(EntityRow::into_domain).collect())
    }
}

#[derive(sqlx::FromRow)]
struct EntityRow {
    partition_key: String,
    row_key: String,
    properties: Json<Map<String, Value>>,
    updated_at: DateTime<Utc>,
}

impl EntityRow {
    fn into_domain(self) -> TableEntity {
        TableEntity {
            partition_key: self.partition_key,
            row_key: self.row_key,
            timestamp: Some(self.updated_at),
            properties: self.properties.0,
        }
    }
}
