use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info};

use crate::application::dto::StorageStatsReport;
use crate::application::errors::{StatsError, StatsSource};
use crate::application::ports::{BackendError, FileShare, MessageQueue, ObjectStore, RecordTable};
use crate::domain::resources::{CONTRACT_SHARE, CUSTOMER_TABLE, IMAGE_CONTAINER, ORDER_QUEUE};

/// Use case: Count items across all four backends
pub struct StorageStatsUseCase {
    object_store: Arc<dyn ObjectStore>,
    file_share: Arc<dyn FileShare>,
    queue: Arc<dyn MessageQueue>,
    table: Arc<dyn RecordTable>,
}

impl StorageStatsUseCase {
    pub fn new(
        object_store: Arc<dyn ObjectStore>,
        file_share: Arc<dyn FileShare>,
        queue: Arc<dyn MessageQueue>,
        table: Arc<dyn RecordTable>,
    ) -> Self {
        Self {
            object_store,
            file_share,
            queue,
            table,
        }
    }

    /// Query every backend concurrently.
    ///
    /// Any single failure aborts the report; the error lists every backend
    /// that failed, not just the first.
    pub async fn execute(&self) -> Result<StorageStatsReport, StatsError> {
        info!("GetStorageStats triggered");

        let (customers, images, queue, contracts) = tokio::join!(
            self.count_customers(),
            self.count_images(),
            self.count_queue_messages(),
            self.count_contracts(),
        );

        let mut failures = Vec::new();
        let mut take = |source: StatsSource, result: Result<u64, BackendError>| match result {
            Ok(count) => count,
            Err(e) => {
                failures.push((source, e));
                0
            }
        };

        let customer_count = take(StatsSource::Customers, customers);
        let image_count = take(StatsSource::Images, images);
        let queue_message_count = take(StatsSource::Queue, queue);
        let contract_count = take(StatsSource::Contracts, contracts);

        if !failures.is_empty() {
            let err = StatsError { failures };
            error!(error = %err, "Error retrieving storage statistics");
            return Err(err);
        }

        Ok(StorageStatsReport {
            customer_count,
            image_count,
            queue_message_count,
            contract_count,
            generated_at: Utc::now(),
        })
    }

    async fn count_customers(&self) -> Result<u64, BackendError> {
        self.table.create_table_if_not_exists(CUSTOMER_TABLE).await?;
        Ok(self.table.query_all(CUSTOMER_TABLE).await?.len() as u64)
    }

    async fn count_images(&self) -> Result<u64, BackendError> {
        self.object_store
            .create_container_if_not_exists(IMAGE_CONTAINER)
            .await?;
        Ok(self.object_store.list_objects(IMAGE_CONTAINER).await?.len() as u64)
    }

    async fn count_queue_messages(&self) -> Result<u64, BackendError> {
        self.queue.create_queue_if_not_exists(ORDER_QUEUE).await?;
        Ok(self
            .queue
            .get_properties(ORDER_QUEUE)
            .await?
            .approximate_message_count)
    }

    async fn count_contracts(&self) -> Result<u64, BackendError> {
        self.file_share
            .create_share_if_not_exists(CONTRACT_SHARE)
            .await?;
        let items = self.file_share.list_root(CONTRACT_SHARE).await?;
        Ok(items.iter().filter(|item| !item.is_directory).count() as u64)
    }
}
