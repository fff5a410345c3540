use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::api::router::AppState;
use crate::application::{
    ports::{BackendError, FileShare, MessageQueue, ObjectStore, RecordTable},
    use_cases::{
        AddCustomerUseCase, ListContractsUseCase, ListCustomersUseCase, ListImagesUseCase,
        SendOrderMessageUseCase, StorageStatsUseCase, UploadContractUseCase, UploadImageUseCase,
    },
};
use crate::config::{Capability, Config, ConfigError, DatabaseBackend, FileBackend};
use crate::infrastructure::{
    memory::{InMemoryFileShare, InMemoryMessageQueue, InMemoryObjectStore, InMemoryRecordTable},
    persistence::{PostgresMessageQueue, PostgresRecordTable},
    storage::{LocalFileShare, LocalObjectStore},
};

/// Failure while assembling the application
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Backend initialization failed: {0}")]
    Backend(#[from] BackendError),

    #[error("{0} not initialized")]
    MissingBackend(&'static str),
}

/// Application builder for clean dependency injection and setup.
///
/// Backends injected explicitly take precedence over the configured ones.
pub struct ApplicationBuilder {
    config: Config,
    pools: HashMap<String, PgPool>,
    object_store: Option<Arc<dyn ObjectStore>>,
    file_share: Option<Arc<dyn FileShare>>,
    queue: Option<Arc<dyn MessageQueue>>,
    table: Option<Arc<dyn RecordTable>>,
}

impl ApplicationBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            pools: HashMap::new(),
            object_store: None,
            file_share: None,
            queue: None,
            table: None,
        }
    }

    pub fn with_object_store(mut self, object_store: Arc<dyn ObjectStore>) -> Self {
        self.object_store = Some(object_store);
        self
    }

    pub fn with_file_share(mut self, file_share: Arc<dyn FileShare>) -> Self {
        self.file_share = Some(file_share);
        self
    }

    pub fn with_message_queue(mut self, queue: Arc<dyn MessageQueue>) -> Self {
        self.queue = Some(queue);
        self
    }

    pub fn with_record_table(mut self, table: Arc<dyn RecordTable>) -> Self {
        self.table = Some(table);
        self
    }

    /// Construct every backend not injected yet from the connection strings
    pub async fn with_backends_from_config(mut self) -> Result<Self, BuildError> {
        if self.object_store.is_none() {
            let object_store: Arc<dyn ObjectStore> =
                match self.config.file_backend(Capability::ObjectStore)? {
                    FileBackend::InMemory { public_base_url } => {
                        Arc::new(InMemoryObjectStore::new(public_base_url))
                    }
                    FileBackend::LocalFilesystem {
                        root,
                        public_base_url,
                    } => {
                        let store = LocalObjectStore::new(root, public_base_url);
                        store.init().await?;
                        Arc::new(store)
                    }
                };
            self.object_store = Some(object_store);
        }

        if self.file_share.is_none() {
            let file_share: Arc<dyn FileShare> =
                match self.config.file_backend(Capability::FileShare)? {
                    FileBackend::InMemory { .. } => Arc::new(InMemoryFileShare::new()),
                    FileBackend::LocalFilesystem { root, .. } => {
                        let share = LocalFileShare::new(root);
                        share.init().await?;
                        Arc::new(share)
                    }
                };
            self.file_share = Some(file_share);
        }

        if self.queue.is_none() {
            let queue: Arc<dyn MessageQueue> =
                match self.config.database_backend(Capability::Queue)? {
                    DatabaseBackend::InMemory => Arc::new(InMemoryMessageQueue::new()),
                    DatabaseBackend::Postgres { url } => {
                        Arc::new(PostgresMessageQueue::new(self.pool_for(&url).await?))
                    }
                };
            self.queue = Some(queue);
        }

        if self.table.is_none() {
            let table: Arc<dyn RecordTable> =
                match self.config.database_backend(Capability::RecordTable)? {
                    DatabaseBackend::InMemory => Arc::new(InMemoryRecordTable::new()),
                    DatabaseBackend::Postgres { url } => {
                        Arc::new(PostgresRecordTable::new(self.pool_for(&url).await?))
                    }
                };
            self.table = Some(table);
        }

        info!("Infrastructure layer initialized");
        Ok(self)
    }

    /// Connection pool for `url`, shared by every capability using it
    async fn pool_for(&mut self, url: &str) -> Result<PgPool, BuildError> {
        if let Some(pool) = self.pools.get(url) {
            return Ok(pool.clone());
        }

        let pool = self.connect(url).await?;

        info!("Running database migrations");
        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to run migrations: {}", e);
                e
            })?;

        self.pools.insert(url.to_string(), pool.clone());
        Ok(pool)
    }

    /// Connect with retry and exponential backoff
    async fn connect(&self, url: &str) -> Result<PgPool, BuildError> {
        let mut retries = 3;
        let mut delay = Duration::from_secs(1);

        loop {
            match PgPoolOptions::new()
                .max_connections(self.config.db_max_connections)
                .acquire_timeout(Duration::from_secs(self.config.db_acquire_timeout_secs))
                .connect(url)
                .await
            {
                Ok(pool) => {
                    info!(
                        "Database pool configured: max={}, acquire_timeout={}s",
                        self.config.db_max_connections, self.config.db_acquire_timeout_secs
                    );
                    return Ok(pool);
                }
                Err(e) if retries > 0 => {
                    retries -= 1;
                    tracing::warn!(
                        "Database connection failed, retrying in {:?} ({} retries left): {}",
                        delay,
                        retries,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    delay *= 2;
                }
                Err(e) => {
                    tracing::error!("Failed to connect to database after retries: {}", e);
                    return Err(e.into());
                }
            }
        }
    }

    /// Build application state with all use cases
    pub fn build(self) -> Result<AppState, BuildError> {
        let object_store = self
            .object_store
            .ok_or(BuildError::MissingBackend("Object store"))?;
        let file_share = self
            .file_share
            .ok_or(BuildError::MissingBackend("File share"))?;
        let queue = self.queue.ok_or(BuildError::MissingBackend("Message queue"))?;
        let table = self.table.ok_or(BuildError::MissingBackend("Record table"))?;

        let state = AppState {
            upload_image: Arc::new(UploadImageUseCase::new(Arc::clone(&object_store))),
            list_images: Arc::new(ListImagesUseCase::new(Arc::clone(&object_store))),
            upload_contract: Arc::new(UploadContractUseCase::new(Arc::clone(&file_share))),
            list_contracts: Arc::new(ListContractsUseCase::new(Arc::clone(&file_share))),
            send_order_message: Arc::new(SendOrderMessageUseCase::new(Arc::clone(&queue))),
            add_customer: Arc::new(AddCustomerUseCase::new(Arc::clone(&table))),
            list_customers: Arc::new(ListCustomersUseCase::new(Arc::clone(&table))),
            storage_stats: Arc::new(StorageStatsUseCase::new(
                object_store,
                file_share,
                queue,
                table,
            )),
            config: self.config,
        };

        info!("Application layer initialized");
        Ok(state)
    }
}
