use axum::{
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    add_customer_handler, health_handler, list_contracts_handler, list_customers_handler,
    list_images_handler, send_queue_message_handler, storage_stats_handler,
    upload_contract_handler, upload_image_handler,
};
use crate::api::middleware::{
    create_body_limit_layer, create_cors_layer, request_logging_middleware,
};
use crate::api::openapi::swagger_ui;
use crate::application::use_cases::{
    AddCustomerUseCase, ListContractsUseCase, ListCustomersUseCase, ListImagesUseCase,
    SendOrderMessageUseCase, StorageStatsUseCase, UploadContractUseCase, UploadImageUseCase,
};
use crate::config::Config;

/// Application state container
#[derive(Clone)]
pub struct AppState {
    pub upload_image: Arc<UploadImageUseCase>,
    pub list_images: Arc<ListImagesUseCase>,
    pub upload_contract: Arc<UploadContractUseCase>,
    pub list_contracts: Arc<ListContractsUseCase>,
    pub send_order_message: Arc<SendOrderMessageUseCase>,
    pub add_customer: Arc<AddCustomerUseCase>,
    pub list_customers: Arc<ListCustomersUseCase>,
    pub storage_stats: Arc<StorageStatsUseCase>,
    pub config: Config,
}

/// Create router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/images",
            post(upload_image_handler)
                .with_state(Arc::clone(&state.upload_image))
                .get(list_images_handler)
                .with_state(Arc::clone(&state.list_images)),
        )
        .route(
            "/api/contracts",
            post(upload_contract_handler)
                .with_state(Arc::clone(&state.upload_contract))
                .get(list_contracts_handler)
                .with_state(Arc::clone(&state.list_contracts)),
        )
        .route(
            "/api/queue/messages",
            post(send_queue_message_handler).with_state(Arc::clone(&state.send_order_message)),
        )
        .route(
            "/api/customers",
            post(add_customer_handler)
                .with_state(Arc::clone(&state.add_customer))
                .get(list_customers_handler)
                .with_state(Arc::clone(&state.list_customers)),
        )
        .route(
            "/api/stats",
            get(storage_stats_handler).with_state(Arc::clone(&state.storage_stats)),
        )
        // Uploads are bounded by the policy check; the outer limit only caps abuse
        .layer(DefaultBodyLimit::disable())
        .layer(create_body_limit_layer());

    Router::new()
        .route("/health", get(health_handler))
        .merge(api)
        .merge(swagger_ui())
        .layer(axum_middleware::from_fn(request_logging_middleware))
        .layer(create_cors_layer(&state.config.allowed_origins))
}
