use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers::{
    contracts::ContractUploadForm, health::HealthResponse, images::ImageUploadForm,
    queue::QueueMessageForm,
};
use crate::application::dto::{CustomerDto, NewCustomer, StorageStatsReport, UploadResult};

/// OpenAPI specification for the retail storage gateway
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Retail Storage Gateway API",
        version = "1.0.0",
        description = "Product images, contracts, order notifications and customer profiles over four storage backends"
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        crate::api::handlers::health::health_handler,
        crate::api::handlers::images::upload_image_handler,
        crate::api::handlers::images::list_images_handler,
        crate::api::handlers::contracts::upload_contract_handler,
        crate::api::handlers::contracts::list_contracts_handler,
        crate::api::handlers::queue::send_queue_message_handler,
        crate::api::handlers::customers::add_customer_handler,
        crate::api::handlers::customers::list_customers_handler,
        crate::api::handlers::stats::storage_stats_handler,
    ),
    components(
        schemas(
            UploadResult,
            CustomerDto,
            NewCustomer,
            StorageStatsReport,
            HealthResponse,
            ImageUploadForm,
            ContractUploadForm,
            QueueMessageForm,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "images", description = "Product images in the object store"),
        (name = "contracts", description = "Contracts in the file share"),
        (name = "queue", description = "Order notifications"),
        (name = "customers", description = "Customer profiles in the record table"),
        (name = "stats", description = "Cross-backend usage counts")
    )
)]
pub struct ApiDoc;

/// Create the Swagger UI route
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}
