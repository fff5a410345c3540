use axum::{extract::State, response::Json};
use std::sync::Arc;

use super::form::FormFields;
use crate::api::errors::ApiError;
use crate::application::dto::{CustomerDto, NewCustomer, UploadResult};
use crate::application::use_cases::{AddCustomerUseCase, ListCustomersUseCase};

/// POST /api/customers
/// Create a customer profile; identical submissions create separate profiles
#[utoipa::path(
    post,
    path = "/api/customers",
    tag = "customers",
    request_body(content = NewCustomer, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Customer created", body = UploadResult),
        (status = 400, description = "Missing field or wrong content type", body = UploadResult),
        (status = 500, description = "Table unavailable")
    )
)]
pub async fn add_customer_handler(
    State(use_case): State<Arc<AddCustomerUseCase>>,
    mut fields: FormFields,
) -> Result<Json<UploadResult>, ApiError> {
    let form = NewCustomer {
        name: fields.take("name"),
        email: fields.take("email"),
        phone: fields.take("phone"),
    };
    let result = use_case.execute(form).await?;
    Ok(Json(result))
}

/// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "customers",
    responses(
        (status = 200, description = "Customer profiles", body = Vec<CustomerDto>),
        (status = 500, description = "Table unavailable")
    )
)]
pub async fn list_customers_handler(
    State(use_case): State<Arc<ListCustomersUseCase>>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    Ok(Json(use_case.execute().await?))
}
