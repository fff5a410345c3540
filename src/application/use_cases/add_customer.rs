use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::{NewCustomer, UploadResult};
use crate::application::errors::CustomerError;
use crate::application::ports::RecordTable;
use crate::domain::entities::CustomerProfile;
use crate::domain::resources::CUSTOMER_TABLE;
use crate::domain::validation::Validation;

/// Use case: Create a customer profile record
pub struct AddCustomerUseCase {
    table: Arc<dyn RecordTable>,
}

impl AddCustomerUseCase {
    pub fn new(table: Arc<dyn RecordTable>) -> Self {
        Self { table }
    }

    /// Always inserts a new record; identical submissions are not merged
    pub async fn execute(&self, form: NewCustomer) -> Result<UploadResult, CustomerError> {
        info!("AddCustomer triggered");

        let required = |value: &Option<String>, field: &str| {
            Validation::require_field(value.as_deref(), field)
                .map(str::to_string)
                .map_err(|e| CustomerError::InvalidRequest(e.to_string()))
        };
        let name = required(&form.name, "name")?;
        let email = required(&form.email, "email")?;
        let phone = required(&form.phone, "phone")?;

        let customer = CustomerProfile::new(name, email, phone);

        if let Err(e) = self.table.create_table_if_not_exists(CUSTOMER_TABLE).await {
            error!(error = %e, "Error adding customer to table storage");
            return Err(e.into());
        }

        if let Err(e) = self
            .table
            .insert_entity(CUSTOMER_TABLE, customer.to_entity())
            .await
        {
            error!(error = %e, "Error adding customer to table storage");
            return Err(e.into());
        }

        info!(row_key = %customer.row_key(), "Customer {} added successfully", customer.name());

        Ok(UploadResult::succeeded(
            format!("Customer {} added successfully.", customer.name()),
            None,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{BackendError, MockRecordTable};

    fn form() -> NewCustomer {
        NewCustomer {
            name: Some("Ada".to_string()),
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0100".to_string()),
        }
    }

    #[tokio::test]
    async fn test_add_customer_inserts_into_customer_partition() {
        let mut mock_table = MockRecordTable::new();
        mock_table
            .expect_create_table_if_not_exists()
            .withf(|table| table == "customerprofiles")
            .times(1)
            .returning(|_| Ok(()));
        mock_table
            .expect_insert_entity()
            .withf(|table, entity| {
                table == "customerprofiles"
                    && entity.partition_key == "customers"
                    && entity.string_property("Name") == Some("Ada")
                    && entity.string_property("Email") == Some("ada@example.com")
                    && entity.string_property("Phone") == Some("555-0100")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let use_case = AddCustomerUseCase::new(Arc::new(mock_table));
        let result = use_case.execute(form()).await.unwrap();

        assert!(result.success);
        assert_eq!(result.message, "Customer Ada added successfully.");
    }

    #[tokio::test]
    async fn test_add_customer_missing_field_fails_fast() {
        let mut mock_table = MockRecordTable::new();
        mock_table.expect_create_table_if_not_exists().times(0);
        mock_table.expect_insert_entity().times(0);

        let use_case = AddCustomerUseCase::new(Arc::new(mock_table));
        let mut incomplete = form();
        incomplete.phone = None;

        let err = use_case.execute(incomplete).await.unwrap_err();
        assert!(matches!(err, CustomerError::InvalidRequest(_)));
        assert!(err.to_string().contains("phone"));
    }

    #[tokio::test]
    async fn test_add_customer_insert_failure() {
        let mut mock_table = MockRecordTable::new();
        mock_table
            .expect_create_table_if_not_exists()
            .returning(|_| Ok(()));
        mock_table
            .expect_insert_entity()
            .returning(|_, _| Err(BackendError::Conflict("customers/x".to_string())));

        let use_case = AddCustomerUseCase::new(Arc::new(mock_table));
        let result = use_case.execute(form()).await;

        assert!(matches!(result, Err(CustomerError::Backend(_))));
    }
}
