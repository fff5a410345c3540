use std::sync::Arc;
use tracing::{error, info};

use crate::application::dto::CustomerDto;
use crate::application::errors::CustomerError;
use crate::application::ports::RecordTable;
use crate::domain::entities::CustomerProfile;
use crate::domain::resources::{CUSTOMER_PARTITION, CUSTOMER_TABLE};

/// Use case: List every customer profile
pub struct ListCustomersUseCase {
    table: Arc<dyn RecordTable>,
}

impl ListCustomersUseCase {
    pub fn new(table: Arc<dyn RecordTable>) -> Self {
        Self { table }
    }

    /// Profiles in the customer partition, in backend query order
    pub async fn execute(&self) -> Result<Vec<CustomerDto>, CustomerError> {
        info!("GetCustomers triggered");

        let entities = async {
            self.table.create_table_if_not_exists(CUSTOMER_TABLE).await?;
            self.table
                .query_partition(CUSTOMER_TABLE, CUSTOMER_PARTITION)
                .await
        }
        .await
        .map_err(|e| {
            error!(error = %e, "Error retrieving customers");
            CustomerError::Backend(e)
        })?;

        entities
            .into_iter()
            .map(|entity| {
                CustomerProfile::from_entity(entity)
                    .map(CustomerDto::from)
                    .map_err(|e| {
                        error!(error = %e, "Stored customer record is malformed");
                        CustomerError::Domain(e)
                    })
            })
            .collect()
    }
}
