use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::TableEntity;
use crate::domain::errors::DomainError;
use crate::domain::resources::CUSTOMER_PARTITION;
use crate::domain::value_objects::RowKey;

/// Customer profile entity - one row in the customer record table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerProfile {
    partition_key: String,
    row_key: String,
    name: String,
    email: String,
    phone: String,
    timestamp: Option<DateTime<Utc>>,
}

impl CustomerProfile {
    const NAME: &'static str = "Name";
    const EMAIL: &'static str = "Email";
    const PHONE: &'static str = "Phone";

    /// Create a new profile in the shared customer partition with a fresh row key.
    ///
    /// Identical field values still produce distinct profiles.
    pub fn new(name: String, email: String, phone: String) -> Self {
        Self {
            partition_key: CUSTOMER_PARTITION.to_string(),
            row_key: RowKey::new().to_string(),
            name,
            email,
            phone,
            timestamp: None,
        }
    }

    pub fn partition_key(&self) -> &str {
        &self.partition_key
    }

    pub fn row_key(&self) -> &str {
        &self.row_key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn to_entity(&self) -> TableEntity {
        TableEntity::new(self.partition_key.clone(), self.row_key.clone())
            .with_property(Self::NAME, self.name.clone())
            .with_property(Self::EMAIL, self.email.clone())
            .with_property(Self::PHONE, self.phone.clone())
    }

    /// Reconstruct from a stored record
    pub fn from_entity(entity: TableEntity) -> Result<Self, DomainError> {
        let property = |name: &str| {
            entity
                .string_property(name)
                .map(str::to_string)
                .ok_or_else(|| DomainError::MissingProperty(name.to_string()))
        };

        let name = property(Self::NAME)?;
        let email = property(Self::EMAIL)?;
        let phone = property(Self::PHONE)?;

        Ok(Self {
            partition_key: entity.partition_key,
            row_key: entity.row_key,
            name,
            email,
            phone,
            timestamp: entity.timestamp,
        })
    }
}
