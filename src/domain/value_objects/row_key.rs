use uuid::Uuid;

use crate::domain::errors::DomainError;

/// Unique row identifier for a record table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(Uuid);

impl RowKey {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RowKey {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RowKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for RowKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| DomainError::InvalidRowKey(e.to_string()))
    }
}
