//! Fixed backend resource names and the naming rules each backend kind
//! enforces on them.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::errors::DomainError;

/// Object store container holding product images
pub const IMAGE_CONTAINER: &str = "product-images";

/// File share holding contracts
pub const CONTRACT_SHARE: &str = "contracts";

/// Queue receiving order notifications
pub const ORDER_QUEUE: &str = "order-queue";

/// Record table holding customer profiles
pub const CUSTOMER_TABLE: &str = "customerprofiles";

/// Partition grouping every customer profile
pub const CUSTOMER_PARTITION: &str = "customers";

static HYPHENATED_NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9](?:[a-z0-9]|-[a-z0-9]){2,62}$").expect("Invalid resource name regex")
});

static TABLE_NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9]{2,62}$").expect("Invalid table name regex"));

/// Kind of backend resource a name addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Container,
    Share,
    Queue,
    Table,
}

impl ResourceKind {
    /// Check `name` against the rules of this resource kind.
    ///
    /// Containers, shares and queues take 3-63 lowercase alphanumerics with
    /// single interior hyphens; tables take 3-63 alphanumerics starting with
    /// a letter.
    pub fn validate(self, name: &str) -> Result<(), DomainError> {
        let valid = match self {
            ResourceKind::Container | ResourceKind::Share | ResourceKind::Queue => {
                HYPHENATED_NAME_REGEX.is_match(name)
            }
            ResourceKind::Table => TABLE_NAME_REGEX.is_match(name),
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidResourceName(format!(
                "{} is not a valid {} name",
                name, self
            )))
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Container => write!(f, "container"),
            ResourceKind::Share => write!(f, "share"),
            ResourceKind::Queue => write!(f, "queue"),
            ResourceKind::Table => write!(f, "table"),
        }
    }
}
