//! Rules for deriving the key an uploaded file is stored under.
//!
//! The object store prefixes every key with a fresh 128-bit random token so
//! concurrent uploads sharing a file name never overwrite each other. The
//! file share stores files under their original name, so a later upload with
//! the same name replaces the earlier file. Both behaviors are observable and
//! intentional.

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::value_objects::StoredKey;

/// Collision policy of a backend kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingStrategy {
    /// `{uuid}_{original}`: never collides
    UniquePrefix,
    /// Original name unchanged: same name overwrites
    Verbatim,
}

impl NamingStrategy {
    pub fn key_for(self, original_file_name: &str) -> Result<StoredKey, DomainError> {
        match self {
            NamingStrategy::UniquePrefix => {
                StoredKey::new(format!("{}_{}", unique_token(), original_file_name))
            }
            NamingStrategy::Verbatim => StoredKey::new(original_file_name),
        }
    }
}

/// Random 128-bit token shared by object keys and record row keys
pub fn unique_token() -> Uuid {
    Uuid::new_v4()
}
