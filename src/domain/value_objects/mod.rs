mod media_kind;
mod row_key;
mod stored_key;
mod upload_policy;

pub use media_kind::MediaKind;
pub use row_key::RowKey;
pub use stored_key::StoredKey;
pub use upload_policy::UploadPolicy;
