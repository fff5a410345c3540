mod customer_profile;
mod table_entity;

pub use customer_profile::CustomerProfile;
pub use table_entity::TableEntity;
