pub mod contracts;
pub mod customers;
pub mod form;
pub mod health;
pub mod images;
pub mod queue;
pub mod stats;

pub use contracts::{list_contracts_handler, upload_contract_handler};
pub use customers::{add_customer_handler, list_customers_handler};
pub use health::health_handler;
pub use images::{list_images_handler, upload_image_handler};
pub use queue::send_queue_message_handler;
pub use stats::storage_stats_handler;
