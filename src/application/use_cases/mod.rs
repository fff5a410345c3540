mod add_customer;
mod list_contracts;
mod list_customers;
mod list_images;
mod send_order_message;
mod storage_stats;
mod upload_contract;
mod upload_image;

pub use add_customer::AddCustomerUseCase;
pub use list_contracts::ListContractsUseCase;
pub use list_customers::ListCustomersUseCase;
pub use list_images::ListImagesUseCase;
pub use send_order_message::SendOrderMessageUseCase;
pub use storage_stats::StorageStatsUseCase;
pub use upload_contract::UploadContractUseCase;
pub use upload_image::UploadImageUseCase;
