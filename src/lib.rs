//! # Retail Storage Gateway
//!
//! HTTP gateway over four storage capabilities used by a retail back office:
//! an object store for product images, a file share for contracts, a queue
//! for order notifications and a record table for customer profiles.
//!
//! ## Architecture Layers
//!
//! - **Domain**: Upload policies, naming strategies, resource names, entities
//! - **Application**: Use cases and ports (interfaces)
//! - **Infrastructure**: In-memory, local filesystem and PostgreSQL adapters
//! - **API**: HTTP handlers and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use retail_gateway::{api::create_router, application::builder::ApplicationBuilder, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let state = ApplicationBuilder::new(Config::in_memory())
//!     .with_backends_from_config()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::{entities, value_objects};
