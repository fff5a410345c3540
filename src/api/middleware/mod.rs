pub mod body_limit;
pub mod cors;
pub mod request_logging;

pub use body_limit::create_body_limit_layer;
pub use cors::create_cors_layer;
pub use request_logging::request_logging_middleware;
