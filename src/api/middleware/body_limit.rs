use tower_http::limit::RequestBodyLimitLayer;

use crate::domain::value_objects::UploadPolicy;

/// Room for multipart boundaries and part headers on top of the file itself
const MULTIPART_OVERHEAD: u64 = 1024 * 1024;

/// Largest request body accepted on any route.
///
/// Sized so a file just over the largest policy ceiling still reaches the
/// policy check and gets its size message instead of a bare 413.
pub fn max_request_bytes() -> usize {
    let largest = UploadPolicy::IMAGE
        .max_bytes()
        .max(UploadPolicy::DOCUMENT.max_bytes());
    (largest + MULTIPART_OVERHEAD) as usize
}

pub fn create_body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(max_request_bytes())
}
