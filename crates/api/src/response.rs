//! Shared response envelope types for API handlers.
//!
//! Listing endpoints use a `{ "data": ... }` envelope. The validation
//! endpoint is the exception: it returns the bare report so existing
//! callers of the rule validator keep working.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
