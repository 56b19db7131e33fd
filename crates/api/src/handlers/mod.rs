//! Request handlers.
//!
//! Handlers parse the request, delegate to `rulecheck_core`, and map
//! errors via [`AppError`](crate::error::AppError).

pub mod validation;
