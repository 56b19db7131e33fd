//! Pure domain logic for the rulecheck invoice validator.
//!
//! Everything in this crate is free of I/O: the rule data model, dotted-path
//! resolution, operator semantics, the evaluator, request-shape parsing and
//! the run-log record handed to the persistence layer.

pub mod error;
pub mod run_log;
pub mod types;
pub mod validation;
