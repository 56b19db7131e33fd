//! Invoice rule validation engine.
//!
//! Provides the rule model, dotted-path lookup, the pinned coercion table,
//! operator semantics and the evaluator, all without I/O.

pub mod coerce;
pub mod compare;
pub mod evaluator;
pub mod operator;
pub mod path;
pub mod request;
pub mod rules;
