//! Fire-and-forget run history for the rulecheck service.
//!
//! - [`EventBus`]: in-process publish/subscribe hub for [`RuleRunRecord`]s,
//!   backed by `tokio::sync::broadcast`.
//! - [`RunLogSink`]: destination for run records; [`PgRunLogSink`] writes
//!   to the `rule_runs` table.
//! - [`RunLogPersistence`]: background task draining the bus into a sink.
//!   Sink failures are logged and dropped, never reported to HTTP callers.
//!
//! [`RuleRunRecord`]: rulecheck_core::run_log::RuleRunRecord

pub mod bus;
pub mod persistence;
pub mod sink;

pub use bus::EventBus;
pub use persistence::RunLogPersistence;
pub use sink::{PgRunLogSink, RunLogSink, SinkError};
