//! Background service draining the event bus into a run log sink.
//!
//! [`RunLogPersistence`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and writes every received record through a [`RunLogSink`]. It runs as a
//! long-lived task and shuts down when the bus sender is dropped.

use std::sync::Arc;

use rulecheck_core::run_log::RuleRunRecord;
use tokio::sync::broadcast;

use crate::sink::RunLogSink;

/// Background service that persists run records.
pub struct RunLogPersistence;

impl RunLogPersistence {
    /// Run the persistence loop until the bus closes.
    ///
    /// Sink failures are logged and swallowed so one bad write never stops
    /// later records from being stored. Returns the number of records the
    /// sink accepted.
    pub async fn run(
        sink: Arc<dyn RunLogSink>,
        mut receiver: broadcast::Receiver<RuleRunRecord>,
    ) -> u64 {
        let mut stored = 0;
        loop {
            match receiver.recv().await {
                Ok(record) => match sink.record(&record).await {
                    Ok(()) => stored += 1,
                    Err(e) => {
                        tracing::error!(
                            error = %e,
                            is_valid = record.is_valid,
                            "Failed to persist rule run"
                        );
                    }
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(
                        skipped = n,
                        "Run log persistence lagged, some runs were not persisted"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!(stored, "Event bus closed, run log persistence shutting down");
                    break;
                }
            }
        }
        stored
    }
}
