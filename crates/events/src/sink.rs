//! Destinations for run records.

use async_trait::async_trait;
use rulecheck_core::run_log::RuleRunRecord;
use rulecheck_db::repositories::RuleRunRepo;
use rulecheck_db::DbPool;

/// Failure to store a run record.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Somewhere run records can be written.
///
/// Implementations may fail; [`RunLogPersistence`](crate::RunLogPersistence)
/// logs the failure and moves on.
#[async_trait]
pub trait RunLogSink: Send + Sync {
    async fn record(&self, record: &RuleRunRecord) -> Result<(), SinkError>;
}

/// Writes run records to the `rule_runs` table.
pub struct PgRunLogSink {
    pool: DbPool,
}

impl PgRunLogSink {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RunLogSink for PgRunLogSink {
    async fn record(&self, record: &RuleRunRecord) -> Result<(), SinkError> {
        let id = RuleRunRepo::insert(&self.pool, record).await?;
        tracing::debug!(run_id = id, is_valid = record.is_valid, "Rule run recorded");
        Ok(())
    }
}
