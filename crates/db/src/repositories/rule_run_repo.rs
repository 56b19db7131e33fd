//! Repository for the insert-only `rule_runs` table.

use rulecheck_core::run_log::RuleRunRecord;
use rulecheck_core::types::DbId;
use sqlx::PgPool;

/// Write access to the run history. There is no update or delete path.
pub struct RuleRunRepo;

impl RuleRunRepo {
    /// Insert one run record, returning the generated ID.
    pub async fn insert(pool: &PgPool, record: &RuleRunRecord) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO rule_runs (created_at, is_valid, errors, warnings) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(record.timestamp)
        .bind(record.is_valid)
        .bind(&record.errors)
        .bind(&record.warnings)
        .fetch_one(pool)
        .await
    }
}
