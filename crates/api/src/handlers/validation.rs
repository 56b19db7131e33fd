//! Handlers for the `/validation` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::Utc;
use rulecheck_core::run_log::RuleRunRecord;
use rulecheck_core::validation::evaluator::evaluate_rules;
use rulecheck_core::validation::operator::{catalog, OperatorInfo};
use rulecheck_core::validation::request::ValidationRequest;
use rulecheck_core::validation::rules::ValidationReport;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/validation/operators
///
/// List the supported operators with their accepted tokens.
pub async fn list_operators() -> Json<DataResponse<Vec<OperatorInfo>>> {
    Json(DataResponse { data: catalog() })
}

/// POST /api/v1/validation/validate
///
/// Evaluate the supplied rules against the supplied invoice. Always 200 once
/// the request is well-formed, whether or not the invoice passes. The run
/// outcome is published to the event bus for best-effort persistence.
pub async fn validate(
    State(state): State<AppState>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<Json<ValidationReport>> {
    let Json(body) = payload?;
    let request = ValidationRequest::from_value(body)?;

    if request.rules.len() > state.config.max_rules {
        return Err(AppError::BadRequest(format!(
            "rules exceeds the limit of {} per request",
            state.config.max_rules
        )));
    }

    let report = evaluate_rules(&request.rules, &request.invoice);

    tracing::info!(
        rule_count = request.rules.len(),
        is_valid = report.is_valid,
        errors = report.errors.len(),
        warnings = report.warnings.len(),
        "Validated invoice rules"
    );

    state
        .event_bus
        .publish(RuleRunRecord::from_report(&report, Utc::now()));

    Ok(Json(report))
}
