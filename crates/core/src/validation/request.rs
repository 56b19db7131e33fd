//! Request-shape parsing for the validation endpoint.
//!
//! Structural problems with the request are the only errors the validator
//! raises; everything that goes wrong inside an individual rule's evaluation
//! is reported as data in the [`ValidationReport`](super::rules::ValidationReport).

use serde_json::Value;

use super::rules::Rule;
use crate::error::CoreError;

/// A parsed `{ "rules": [...], "invoice": {...} }` request.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationRequest {
    pub rules: Vec<Rule>,
    pub invoice: Value,
}

impl ValidationRequest {
    /// Parse and shape-check a raw JSON request body.
    ///
    /// An empty `rules` array is accepted. Any non-null value is accepted
    /// as the invoice; paths into non-objects simply resolve to nothing.
    pub fn from_value(body: Value) -> Result<Self, CoreError> {
        let Value::Object(mut body) = body else {
            return Err(invalid("request body must be a JSON object"));
        };

        let rules = match body.remove("rules") {
            None | Some(Value::Null) => return Err(invalid("rules is required")),
            Some(Value::Array(items)) => items,
            Some(_) => return Err(invalid("rules must be an array")),
        };

        let invoice = match body.remove("invoice") {
            None | Some(Value::Null) => return Err(invalid("invoice is required")),
            Some(invoice) => invoice,
        };

        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_rule(index, item))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { rules, invoice })
    }
}

fn parse_rule(index: usize, item: Value) -> Result<Rule, CoreError> {
    if !item.is_object() {
        return Err(invalid(format!("rules[{index}] must be an object")));
    }
    serde_json::from_value(item).map_err(|e| invalid(format!("rules[{index}]: {e}")))
}

fn invalid(message: impl Into<String>) -> CoreError {
    CoreError::Validation(message.into())
}
