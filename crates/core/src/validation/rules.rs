//! Rule and report types.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A single conditional check applied to an invoice document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Rule {
    /// Dotted path into the invoice, e.g. `invoice.buyer.vatNumber`.
    pub field: String,
    /// Operator token as written by the rule author. Kept raw so failure
    /// messages echo unknown operators verbatim.
    pub operator: String,
    /// Comparison operand. Absent and `null` are the same operand.
    #[serde(default)]
    pub value: Value,
    #[serde(
        default,
        deserialize_with = "deserialize_action",
        skip_serializing_if = "Option::is_none"
    )]
    pub action: Option<RuleAction>,
}

impl Rule {
    /// Severity applied when this rule fails. Defaults to [`RuleAction::Error`].
    pub fn severity(&self) -> RuleAction {
        self.action.clone().unwrap_or_default()
    }
}

/// How a failed rule is classified in the report.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    #[default]
    Error,
    Warning,
}

/// Only the literal string `"warning"` downgrades a failure. Any other
/// action, whatever its JSON type, is an error; `null` is left unset.
fn deserialize_action<'de, D>(deserializer: D) -> Result<Option<RuleAction>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(action) if action == "warning" => Some(RuleAction::Warning),
        _ => Some(RuleAction::Error),
    })
}

/// Per-rule trace entry. `rule` is the 1-based position in the input list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleLogEntry {
    pub rule: usize,
    pub passed: bool,
}

/// Outcome of evaluating a rule list against one invoice.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// True iff `errors` is empty. Warnings never affect validity.
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub rule_log: Vec<RuleLogEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rule_defaults_value_and_action() {
        let rule: Rule =
            serde_json::from_value(json!({"field": "invoice.id", "operator": "notEmpty"})).unwrap();
        assert_eq!(rule.value, Value::Null);
        assert_eq!(rule.action, None);
        assert_eq!(rule.severity(), RuleAction::Error);
    }

    #[test]
    fn warning_action_is_recognised() {
        let rule: Rule = serde_json::from_value(
            json!({"field": "a", "operator": "==", "value": 1, "action": "warning"}),
        )
        .unwrap();
        assert_eq!(rule.severity(), RuleAction::Warning);
    }

    #[test]
    fn unrecognised_action_falls_back_to_error() {
        let rule: Rule = serde_json::from_value(
            json!({"field": "a", "operator": "==", "value": 1, "action": "info"}),
        )
        .unwrap();
        assert_eq!(rule.severity(), RuleAction::Error);
    }

    #[test]
    fn null_action_is_error() {
        let rule: Rule = serde_json::from_value(
            json!({"field": "a", "operator": "==", "value": 1, "action": null}),
        )
        .unwrap();
        assert_eq!(rule.severity(), RuleAction::Error);
    }

    #[test]
    fn non_string_actions_are_errors() {
        for action in [json!(0), json!(1), json!(true), json!({}), json!(["warning"])] {
            let rule: Rule = serde_json::from_value(
                json!({"field": "a", "operator": "notEmpty", "action": action.clone()}),
            )
            .unwrap();
            assert_eq!(rule.severity(), RuleAction::Error, "action {action}");
        }
    }

    #[test]
    fn action_match_is_case_sensitive() {
        let rule: Rule = serde_json::from_value(
            json!({"field": "a", "operator": "notEmpty", "action": "Warning"}),
        )
        .unwrap();
        assert_eq!(rule.severity(), RuleAction::Error);
    }

    #[test]
    fn serialized_action_is_lowercase() {
        let rule = Rule {
            field: "a".to_string(),
            operator: "==".to_string(),
            value: json!(1),
            action: Some(RuleAction::Warning),
        };
        assert_eq!(serde_json::to_value(&rule).unwrap()["action"], "warning");
    }

    #[test]
    fn report_uses_wire_field_names() {
        let report = ValidationReport {
            is_valid: false,
            errors: vec!["Rule failed: a > 1".to_string()],
            warnings: Vec::new(),
            rule_log: vec![RuleLogEntry {
                rule: 1,
                passed: false,
            }],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(
            value,
            json!({
                "isValid": false,
                "errors": ["Rule failed: a > 1"],
                "warnings": [],
                "ruleLog": [{"rule": 1, "passed": false}]
            })
        );
    }
}
