//! Rule evaluator: pure logic, no I/O.

use serde_json::Value;

use super::coerce::to_display_string;
use super::compare::compare;
use super::path::resolve_path;
use super::rules::{Rule, RuleAction, RuleLogEntry, ValidationReport};

/// Evaluate every rule against `invoice`, strictly in input order.
///
/// Rules are independent of each other: a failing rule never stops the
/// remaining ones. Failed rules are reported in `errors` or `warnings`
/// according to their action, and every rule gets a `rule_log` entry.
pub fn evaluate_rules(rules: &[Rule], invoice: &Value) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let mut rule_log = Vec::with_capacity(rules.len());

    for (index, rule) in rules.iter().enumerate() {
        let passed = evaluate_single_rule(rule, invoice);
        rule_log.push(RuleLogEntry {
            rule: index + 1,
            passed,
        });

        if !passed {
            let message = failure_message(rule);
            match rule.severity() {
                RuleAction::Error => errors.push(message),
                RuleAction::Warning => warnings.push(message),
            }
        }
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        rule_log,
    }
}

fn evaluate_single_rule(rule: &Rule, invoice: &Value) -> bool {
    let left = resolve_path(invoice, &rule.field);
    compare(&rule.operator, left, &rule.value)
}

/// `Rule failed: <field> <operator> <value>`
fn failure_message(rule: &Rule) -> String {
    format!(
        "Rule failed: {} {} {}",
        rule.field,
        rule.operator,
        to_display_string(Some(&rule.value))
    )
}
