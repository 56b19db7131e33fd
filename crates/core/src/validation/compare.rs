//! Operator semantics over resolved field values.

use std::cmp::Ordering;

use regex::Regex;
use serde_json::Value;

use super::coerce::{to_display_string, to_number, to_text_or_empty};
use super::operator::Operator;

/// Apply `operator` to the resolved field value `left` and the rule operand
/// `right`.
///
/// Total over all inputs: unknown operators and invalid `matches` patterns
/// yield `false` and nothing here panics.
pub fn compare(operator: &str, left: Option<&Value>, right: &Value) -> bool {
    match Operator::parse(operator) {
        Some(op) => apply(op, left, right),
        None => false,
    }
}

/// Apply a parsed operator.
pub fn apply(op: Operator, left: Option<&Value>, right: &Value) -> bool {
    match op {
        Operator::GreaterThan => relational(left, right, Ordering::is_gt),
        Operator::LessThan => relational(left, right, Ordering::is_lt),
        Operator::GreaterOrEqual => relational(left, right, Ordering::is_ge),
        Operator::LessOrEqual => relational(left, right, Ordering::is_le),
        Operator::Equals => loose_equals(left, right),
        Operator::StrictEquals => left.is_some_and(|l| strict_equals(l, right)),
        Operator::NotEquals => !loose_equals(left, right),
        Operator::StrictNotEquals => !left.is_some_and(|l| strict_equals(l, right)),
        Operator::NotEmpty => match left {
            None | Some(Value::Null) => false,
            Some(_) => !to_display_string(left).trim().is_empty(),
        },
        Operator::Contains => to_text_or_empty(left).contains(&to_display_string(Some(right))),
        Operator::Matches => match Regex::new(&to_display_string(Some(right))) {
            Ok(re) => re.is_match(&to_text_or_empty(left)),
            Err(_) => false,
        },
    }
}

/// Ordering comparison: numeric when both sides have a numeric form,
/// lexicographic when both are strings, otherwise false.
fn relational(left: Option<&Value>, right: &Value, accept: fn(Ordering) -> bool) -> bool {
    if let (Some(l), Some(r)) = (to_number(left), to_number(Some(right))) {
        return l.partial_cmp(&r).is_some_and(accept);
    }
    match (left, right) {
        (Some(Value::String(l)), Value::String(r)) => accept(l.as_str().cmp(r.as_str())),
        _ => false,
    }
}

/// Type-coercing equality.
///
/// Null and undefined equal each other and nothing else. Same-kind operands
/// use [`strict_equals`]. Numbers, strings and booleans of different kinds
/// compare by numeric form. Containers never equal primitives.
fn loose_equals(left: Option<&Value>, right: &Value) -> bool {
    let left = match left {
        None | Some(Value::Null) => return right.is_null(),
        Some(l) => l,
    };
    if right.is_null() {
        return false;
    }
    if same_kind(left, right) {
        return strict_equals(left, right);
    }
    let is_primitive = |v: &Value| matches!(v, Value::Bool(_) | Value::Number(_) | Value::String(_));
    if is_primitive(left) && is_primitive(right) {
        return match (to_number(Some(left)), to_number(Some(right))) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        };
    }
    false
}

/// Equality without coercion. Numbers compare by value (`1 == 1.0`),
/// containers compare structurally.
fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(l), Value::Bool(r)) => l == r,
        (Value::Number(l), Value::Number(r)) => match (l.as_f64(), r.as_f64()) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        },
        (Value::String(l), Value::String(r)) => l == r,
        (Value::Array(l), Value::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r).all(|(a, b)| strict_equals(a, b))
        }
        (Value::Object(l), Value::Object(r)) => {
            l.len() == r.len()
                && l.iter()
                    .all(|(key, a)| r.get(key).is_some_and(|b| strict_equals(a, b)))
        }
        _ => false,
    }
}

fn same_kind(a: &Value, b: &Value) -> bool {
    std::mem::discriminant(a) == std::mem::discriminant(b)
}
