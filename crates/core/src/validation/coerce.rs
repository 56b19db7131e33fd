//! Value coercions used by the comparison operators.
//!
//! Operands are `Option<&Value>`; `None` stands for a field that did not
//! resolve ("undefined"). The conversions here are the single source of
//! truth for how mixed-type comparisons behave.

use serde_json::{Number, Value};

/// String form of an operand, as used in failure messages and by `notEmpty`.
///
/// | Operand   | Rendering                                             |
/// |-----------|-------------------------------------------------------|
/// | undefined | `undefined`                                           |
/// | null      | `null`                                                |
/// | bool      | `true` / `false`                                      |
/// | number    | shortest form, integral floats without `.0`           |
/// |           | exponent form below `1e-6` and from `1e21` up         |
/// | string    | as-is                                                 |
/// | array     | elements joined by `,`, null elements rendered empty  |
/// | object    | compact JSON                                          |
pub fn to_display_string(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(Value::Null) => "null".to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => format_number(n),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => to_display_string(Some(other)),
            })
            .collect::<Vec<_>>()
            .join(","),
        Some(obj @ Value::Object(_)) => obj.to_string(),
    }
}

/// Like [`to_display_string`] but undefined and null become `""`.
///
/// Used by `contains` and `matches` so a missing field is searched as empty
/// text instead of the literal word `undefined`.
pub fn to_text_or_empty(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        other => to_display_string(other),
    }
}

/// Numeric form of an operand, or `None` if it has none.
///
/// Numbers are taken as-is, booleans become 1/0, and strings are trimmed
/// and parsed as decimal floats. Empty strings, null, undefined, arrays and
/// objects have no numeric form. Non-finite results are discarded.
pub fn to_number(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()?
        }
        Value::Null | Value::Array(_) | Value::Object(_) => return None,
    };
    n.is_finite().then_some(n)
}

fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(format_float).unwrap_or_default()
    }
}

/// Plain decimal inside `[1e-6, 1e21)`, exponent form (`1e+21`, `1.5e-7`)
/// outside it.
fn format_float(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    if (1e-6..1e21).contains(&f.abs()) {
        return f.to_string();
    }
    let exp = format!("{f:e}");
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{mantissa}e+{power}"),
        _ => exp,
    }
}
