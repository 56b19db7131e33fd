//! The closed set of comparison operators and their accepted tokens.

use serde::Serialize;

/// A comparison operator a rule can apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    GreaterThan,
    LessThan,
    GreaterOrEqual,
    LessOrEqual,
    Equals,
    StrictEquals,
    NotEquals,
    StrictNotEquals,
    NotEmpty,
    Contains,
    Matches,
}

impl Operator {
    /// Parse an operator token. Matching is case-sensitive; `None` means the
    /// token is unknown and the rule using it always fails.
    pub fn parse(token: &str) -> Option<Self> {
        let op = match token {
            ">" | "greaterThan" => Self::GreaterThan,
            "<" | "lessThan" => Self::LessThan,
            ">=" => Self::GreaterOrEqual,
            "<=" => Self::LessOrEqual,
            "==" | "equals" => Self::Equals,
            "===" => Self::StrictEquals,
            "!=" => Self::NotEquals,
            "!==" => Self::StrictNotEquals,
            "notEmpty" => Self::NotEmpty,
            "contains" => Self::Contains,
            "matches" => Self::Matches,
            _ => return None,
        };
        Some(op)
    }

    /// Every token that parses to this operator.
    pub fn tokens(self) -> &'static [&'static str] {
        match self {
            Self::GreaterThan => &[">", "greaterThan"],
            Self::LessThan => &["<", "lessThan"],
            Self::GreaterOrEqual => &[">="],
            Self::LessOrEqual => &["<="],
            Self::Equals => &["==", "equals"],
            Self::StrictEquals => &["==="],
            Self::NotEquals => &["!="],
            Self::StrictNotEquals => &["!=="],
            Self::NotEmpty => &["notEmpty"],
            Self::Contains => &["contains"],
            Self::Matches => &["matches"],
        }
    }
}

/// Catalog entry describing one operator for API consumers.
#[derive(Debug, Clone, Serialize)]
pub struct OperatorInfo {
    pub tokens: &'static [&'static str],
    pub description: &'static str,
}

/// Every supported operator with a one-line description, in listing order.
pub const OPERATORS: &[(Operator, &str)] = &[
    (
        Operator::GreaterThan,
        "Field is greater than value (numeric when both sides are numeric)",
    ),
    (
        Operator::LessThan,
        "Field is less than value (numeric when both sides are numeric)",
    ),
    (Operator::GreaterOrEqual, "Field is greater than or equal to value"),
    (Operator::LessOrEqual, "Field is less than or equal to value"),
    (
        Operator::Equals,
        "Field equals value, coercing numeric strings and booleans",
    ),
    (Operator::StrictEquals, "Field equals value with the same JSON type"),
    (Operator::NotEquals, "Negation of loose equality"),
    (Operator::StrictNotEquals, "Negation of strict equality"),
    (Operator::NotEmpty, "Field is present, not null, and not blank"),
    (Operator::Contains, "Field text contains value text"),
    (
        Operator::Matches,
        "Field text matches the value as a regular expression",
    ),
];

/// All supported operators in a stable order.
pub fn catalog() -> Vec<OperatorInfo> {
    OPERATORS
        .iter()
        .map(|&(op, description)| OperatorInfo {
            tokens: op.tokens(),
            description,
        })
        .collect()
}
