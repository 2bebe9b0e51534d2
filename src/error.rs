use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub enum MacroError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("failed to parse rule: {0}")]
    RuleParseError(String),

    #[error("rule '{row}' has {found} fields, expected {expected}")]
    FieldCount {
        row: String,
        expected: usize,
        found: usize,
    },

    #[error("invalid expression in address '{address}': {reason}")]
    ExpressionError { address: String, reason: String },
}

impl From<csv::Error> for MacroError {
    fn from(err: csv::Error) -> Self {
        MacroError::RuleParseError(err.to_string())
    }
}
