use serde::{Deserialize, Serialize};
use std::fmt;

const MULTIPLY: &str = "multiply";

/// Arithmetic requested by the client.
///
/// Only `"multiply"` is defined. Any other tag, including a missing one, is kept
/// verbatim in [`OperationType::Unsupported`] so it can be echoed back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OperationType {
    Multiply,
    Unsupported(String),
}

impl OperationType {
    pub fn as_str(&self) -> &str {
        match self {
            OperationType::Multiply => MULTIPLY,
            OperationType::Unsupported(tag) => tag,
        }
    }
}

impl Default for OperationType {
    fn default() -> Self {
        OperationType::Unsupported(String::new())
    }
}

impl From<String> for OperationType {
    fn from(tag: String) -> Self {
        if tag == MULTIPLY {
            OperationType::Multiply
        } else {
            OperationType::Unsupported(tag)
        }
    }
}

impl From<OperationType> for String {
    fn from(op: OperationType) -> Self {
        match op {
            OperationType::Multiply => MULTIPLY.to_string(),
            OperationType::Unsupported(tag) => tag,
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
