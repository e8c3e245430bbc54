use serde::{Deserialize, Serialize};

/// Literal values. Literals never contain identifiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Lit {
    Null,
    Bool(bool),
    Num(f64),
    Str(String),
    BigInt(String),
    Regex { pattern: String, flags: String },
}
