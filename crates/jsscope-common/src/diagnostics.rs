//! Diagnostic types and message lookup.
//!
//! Codes follow the numbering used by TypeScript for the same conditions so
//! that tooling built on top of the resolver can reuse familiar messages.

use serde::Serialize;

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
    Suggestion = 2,
    Message = 3,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub code: u32,
    pub category: DiagnosticCategory,
    pub message: &'static str,
}

pub mod diagnostic_codes {
    pub const DUPLICATE_IDENTIFIER: u32 = 2300;
    pub const CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE: u32 = 2451;
}

pub const DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::DUPLICATE_IDENTIFIER,
        category: DiagnosticCategory::Error,
        message: "Duplicate identifier '{0}'.",
    },
    DiagnosticMessage {
        code: diagnostic_codes::CANNOT_REDECLARE_BLOCK_SCOPED_VARIABLE,
        category: DiagnosticCategory::Error,
        message: "Cannot redeclare block-scoped variable '{0}'.",
    },
];

/// A semantic diagnostic produced while resolving a tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, code: u32) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            message_text: message.into(),
        }
    }

    /// Build a diagnostic from a registered code, substituting `{0}`, `{1}`, ...
    pub fn from_code(code: u32, args: &[&str]) -> Option<Self> {
        DIAGNOSTIC_MESSAGES
            .iter()
            .find(|m| m.code == code)
            .map(|m| Self {
                category: m.category,
                code,
                message_text: format_message(m.message, args),
            })
    }
}

pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}
